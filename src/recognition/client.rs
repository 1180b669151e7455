//! HTTP client for the recognition service
//!
//! One multipart POST per submission. There is no retry and, unless the
//! config sets one, no timeout: a request runs until the service answers or
//! the connection fails.

use anyhow::{Context, Result};
use reqwest::multipart::{Form, Part};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::ServiceConfig;
use crate::error::Error;
use crate::recognition::RecognitionResult;
use crate::session::SelectedImage;

/// Multipart field the service reads the image from
pub const UPLOAD_FIELD: &str = "file";

/// Sends images to the `/upload` endpoint
#[derive(Debug, Clone)]
pub struct UploadClient {
    http: reqwest::Client,
    endpoint: String,
}

impl UploadClient {
    /// Create a client for the configured endpoint
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Endpoint this client posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit an image and parse the service's answer
    pub async fn recognize(&self, image: &SelectedImage) -> crate::error::Result<RecognitionResult> {
        info!(
            "Submitting {} ({} bytes, {}) to {}",
            image.file_name(),
            image.len(),
            image.content_type(),
            self.endpoint
        );

        let part = Part::bytes(image.bytes().to_vec())
            .file_name(image.file_name().to_string())
            .mime_str(image.content_type())
            .map_err(|source| {
                warn!("Refusing to upload with content type {:?}", image.content_type());
                Error::InvalidContentType {
                    content_type: image.content_type().to_string(),
                    source,
                }
            })?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                warn!("Upload request failed: {}", e);
                Error::Transport(e)
            })?;

        let status = response.status();
        debug!("Recognition service answered {}", status);
        if !status.is_success() {
            warn!("Recognition service rejected upload with {}", status);
            return Err(Error::Status(status));
        }

        let result = response.json::<RecognitionResult>().await.map_err(|e| {
            warn!("Could not parse recognition response: {}", e);
            Error::Decode(e)
        })?;

        info!("Recognized plate {} ({})", result.text, result.confidence_label());
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(endpoint: String) -> UploadClient {
        let config = ServiceConfig {
            endpoint,
            request_timeout_secs: None,
        };
        UploadClient::new(&config).unwrap()
    }

    fn sample_image() -> SelectedImage {
        SelectedImage::new("car.jpg", b"\xFF\xD8\xFFfake-jpeg".to_vec())
    }

    #[tokio::test]
    async fn test_successful_recognition() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/upload"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "text": "DL8CAF5031", "confidence": 0.94 })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(format!("{}/upload", server.uri()));
        let result = client.recognize(&sample_image()).await.unwrap();

        assert_eq!(result.text, "DL8CAF5031");
        assert_eq!(result.confidence_label(), "94.00%");
    }

    #[tokio::test]
    async fn test_request_is_multipart_with_file_field() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/upload"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "text": "A", "confidence": 0.1 })),
            )
            .mount(&server)
            .await;

        let client = client_for(format!("{}/upload", server.uri()));
        client.recognize(&sample_image()).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);

        let request = &requests[0];
        let content_type = request
            .headers
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap();
        assert!(content_type.starts_with("multipart/form-data"));

        let body = String::from_utf8_lossy(&request.body);
        assert!(body.contains("name=\"file\""));
        assert!(body.contains("filename=\"car.jpg\""));
        assert!(body.to_lowercase().contains("content-type: image/jpeg"));
        assert!(body.contains("fake-jpeg"));
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "detail": "No plate detected" })))
            .mount(&server)
            .await;

        let client = client_for(format!("{}/upload", server.uri()));
        let err = client.recognize(&sample_image()).await.unwrap_err();

        assert!(matches!(err, Error::Status(status) if status.as_u16() == 404));
        assert_eq!(err.user_message(), "Failed to process image");
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = client_for(format!("{}/upload", server.uri()));
        let err = client.recognize(&sample_image()).await.unwrap_err();

        assert!(matches!(err, Error::Decode(_)));
        assert_eq!(err.user_message(), "Failed to process image");
    }

    #[tokio::test]
    async fn test_invalid_content_type_not_sent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(format!("{}/upload", server.uri()));
        let image = sample_image().with_content_type("not a mime type");
        let err = client.recognize(&image).await.unwrap_err();

        assert!(matches!(
            &err,
            Error::InvalidContentType { content_type, .. } if content_type == "not a mime type"
        ));
        assert_eq!(err.user_message(), "Failed to process image");
    }

    #[tokio::test]
    async fn test_connection_refused() {
        // Bind and drop a listener to get a port nothing is listening on
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let client = client_for(format!("http://127.0.0.1:{}/upload", port));
        let err = client.recognize(&sample_image()).await.unwrap_err();

        assert!(matches!(err, Error::Transport(_)));
        assert_eq!(err.user_message(), "Failed to process image");
    }

    #[test]
    fn test_timeout_is_optional() {
        let config = ServiceConfig {
            endpoint: "http://127.0.0.1:8000/upload".to_string(),
            request_timeout_secs: Some(30),
        };
        let client = UploadClient::new(&config).unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:8000/upload");
    }
}
