//! Error types for plate-desk
//!
//! Every failure the user can see funnels into a single alert. The variants
//! keep the underlying cause for logging; `user_message` decides what the
//! alert says.

use std::path::PathBuf;
use thiserror::Error;

/// Message shown when submit is pressed with nothing selected
pub const NO_FILE_MESSAGE: &str = "Please select an image";

/// Message shown for every remote failure
pub const PROCESSING_FAILED_MESSAGE: &str = "Failed to process image";

/// Errors raised while selecting or submitting an image
#[derive(Error, Debug)]
pub enum Error {
    /// Submit was requested before any file was chosen
    #[error("no image selected")]
    NoFileSelected,

    /// Submit was requested while a request is still running
    #[error("a submission is already in flight")]
    SubmissionInFlight,

    /// The chosen file could not be read from disk
    #[error("failed to read image {path}: {source}")]
    ReadImage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The selected image carries a content type that is not a valid MIME type
    #[error("invalid content type {content_type:?}: {source}")]
    InvalidContentType {
        content_type: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-2xx status
    #[error("recognition service returned {0}")]
    Status(reqwest::StatusCode),

    /// The request never produced a response
    #[error("request to recognition service failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body was not a recognition result
    #[error("malformed recognition response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl Error {
    /// Text shown in the alert for this error
    pub fn user_message(&self) -> String {
        match self {
            Error::NoFileSelected => NO_FILE_MESSAGE.to_string(),
            Error::SubmissionInFlight => "Detection is already running".to_string(),
            Error::ReadImage { path, .. } => format!("Could not read {}", path.display()),
            Error::InvalidContentType { .. }
            | Error::Status(_)
            | Error::Transport(_)
            | Error::Decode(_) => PROCESSING_FAILED_MESSAGE.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
