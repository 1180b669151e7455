//! The image the user picked

use image::ImageFormat;
use std::path::Path;
use std::sync::Arc;

use crate::error::{Error, Result};

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// In-memory bytes of a user-chosen file
///
/// No type or size validation happens here; whatever the user picks is
/// submitted as-is.
#[derive(Debug, Clone)]
pub struct SelectedImage {
    file_name: String,
    content_type: String,
    bytes: Arc<[u8]>,
}

impl SelectedImage {
    /// Wrap bytes, guessing the content type from the data or the name
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        let file_name = file_name.into();
        let bytes = bytes.into();
        let content_type = guess_content_type(&file_name, &bytes);

        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    /// Read a file from disk
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|source| Error::ReadImage {
            path: path.to_path_buf(),
            source,
        })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        Ok(Self::new(file_name, bytes))
    }

    /// Override the guessed content type
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }
}

/// Sniff the format from magic bytes first, then fall back to the extension
fn guess_content_type(file_name: &str, bytes: &[u8]) -> String {
    image::guess_format(bytes)
        .ok()
        .or_else(|| ImageFormat::from_path(file_name).ok())
        .map(|format| format.to_mime_type().to_string())
        .unwrap_or_else(|| FALLBACK_CONTENT_TYPE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_content_type_from_magic_bytes() {
        let png_header = b"\x89PNG\r\n\x1a\n\0\0\0\0".to_vec();
        let image = SelectedImage::new("no-extension", png_header);
        assert_eq!(image.content_type(), "image/png");
    }

    #[test]
    fn test_content_type_from_extension() {
        let image = SelectedImage::new("car.jpg", b"not really a jpeg".to_vec());
        assert_eq!(image.content_type(), "image/jpeg");
    }

    #[test]
    fn test_unknown_content_type() {
        let image = SelectedImage::new("notes.txt", b"hello".to_vec());
        assert_eq!(image.content_type(), "application/octet-stream");
        assert_eq!(image.len(), 5);
    }

    #[test]
    fn test_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"bytes on disk").unwrap();

        let image = SelectedImage::from_path(file.path()).unwrap();
        assert_eq!(image.bytes(), b"bytes on disk");
        assert!(!image.file_name().is_empty());
    }

    #[test]
    fn test_from_missing_path() {
        let err = SelectedImage::from_path(Path::new("/nonexistent/car.jpg")).unwrap_err();
        assert!(matches!(err, Error::ReadImage { .. }));
    }
}
