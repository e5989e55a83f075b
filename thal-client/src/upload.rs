//! Image attachments for menu item uploads

use std::path::Path;

use crate::{ClientError, ClientResult};

/// Supported image formats
pub const SUPPORTED_FORMATS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Maximum attachment size (5MB)
pub const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Binary image attached to a create/update request
#[derive(Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl ImageUpload {
    /// Build an attachment from in-memory bytes
    ///
    /// The content type is guessed from the file extension.
    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> ClientResult<Self> {
        let file_name = file_name.into();
        let extension = Path::new(&file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        if !SUPPORTED_FORMATS.contains(&extension.as_str()) {
            return Err(ClientError::Validation(format!(
                "Unsupported image format: {} (expected one of {})",
                file_name,
                SUPPORTED_FORMATS.join(", ")
            )));
        }
        if bytes.is_empty() {
            return Err(ClientError::Validation(format!("Image is empty: {}", file_name)));
        }
        if bytes.len() > MAX_FILE_SIZE {
            return Err(ClientError::Validation(format!(
                "Image too large: {} bytes (max {} bytes)",
                bytes.len(),
                MAX_FILE_SIZE
            )));
        }

        let content_type = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string();

        Ok(Self {
            file_name,
            content_type,
            bytes,
        })
    }

    /// Read an attachment from disk
    pub async fn from_path(path: impl AsRef<Path>) -> ClientResult<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| ClientError::Validation(format!("Not a file: {}", path.display())))?
            .to_string();

        let metadata = tokio::fs::metadata(path).await?;
        if metadata.len() > MAX_FILE_SIZE as u64 {
            return Err(ClientError::Validation(format!(
                "Image too large: {} bytes (max {} bytes)",
                metadata.len(),
                MAX_FILE_SIZE
            )));
        }

        let bytes = tokio::fs::read(path).await?;
        Self::from_bytes(file_name, bytes)
    }

    /// Lower-cased file extension, used when materialising previews
    pub fn extension(&self) -> String {
        Path::new(&self.file_name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("img")
            .to_ascii_lowercase()
    }

    /// Convert into a multipart file part
    pub(crate) fn into_part(self) -> ClientResult<reqwest::multipart::Part> {
        reqwest::multipart::Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&self.content_type)
            .map_err(|e| ClientError::Validation(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_guessed() {
        let upload = ImageUpload::from_bytes("thali.JPG", vec![0xff, 0xd8]).unwrap();
        assert_eq!(upload.content_type, "image/jpeg");
        assert_eq!(upload.extension(), "jpg");

        let upload = ImageUpload::from_bytes("lassi.webp", vec![1]).unwrap();
        assert_eq!(upload.content_type, "image/webp");
    }

    #[test]
    fn test_rejects_unsupported_format() {
        let err = ImageUpload::from_bytes("menu.pdf", vec![1, 2, 3]).unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }

    #[test]
    fn test_rejects_empty_and_oversized() {
        assert!(ImageUpload::from_bytes("a.png", Vec::new()).is_err());
        assert!(ImageUpload::from_bytes("a.png", vec![0; MAX_FILE_SIZE + 1]).is_err());
    }

    #[tokio::test]
    async fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("samosa.png");
        tokio::fs::write(&path, [0x89, b'P', b'N', b'G']).await.unwrap();

        let upload = ImageUpload::from_path(&path).await.unwrap();
        assert_eq!(upload.file_name, "samosa.png");
        assert_eq!(upload.content_type, "image/png");
        assert_eq!(upload.bytes.len(), 4);

        let missing = ImageUpload::from_path(dir.path().join("nope.png")).await;
        assert!(matches!(missing, Err(ClientError::Io(_))));
    }
}
