use crate::error::{Error, Result};
use crate::utils::determine_content_type;
use std::io;
use std::path::Path;

/// Image MIME types the backend accepts
pub const ALLOWED_MIME_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif", "image/webp"];

/// An in-memory file to upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    /// Name sent with the multipart part
    pub file_name: String,

    /// Declared MIME type
    pub mime_type: String,

    /// Raw file content
    pub data: Vec<u8>,
}

impl UploadFile {
    /// Create an upload from bytes already in memory
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Read an upload from disk, inferring the MIME type from the extension
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Invalid file name: {}", path.display()),
                )
            })?
            .to_string();

        let data = tokio::fs::read(path).await?;

        Ok(Self {
            file_name,
            mime_type: determine_content_type(path).to_string(),
            data,
        })
    }

    /// Declared MIME type, trimmed and lowercased
    pub fn content_type(&self) -> String {
        self.mime_type.trim().to_ascii_lowercase()
    }

    /// Size in bytes
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }
}

/// Immutable limits applied to every upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadConstraints {
    pub max_file_size: u64,
    pub allowed_types: &'static [&'static str],
}

impl UploadConstraints {
    pub fn new(max_file_size: u64) -> Self {
        Self {
            max_file_size,
            allowed_types: ALLOWED_MIME_TYPES,
        }
    }

    /// Check an upload before it is sent. Size is checked before type.
    pub fn validate(&self, file: &UploadFile) -> Result<()> {
        if file.size() > self.max_file_size {
            return Err(Error::FileTooLarge {
                size: file.size(),
                max_file_size: self.max_file_size,
            });
        }

        if !self.is_allowed_type(&file.content_type()) {
            return Err(Error::UnsupportedFileType {
                mime_type: file.mime_type.clone(),
            });
        }

        Ok(())
    }

    fn is_allowed_type(&self, content_type: &str) -> bool {
        self.allowed_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(content_type))
    }
}
