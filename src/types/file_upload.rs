use std::path::Path;

use bytes::Bytes;

use crate::error::{Error, Result};

/// A file selected for upload.
///
/// The payload only lives for the duration of one upload request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    /// File name sent in the multipart part; the server picks its parser from the extension.
    pub file_name: String,

    /// Raw file contents.
    pub content: Bytes,
}

impl FileUpload {
    /// Create a new `FileUpload` from in-memory contents.
    pub fn new(file_name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }

    /// Read a file from disk.
    pub async fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                Error::validation(
                    format!("{} does not name a file", path.display()),
                    Some("file".to_string()),
                )
            })?
            .to_string();
        let content = tokio::fs::read(path)
            .await
            .map_err(|err| Error::io(format!("failed to read {}", path.display()), err))?;
        Ok(Self::new(file_name, content))
    }

    /// Size of the payload in bytes.
    pub fn len(&self) -> u64 {
        self.content.len() as u64
    }

    /// Returns true if the file is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// MIME type for the multipart part, derived from the file extension.
    pub fn mime_type(&self) -> &'static str {
        let extension = self
            .file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase());
        match extension.as_deref() {
            Some("pdf") => "application/pdf",
            Some("txt") => "text/plain",
            Some("csv") => "text/csv",
            Some("docx") => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            _ => "application/octet-stream",
        }
    }
}
