//! The seam between the chat controller and the transport.

use crate::client::ChatClient;
use crate::error::Result;
use crate::types::{ClearSessionResponse, FileUpload, MessageResponse, UploadResponse};

/// The three remote operations the chat controller depends on.
///
/// [`ChatClient`] is the HTTP implementation; tests substitute in-memory fakes.
#[async_trait::async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send one user message and return the reply.
    async fn send_message(&self, message: &str) -> Result<MessageResponse>;

    /// Upload one file for server-side parsing.
    async fn upload(&self, upload: &FileUpload) -> Result<UploadResponse>;

    /// Clear the server-side session.
    async fn clear_session(&self) -> Result<ClearSessionResponse>;
}

#[async_trait::async_trait]
impl ChatBackend for ChatClient {
    async fn send_message(&self, message: &str) -> Result<MessageResponse> {
        ChatClient::send_message(self, message).await
    }

    async fn upload(&self, upload: &FileUpload) -> Result<UploadResponse> {
        ChatClient::upload(self, upload).await
    }

    async fn clear_session(&self) -> Result<ClearSessionResponse> {
        ChatClient::clear_session(self).await
    }
}
