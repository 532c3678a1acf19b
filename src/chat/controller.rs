//! The chat controller.
//!
//! [`ChatController`] turns user actions into requests against a
//! [`ChatBackend`] and records the results in a [`ChatView`]. Every operation
//! reports failures by appending to the visual log and returning an outcome;
//! none of them return `Err` or retry.
//!
//! Operations take `&self`, so a second send may start while the first is
//! still awaiting its reply. The view lock is only taken between suspension
//! points and is never held across a request.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::backend::ChatBackend;
use crate::chat::modal::ClickTarget;
use crate::chat::view::{ChatView, ROOT_PATH};
use crate::error::Error;
use crate::observability::{
    CHAT_EMPTY_SUBMISSIONS, CHAT_MESSAGE_FAILURES, CHAT_MESSAGES_SENT,
    CHAT_SESSION_REFRESH_FAILURES, CHAT_SESSION_REFRESHES, CHAT_UPLOAD_FAILURES, CHAT_UPLOADS,
    CHAT_UPLOADS_REJECTED,
};
use crate::types::upload_policy::HumanBytes;
use crate::types::{FileUpload, Message, UploadPolicy};

/// Shown when a message could not be answered.
pub const SEND_ERROR_TEXT: &str = "An error occurred while processing your message.";

/// Shown when the server accepts an upload without a message of its own.
pub const UPLOAD_SUCCESS_TEXT: &str = "File uploaded and parsed successfully.";

/// Shown when an upload fails.
pub const UPLOAD_ERROR_TEXT: &str = "An error occurred while uploading the file.";

/// Result of [`ChatController::send_message`].
#[derive(Debug, Clone)]
pub enum SendOutcome {
    /// The text was blank; nothing was appended and no request was made.
    Empty,
    /// The server's reply was appended.
    Replied,
    /// The request failed and an error notice was appended.
    Failed(Error),
    /// The page was reloaded while the request was in flight; nothing was appended.
    Abandoned,
}

/// Result of [`ChatController::handle_file_upload`].
#[derive(Debug, Clone)]
pub enum UploadOutcome {
    /// No file was selected.
    NoFile,
    /// The server parsed the file.
    Uploaded,
    /// The upload policy refused the file before any request was made.
    Rejected(Error),
    /// The request failed.
    Failed(Error),
    /// The page was reloaded while the upload was in flight; nothing was appended.
    Abandoned,
}

/// Result of [`ChatController::refresh_session`].
#[derive(Debug, Clone)]
pub enum RefreshOutcome {
    /// The session was cleared and the page reloaded at `/`.
    Navigated,
    /// The session could not be cleared; the page is unchanged.
    Failed(Error),
}

/// Drives a chat page against a backend.
pub struct ChatController<B: ChatBackend> {
    backend: B,
    upload_policy: UploadPolicy,
    view: Mutex<ChatView>,
}

impl<B: ChatBackend> ChatController<B> {
    /// Creates a controller with the hardened upload policy.
    pub fn new(backend: B) -> Self {
        Self::with_policy(backend, UploadPolicy::default())
    }

    /// Creates a controller with a specific upload policy.
    pub fn with_policy(backend: B, upload_policy: UploadPolicy) -> Self {
        Self {
            backend,
            upload_policy,
            view: Mutex::new(ChatView::new()),
        }
    }

    /// The backend requests are sent to.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The active upload policy.
    pub fn upload_policy(&self) -> UploadPolicy {
        self.upload_policy
    }

    /// Runs `f` with exclusive access to the view.
    ///
    /// `f` must not block; the lock is shared with in-flight operations.
    pub fn with_view<R>(&self, f: impl FnOnce(&mut ChatView) -> R) -> R {
        f(&mut self.lock_view())
    }

    /// A copy of the visual log.
    pub fn messages(&self) -> Vec<Message> {
        self.lock_view().log().to_vec()
    }

    /// Sets the input field, as typing would.
    pub fn set_input(&self, input: impl Into<String>) {
        self.lock_view().set_input(input);
    }

    /// Sends the contents of the input field, as pressing Enter would.
    pub async fn submit_input(&self) -> SendOutcome {
        let text = self.lock_view().input().to_string();
        self.send_message(&text).await
    }

    /// Sends one message and appends the reply, or an error notice, to the log.
    pub async fn send_message(&self, text: &str) -> SendOutcome {
        let text = text.trim();
        if text.is_empty() {
            CHAT_EMPTY_SUBMISSIONS.click();
            return SendOutcome::Empty;
        }

        let page = {
            let mut view = self.lock_view();
            view.append(Message::user(text));
            view.clear_input();
            view.page()
        };
        CHAT_MESSAGES_SENT.click();

        match self.backend.send_message(text).await {
            Ok(reply) => {
                if !self.append_to_page(page, Message::bot(reply.response)) {
                    return SendOutcome::Abandoned;
                }
                SendOutcome::Replied
            }
            Err(err) => {
                CHAT_MESSAGE_FAILURES.click();
                tracing::warn!(error = %err, "message failed");
                let notice = match err.server_reason() {
                    Some(reason) => format!("{SEND_ERROR_TEXT} {reason}"),
                    None => SEND_ERROR_TEXT.to_string(),
                };
                if !self.append_to_page(page, Message::bot(notice)) {
                    return SendOutcome::Abandoned;
                }
                SendOutcome::Failed(err)
            }
        }
    }

    /// Uploads the selected file, if any, and appends a confirmation or error notice.
    pub async fn handle_file_upload(&self, file: Option<FileUpload>) -> UploadOutcome {
        let Some(file) = file else {
            return UploadOutcome::NoFile;
        };

        if let Err(err) = self.upload_policy.check(&file) {
            CHAT_UPLOADS_REJECTED.click();
            tracing::warn!(file = %file.file_name, bytes = file.len(), "upload rejected");
            let limit = self.upload_policy.max_bytes().unwrap_or_default();
            self.lock_view().append(Message::bot(format!(
                "File is too large. Maximum size is {}.",
                HumanBytes(limit)
            )));
            return UploadOutcome::Rejected(err);
        }

        CHAT_UPLOADS.click();
        let page = self.lock_view().page();
        match self.backend.upload(&file).await {
            Ok(response) => {
                let text = response
                    .message
                    .unwrap_or_else(|| UPLOAD_SUCCESS_TEXT.to_string());
                if !self.append_to_page(page, Message::bot(text)) {
                    return UploadOutcome::Abandoned;
                }
                UploadOutcome::Uploaded
            }
            Err(err) => {
                CHAT_UPLOAD_FAILURES.click();
                tracing::warn!(file = %file.file_name, error = %err, "upload failed");
                let notice = match err.server_reason() {
                    Some(reason) => format!("{UPLOAD_ERROR_TEXT} {reason}"),
                    None => UPLOAD_ERROR_TEXT.to_string(),
                };
                if !self.append_to_page(page, Message::bot(notice)) {
                    return UploadOutcome::Abandoned;
                }
                UploadOutcome::Failed(err)
            }
        }
    }

    /// Clears the server session and reloads the page at `/`.
    ///
    /// A failure is logged but not shown in the visual log.
    pub async fn refresh_session(&self) -> RefreshOutcome {
        CHAT_SESSION_REFRESHES.click();
        match self.backend.clear_session().await {
            Ok(response) => {
                if let Some(message) = response.message {
                    tracing::debug!(%message, "session cleared");
                }
                self.lock_view().navigate(ROOT_PATH);
                RefreshOutcome::Navigated
            }
            Err(err) => {
                CHAT_SESSION_REFRESH_FAILURES.click();
                tracing::error!(error = %err, "failed to clear session");
                RefreshOutcome::Failed(err)
            }
        }
    }

    /// Shows the modal.
    pub fn open_modal(&self, body: impl Into<String>) {
        self.lock_view().open_modal(body);
    }

    /// Hides the modal.
    pub fn close_modal(&self) {
        self.lock_view().close_modal();
    }

    /// Routes a click to the modal; returns true if it closed.
    pub fn click(&self, target: ClickTarget) -> bool {
        self.lock_view().click(target)
    }

    /// Appends `message` only if the view is still on `page`.
    fn append_to_page(&self, page: u64, message: Message) -> bool {
        let mut view = self.lock_view();
        if view.page() != page {
            tracing::debug!(page, current = view.page(), "dropping reply for a reloaded page");
            return false;
        }
        view.append(message);
        true
    }

    fn lock_view(&self) -> MutexGuard<'_, ChatView> {
        self.view.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
