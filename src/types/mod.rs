// Public modules
pub mod clear_session_response;
pub mod error_body;
pub mod file_upload;
pub mod message;
pub mod message_request;
pub mod message_response;
pub mod upload_policy;
pub mod upload_response;

// Re-exports
pub use clear_session_response::ClearSessionResponse;
pub use error_body::ErrorBody;
pub use file_upload::FileUpload;
pub use message::{Message, Role, RoleParseError};
pub use message_request::MessageRequest;
pub use message_response::MessageResponse;
pub use upload_policy::{DEFAULT_MAX_UPLOAD_BYTES, UploadPolicy};
pub use upload_response::UploadResponse;
