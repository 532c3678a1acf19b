//! Error types for the docchat client.
//!
//! Every failure an interaction can run into is folded into [`Error`]: transport
//! failures, non-success statuses reported by the chat server, undecodable
//! bodies, and client-side rejections that never reach the network.

use std::error;
use std::fmt;
use std::io;
use std::sync::Arc;

/// The main error type for docchat.
#[derive(Clone, Debug)]
pub enum Error {
    /// The server answered with a non-success status not covered below.
    Api {
        /// HTTP status code.
        status_code: u16,
        /// Reason reported by the server, or the raw body if it was not JSON.
        message: String,
        /// True if `message` came from the server's structured `error` field.
        structured: bool,
    },

    /// The server rejected the request as malformed (400).
    BadRequest {
        /// Human-readable error message.
        message: String,
        /// True if `message` came from the server's structured `error` field.
        structured: bool,
    },

    /// The endpoint does not exist (404).
    NotFound {
        /// Human-readable error message.
        message: String,
        /// True if `message` came from the server's structured `error` field.
        structured: bool,
    },

    /// Server returned a 500 internal error.
    InternalServer {
        /// Human-readable error message.
        message: String,
        /// True if `message` came from the server's structured `error` field.
        structured: bool,
    },

    /// The request timed out before a response arrived.
    Timeout {
        /// Human-readable error message.
        message: String,
        /// Duration of the timeout in seconds, when one was configured.
        duration: Option<f64>,
    },

    /// The server could not be reached.
    Connection {
        /// Human-readable error message.
        message: String,
        /// Underlying cause.
        source: Option<Arc<dyn error::Error + Send + Sync>>,
    },

    /// Error during JSON serialization or deserialization.
    Serialization {
        /// Human-readable error message.
        message: String,
        /// The underlying error.
        source: Option<Arc<dyn error::Error + Send + Sync>>,
    },

    /// I/O error, e.g. while reading a file selected for upload.
    Io {
        /// Human-readable error message.
        message: String,
        /// The underlying error.
        source: Arc<io::Error>,
    },

    /// HTTP client error.
    HttpClient {
        /// Human-readable error message.
        message: String,
        /// The underlying error.
        source: Option<Arc<dyn error::Error + Send + Sync>>,
    },

    /// A request was rejected on the client before it was sent.
    Validation {
        /// Human-readable error message.
        message: String,
        /// Parameter that failed validation.
        param: Option<String>,
    },

    /// A URL parsing or manipulation error.
    Url {
        /// Human-readable error message.
        message: String,
        /// The underlying error.
        source: Option<url::ParseError>,
    },
}

impl Error {
    /// Creates a new API error.
    pub fn api(status_code: u16, message: impl Into<String>, structured: bool) -> Self {
        Error::Api {
            status_code,
            message: message.into(),
            structured,
        }
    }

    /// Creates a new bad request error.
    pub fn bad_request(message: impl Into<String>, structured: bool) -> Self {
        Error::BadRequest {
            message: message.into(),
            structured,
        }
    }

    /// Creates a new not found error.
    pub fn not_found(message: impl Into<String>, structured: bool) -> Self {
        Error::NotFound {
            message: message.into(),
            structured,
        }
    }

    /// Creates a new internal server error.
    pub fn internal_server(message: impl Into<String>, structured: bool) -> Self {
        Error::InternalServer {
            message: message.into(),
            structured,
        }
    }

    /// Creates a new timeout error.
    pub fn timeout(message: impl Into<String>, duration: Option<f64>) -> Self {
        Error::Timeout {
            message: message.into(),
            duration,
        }
    }

    /// Creates a new connection error.
    pub fn connection(
        message: impl Into<String>,
        source: Option<Box<dyn error::Error + Send + Sync>>,
    ) -> Self {
        Error::Connection {
            message: message.into(),
            source: source.map(Arc::from),
        }
    }

    /// Creates a new serialization error.
    pub fn serialization(
        message: impl Into<String>,
        source: Option<Box<dyn error::Error + Send + Sync>>,
    ) -> Self {
        Error::Serialization {
            message: message.into(),
            source: source.map(Arc::from),
        }
    }

    /// Creates a new I/O error.
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Error::Io {
            message: message.into(),
            source: Arc::new(source),
        }
    }

    /// Creates a new HTTP client error.
    pub fn http_client(
        message: impl Into<String>,
        source: Option<Box<dyn error::Error + Send + Sync>>,
    ) -> Self {
        Error::HttpClient {
            message: message.into(),
            source: source.map(Arc::from),
        }
    }

    /// Creates a new validation error.
    pub fn validation(message: impl Into<String>, param: Option<String>) -> Self {
        Error::Validation {
            message: message.into(),
            param,
        }
    }

    /// Creates a new URL error.
    pub fn url(message: impl Into<String>, source: Option<url::ParseError>) -> Self {
        Error::Url {
            message: message.into(),
            source,
        }
    }

    /// Returns true if the request never produced an HTTP response.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Connection { .. } | Error::Timeout { .. } | Error::HttpClient { .. }
        )
    }

    /// Returns true if the server answered with a non-success status.
    pub fn is_status(&self) -> bool {
        self.status_code().is_some()
    }

    /// Returns true if this error is a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout { .. })
    }

    /// Returns true if this error is a connection error.
    pub fn is_connection(&self) -> bool {
        matches!(self, Error::Connection { .. })
    }

    /// Returns true if this error is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }

    /// Returns the status code associated with this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api { status_code, .. } => Some(*status_code),
            Error::BadRequest { .. } => Some(400),
            Error::NotFound { .. } => Some(404),
            Error::InternalServer { .. } => Some(500),
            _ => None,
        }
    }

    /// Returns the reason the server reported in its `error` field, if any.
    pub fn server_reason(&self) -> Option<&str> {
        match self {
            Error::Api {
                message,
                structured: true,
                ..
            }
            | Error::BadRequest {
                message,
                structured: true,
            }
            | Error::NotFound {
                message,
                structured: true,
            }
            | Error::InternalServer {
                message,
                structured: true,
            } => Some(message.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Api {
                status_code,
                message,
                ..
            } => {
                write!(f, "API error ({status_code}): {message}")
            }
            Error::BadRequest { message, .. } => {
                write!(f, "Bad request: {message}")
            }
            Error::NotFound { message, .. } => {
                write!(f, "Resource not found: {message}")
            }
            Error::InternalServer { message, .. } => {
                write!(f, "Internal server error: {message}")
            }
            Error::Timeout { message, duration } => {
                if let Some(duration) = duration {
                    write!(f, "Timeout error: {message} ({duration} seconds)")
                } else {
                    write!(f, "Timeout error: {message}")
                }
            }
            Error::Connection { message, .. } => {
                write!(f, "Connection error: {message}")
            }
            Error::Serialization { message, .. } => {
                write!(f, "Serialization error: {message}")
            }
            Error::Io { message, .. } => {
                write!(f, "I/O error: {message}")
            }
            Error::HttpClient { message, .. } => {
                write!(f, "HTTP client error: {message}")
            }
            Error::Validation { message, param } => {
                if let Some(param) = param {
                    write!(f, "Validation error: {message} (parameter: {param})")
                } else {
                    write!(f, "Validation error: {message}")
                }
            }
            Error::Url { message, .. } => {
                write!(f, "URL error: {message}")
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Connection { source, .. } => source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn error::Error + 'static)),
            Error::Serialization { source, .. } => source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn error::Error + 'static)),
            Error::Io { source, .. } => Some(source),
            Error::HttpClient { source, .. } => source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn error::Error + 'static)),
            Error::Url { source, .. } => {
                source.as_ref().map(|e| e as &(dyn error::Error + 'static))
            }
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::io(err.to_string(), err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::serialization(format!("JSON error: {err}"), Some(Box::new(err)))
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::url(format!("URL parse error: {err}"), Some(err))
    }
}

/// A specialized Result type for docchat operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_reason_only_for_structured_errors() {
        let err = Error::internal_server("Unsupported file type", true);
        assert_eq!(err.server_reason(), Some("Unsupported file type"));

        let err = Error::internal_server("<html>boom</html>", false);
        assert_eq!(err.server_reason(), None);

        let err = Error::not_found("No such endpoint", true);
        assert_eq!(err.server_reason(), Some("No such endpoint"));

        let err = Error::api(408, "No file part", true);
        assert_eq!(err.server_reason(), Some("No file part"));

        let err = Error::connection("refused", None);
        assert_eq!(err.server_reason(), None);
    }

    #[test]
    fn status_codes() {
        assert_eq!(Error::bad_request("No file part", true).status_code(), Some(400));
        assert_eq!(Error::not_found("missing", false).status_code(), Some(404));
        assert_eq!(Error::api(418, "teapot", false).status_code(), Some(418));
        assert_eq!(Error::timeout("slow", None).status_code(), None);
        assert!(Error::api(503, "down", false).is_status());
    }

    #[test]
    fn transport_errors() {
        assert!(Error::connection("refused", None).is_transport());
        assert!(Error::timeout("slow", Some(5.0)).is_transport());
        assert!(!Error::validation("too big", None).is_transport());
        assert!(!Error::bad_request("nope", false).is_transport());
        assert!(!Error::api(408, "Request Timeout", false).is_transport());
        assert!(Error::api(408, "Request Timeout", false).is_status());
    }

    #[test]
    fn display_includes_details() {
        let err = Error::validation("file too large", Some("file".to_string()));
        assert_eq!(
            err.to_string(),
            "Validation error: file too large (parameter: file)"
        );
        let err = Error::api(502, "bad gateway", false);
        assert_eq!(err.to_string(), "API error (502): bad gateway");
    }
}
