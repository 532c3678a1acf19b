use serde::{Deserialize, Serialize};

/// Failure body the chat server may attach to a non-success status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable reason, e.g. "No file part" or "Unsupported file type".
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Parse a response body, returning the `error` field when the body is
    /// JSON and carries one.
    pub fn reason(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_from_json() {
        assert_eq!(
            ErrorBody::reason(r#"{"error": "No file part"}"#),
            Some("No file part".to_string())
        );
    }

    #[test]
    fn reason_absent() {
        assert_eq!(ErrorBody::reason("{}"), None);
        assert_eq!(ErrorBody::reason("<html>Internal Server Error</html>"), None);
        assert_eq!(ErrorBody::reason(""), None);
    }
}
