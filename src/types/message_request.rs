use serde::{Deserialize, Serialize};

/// Body of `POST /api/message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRequest {
    /// The user's message, already trimmed.
    pub message: String,
}

impl MessageRequest {
    /// Create a new `MessageRequest`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialization() {
        let request = MessageRequest::new("hello");
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"message":"hello"}"#);
    }
}
