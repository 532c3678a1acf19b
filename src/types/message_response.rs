use serde::{Deserialize, Serialize};

/// Success body of `POST /api/message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// The bot's reply, including any "Information source" trailer the server appends.
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialization() {
        let json = r#"{"response": "hi there"}"#;
        let response: MessageResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.response, "hi there");
    }

    #[test]
    fn missing_response_is_an_error() {
        assert!(serde_json::from_str::<MessageResponse>("{}").is_err());
    }
}
