use serde::{Deserialize, Serialize};

/// Success body of `POST /api/upload`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Confirmation supplied by the server, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialization() {
        let json = r#"{"message": "File uploaded and parsed successfully."}"#;
        let response: UploadResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.message.as_deref(),
            Some("File uploaded and parsed successfully.")
        );

        let response: UploadResponse = serde_json::from_str("{}").unwrap();
        assert!(response.message.is_none());
    }
}
