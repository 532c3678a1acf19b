use serde::{Deserialize, Serialize};

/// Success body of `POST /api/clear_session`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearSessionResponse {
    /// Status text such as "Session cleared successfully".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
