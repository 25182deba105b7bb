use folio_models::contact::{ContactSubmission, RelayResponse};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct ApiContactSubmission {
    /// Name of the visitor
    pub name: Option<String>,
    /// Email address to reply to
    pub email: Option<String>,
    pub message: Option<String>,
}

impl From<ApiContactSubmission> for ContactSubmission {
    fn from(value: ApiContactSubmission) -> Self {
        Self {
            name: value.name.unwrap_or_default(),
            email: value.email.unwrap_or_default(),
            message: value.message.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiRelayResponse {
    pub success: bool,
    pub message: String,
}

impl From<RelayResponse> for ApiRelayResponse {
    fn from(value: RelayResponse) -> Self {
        Self {
            success: value.success,
            message: value.message,
        }
    }
}
