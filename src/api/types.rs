use serde::{Deserialize, Serialize};

pub use crate::types::FinalDecision as VerifyResponse;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct VerifyRequest {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
