use serde::{Deserialize, Serialize};

/// Payload returned by the diagnostic endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct NumberResponse {
    pub number: u8,
}

/// Generic error payload returned by the API.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
