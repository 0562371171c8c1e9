use serde::{Deserialize, Serialize};

pub const BEARER_TOKEN_TYPE: &str = "bearer";

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    /// Seconds until the access token expires.
    pub expires_in: i64,
}
