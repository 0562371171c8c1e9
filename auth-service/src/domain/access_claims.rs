use serde::{Deserialize, Serialize};

use super::user_id::{self, UserId};

/// Payload of an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    #[serde(with = "user_id::as_string")]
    pub sub: UserId, // Subject (user ID)
    pub iat: i64,    // Issued at, seconds since epoch
    pub exp: i64,    // Expiration, seconds since epoch
    pub jti: String, // JWT ID
}
