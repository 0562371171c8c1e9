use serde::{Deserialize, Serialize};

use super::UserId;

#[derive(Deserialize, Serialize, Debug)]
pub struct VerifyTokenRequestBody {
    pub token: String,
}

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct VerifyTokenResponse {
    pub user_id: UserId,
    pub expires_at: i64,
}
