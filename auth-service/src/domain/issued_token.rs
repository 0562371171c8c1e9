use chrono::{DateTime, Utc};

use super::UserId;

#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub user_id: UserId,
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}
