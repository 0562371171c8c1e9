use serde::{Deserialize, Serialize};

use super::{Role, UserId};

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct RegisterResponse {
    pub message: String,
    pub id: UserId,
    pub role: Role,
}
