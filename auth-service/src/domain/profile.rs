use serde::{Deserialize, Serialize};

use super::{Role, User, UserId};

/// Public view of a user, as returned by the user lookup endpoint.
#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct UserSummary {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        UserSummary {
            id: user.id,
            name: user.name.clone(),
            email: user.email.as_ref().to_owned(),
        }
    }
}

/// The caller's own account, including the role.
#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        UserProfile {
            id: user.id,
            name: user.name.clone(),
            email: user.email.as_ref().to_owned(),
            role: user.role,
        }
    }
}

/// Fields left out are kept as they are.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct UpdateProfileRequestBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}
