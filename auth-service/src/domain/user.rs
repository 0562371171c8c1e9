use super::{Email, Role, UserId};

/// A stored account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub role: Role,
    pub password_hash: String,
}

/// An account that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: Email,
    pub role: Role,
    pub password_hash: String,
}

impl NewUser {
    pub fn new(name: String, email: Email, role: Role, password_hash: String) -> Self {
        NewUser {
            name,
            email,
            role,
            password_hash,
        }
    }

    pub fn with_id(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            role: self.role,
            password_hash: self.password_hash,
        }
    }
}
