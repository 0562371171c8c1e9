use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum UserStoreError {
    #[error("user already exists")]
    UserAlreadyExists,
    #[error("user not found")]
    UserNotFound,
    #[error("unexpected user store error: {0}")]
    UnexpectedError(String),
}
