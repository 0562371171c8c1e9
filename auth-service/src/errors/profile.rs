use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("name must not be blank")]
    InvalidName,

    #[error("invalid email address")]
    InvalidEmail,

    #[error("password must be at least 8 characters long, contain at least one uppercase letter and one special character.")]
    InvalidPassword,

    #[error("User not found")]
    UserNotFound,

    #[error("Email {0} already registered")]
    EmailAlreadyExists(String),

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for ProfileError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            ProfileError::InvalidName
            | ProfileError::InvalidEmail
            | ProfileError::InvalidPassword => StatusCode::UNPROCESSABLE_ENTITY,
            ProfileError::UserNotFound => StatusCode::NOT_FOUND,
            ProfileError::EmailAlreadyExists(_) => StatusCode::CONFLICT,
            ProfileError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
