use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

use crate::domain::UnknownRole;

#[derive(Error, Debug)]
pub enum RegisterError {
    #[error("name must not be blank")]
    InvalidName,

    #[error("invalid email address")]
    InvalidEmail,

    #[error("password must be at least 8 characters long, contain at least one uppercase letter and one special character.")]
    InvalidPassword,

    #[error("{0}")]
    InvalidRole(#[from] UnknownRole),

    #[error("Email {0} already registered")]
    UserAlreadyExists(String),

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for RegisterError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            RegisterError::InvalidName
            | RegisterError::InvalidEmail
            | RegisterError::InvalidPassword
            | RegisterError::InvalidRole(_) => StatusCode::UNPROCESSABLE_ENTITY,
            RegisterError::UserAlreadyExists(_) => StatusCode::CONFLICT,
            RegisterError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
