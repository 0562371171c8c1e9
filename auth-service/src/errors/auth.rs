use axum::http::header::WWW_AUTHENTICATE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::IntoResponse;
use jsonwebtoken::errors::ErrorKind;
use thiserror::Error;

use crate::domain::Role;

/// Why a request could not be authenticated or authorized.
///
/// Everything except `Forbidden` and `InternalServerError` means "missing or
/// invalid credentials" and maps to 401. `Forbidden` means the credentials
/// are fine but the role is not, and maps to 403.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Token not provided")]
    MissingToken,

    #[error("Could not validate credentials: malformed token")]
    Malformed,

    #[error("Could not validate credentials: invalid signature")]
    InvalidSignature,

    #[error("Could not validate credentials: token has expired")]
    Expired,

    #[error("Could not validate credentials: user no longer exists")]
    UnknownSubject,

    #[error("You don't have enough permissions: {required} role required")]
    Forbidden { required: Role },

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingToken
            | AuthError::Malformed
            | AuthError::InvalidSignature
            | AuthError::Expired
            | AuthError::UnknownSubject => StatusCode::UNAUTHORIZED,
            AuthError::Forbidden { .. } => StatusCode::FORBIDDEN,
            AuthError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(error: jsonwebtoken::errors::Error) -> Self {
        match error.kind() {
            // A header naming another algorithm was not signed the way we sign.
            ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                AuthError::InvalidSignature
            }
            ErrorKind::ExpiredSignature => AuthError::Expired,
            _ => AuthError::Malformed,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let mut response = (status, self.to_string()).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}
