use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;

use crate::app_state::AppState;
use crate::domain::{AccessClaims, Role, User};
use crate::errors::AuthError;

/// Pull the raw token from `Authorization: Bearer <token>`, falling back to
/// the access cookie set at login.
pub fn token_from_parts(parts: &Parts, cookie_name: &str) -> Result<String, AuthError> {
    if let Some(header) = parts.headers.get(AUTHORIZATION) {
        let value = header.to_str().map_err(|_| AuthError::Malformed)?;
        return bearer_token(value).map(str::to_owned);
    }

    CookieJar::from_headers(&parts.headers)
        .get(cookie_name)
        .map(|cookie| cookie.value().to_owned())
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::MissingToken)
}

/// The scheme is case-insensitive; the token must be a single word.
pub fn bearer_token(header: &str) -> Result<&str, AuthError> {
    let mut words = header.split_whitespace();
    match (words.next(), words.next(), words.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => Ok(token),
        (Some(scheme), None, None) if scheme.eq_ignore_ascii_case("bearer") => {
            Err(AuthError::MissingToken)
        }
        _ => Err(AuthError::Malformed),
    }
}

/// A request carrying a valid, unexpired token.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AccessClaims);

#[async_trait]
impl FromRequestParts<AppState> for Authenticated {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = token_from_parts(parts, state.config.access_cookie_name())?;
        let claims = state.access_guard.verify(&token)?;
        Ok(Authenticated(claims))
    }
}

/// A request from an authenticated user whose role is `Role::Admin`.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub User);

#[async_trait]
impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Authenticated(claims) = Authenticated::from_request_parts(parts, state).await?;
        let users = state.user_store.read().await;
        let user = state
            .access_guard
            .require_role(claims.sub, Role::Admin, &*users)
            .await?;
        Ok(RequireAdmin(user))
    }
}
