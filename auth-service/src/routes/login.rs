use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::CookieJar;

use crate::app_state::AppState;
use crate::domain::{Email, LoginRequestBody, LoginResponse, Password, BEARER_TOKEN_TYPE};
use crate::errors::LoginError;
use crate::services::AuthService;
use crate::utils::cookie_helpers::access_cookie;

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequestBody>,
) -> Result<(CookieJar, impl IntoResponse), LoginError> {
    let email = Email::parse(request.email).or(Err(LoginError::InvalidEmail))?;
    let password = Password::parse(request.password).or(Err(LoginError::InvalidPassword))?;

    let (_user, issued) = AuthService::login(&state, email, password).await?;

    let ttl_seconds = state.token_service.ttl().num_seconds();
    let jar = jar.add(access_cookie(
        state.config.access_cookie_name(),
        &issued.access_token,
        ttl_seconds,
    ));

    Ok((
        jar,
        (
            StatusCode::OK,
            Json(LoginResponse {
                access_token: issued.access_token,
                token_type: BEARER_TOKEN_TYPE.to_string(),
                expires_in: ttl_seconds,
            }),
        ),
    ))
}
