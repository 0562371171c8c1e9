use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::CookieJar;

use crate::app_state::AppState;
use crate::domain::{Email, MessageResponse, Password, UpdateProfileRequestBody, UserProfile};
use crate::errors::ProfileError;
use crate::routes::Authenticated;
use crate::services::{AuthService, ProfileUpdate};
use crate::utils::cookie_helpers::clear_cookie;
use crate::validation::is_valid_name;

pub async fn get_profile(
    State(state): State<AppState>,
    Authenticated(claims): Authenticated,
) -> Result<Json<UserProfile>, ProfileError> {
    let user = AuthService::get_user(&state, claims.sub).await?;
    Ok(Json(UserProfile::from(&user)))
}

pub async fn update_profile(
    State(state): State<AppState>,
    Authenticated(claims): Authenticated,
    Json(request): Json<UpdateProfileRequestBody>,
) -> Result<Json<UserProfile>, ProfileError> {
    let update = parse_update(request)?;
    let user = AuthService::update_profile(&state, claims.sub, update).await?;
    Ok(Json(UserProfile::from(&user)))
}

pub async fn delete_profile(
    State(state): State<AppState>,
    Authenticated(claims): Authenticated,
    jar: CookieJar,
) -> Result<(CookieJar, impl IntoResponse), ProfileError> {
    AuthService::delete_account(&state, claims.sub).await?;

    let jar = jar.add(clear_cookie(state.config.access_cookie_name()));
    Ok((
        jar,
        (
            StatusCode::OK,
            Json(MessageResponse {
                message: "Profile deleted successfully".to_string(),
            }),
        ),
    ))
}

fn parse_update(request: UpdateProfileRequestBody) -> Result<ProfileUpdate, ProfileError> {
    let name = match request.name {
        Some(name) if !is_valid_name(&name) => return Err(ProfileError::InvalidName),
        other => other,
    };
    let email = request
        .email
        .map(Email::parse)
        .transpose()
        .or(Err(ProfileError::InvalidEmail))?;
    let password = request
        .password
        .map(Password::parse)
        .transpose()
        .or(Err(ProfileError::InvalidPassword))?;

    Ok(ProfileUpdate {
        name,
        email,
        password,
    })
}
