use axum::extract::State;
use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::app_state::AppState;
use crate::domain::{Email, Password, RegisterRequestBody, RegisterResponse, Role};
use crate::errors::RegisterError;
use crate::services::AuthService;
use crate::validation::is_valid_name;

pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequestBody>,
) -> Result<impl IntoResponse, RegisterError> {
    if !is_valid_name(&request.name) {
        return Err(RegisterError::InvalidName);
    }
    let email = Email::parse(request.email).or(Err(RegisterError::InvalidEmail))?;
    let password = Password::parse(request.password).or(Err(RegisterError::InvalidPassword))?;
    let role = match request.role.as_deref() {
        Some(raw) => raw.parse::<Role>()?,
        None => Role::default(),
    };

    let user = AuthService::register(&state, request.name, email, password, role).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
            id: user.id,
            role: user.role,
        }),
    ))
}
