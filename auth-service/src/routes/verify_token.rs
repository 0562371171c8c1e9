use axum::extract::State;
use axum::Json;

use crate::app_state::AppState;
use crate::domain::{VerifyTokenRequestBody, VerifyTokenResponse};
use crate::errors::AuthError;

pub async fn verify_token(
    State(state): State<AppState>,
    Json(request): Json<VerifyTokenRequestBody>,
) -> Result<Json<VerifyTokenResponse>, AuthError> {
    let claims = state.access_guard.verify(&request.token)?;

    Ok(Json(VerifyTokenResponse {
        user_id: claims.sub,
        expires_at: claims.exp,
    }))
}
