use axum::extract::{Path, State};
use axum::Json;

use crate::app_state::AppState;
use crate::domain::{UserId, UserSummary};
use crate::errors::ProfileError;
use crate::services::AuthService;

pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<UserSummary>, ProfileError> {
    let user = AuthService::get_user(&state, UserId::new(user_id)).await?;
    Ok(Json(UserSummary::from(&user)))
}
