use axum::extract::State;
use axum::Json;
use tracing::info;

use crate::app_state::AppState;
use crate::domain::UserProfile;
use crate::errors::AuthError;
use crate::routes::RequireAdmin;

pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
) -> Result<Json<Vec<UserProfile>>, AuthError> {
    let users = state
        .user_store
        .read()
        .await
        .list_users()
        .await
        .map_err(|_| AuthError::InternalServerError)?;

    info!(admin_id = %admin.id, count = users.len(), "listed users");
    Ok(Json(users.iter().map(UserProfile::from).collect()))
}
