use tracing::{error, info};

use crate::app_state::AppState;
use crate::domain::{
    Email, IssuedToken, NewUser, Password, Role, User, UserId, UserStoreError,
};
use crate::errors::{LoginError, ProfileError, RegisterError};

/// Field changes for `AuthService::update_profile`. `None` keeps the
/// current value.
#[derive(Debug, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<Email>,
    pub password: Option<Password>,
}

/// Account flows that sit on top of the user store, the password hasher and
/// the token service.
pub struct AuthService;

impl AuthService {
    pub async fn register(
        state: &AppState,
        name: String,
        email: Email,
        password: Password,
        role: Role,
    ) -> Result<User, RegisterError> {
        // add_user re-checks under the write lock.
        if state
            .user_store
            .read()
            .await
            .get_user_by_email(&email)
            .await
            .is_ok()
        {
            return Err(RegisterError::UserAlreadyExists(email.to_string()));
        }

        let password_hash = state.password_hasher.hash(&password).await.map_err(|e| {
            error!(error = %e, "failed to hash password");
            RegisterError::InternalServerError
        })?;

        let new_user = NewUser::new(name.trim().to_owned(), email.clone(), role, password_hash);
        let result = state.user_store.write().await.add_user(new_user).await;
        let user = result.map_err(|e| match e {
            UserStoreError::UserAlreadyExists => RegisterError::UserAlreadyExists(email.to_string()),
            other => {
                error!(error = %other, "failed to store user");
                RegisterError::InternalServerError
            }
        })?;

        info!(user_id = %user.id, role = %user.role, "registered user");
        Ok(user)
    }

    /// Check the credentials and issue an access token.
    pub async fn login(
        state: &AppState,
        email: Email,
        password: Password,
    ) -> Result<(User, IssuedToken), LoginError> {
        let lookup = state.user_store.read().await.get_user_by_email(&email).await;
        let user = match lookup {
            Ok(user) => user,
            Err(UserStoreError::UserNotFound) => return Err(LoginError::InvalidCredentials),
            Err(e) => {
                error!(error = %e, "user lookup failed during login");
                return Err(LoginError::InternalServerError);
            }
        };

        let matches = state
            .password_hasher
            .verify(password.as_ref(), &user.password_hash)
            .await
            .map_err(|e| {
                error!(user_id = %user.id, error = %e, "failed to verify password");
                LoginError::InternalServerError
            })?;
        if !matches {
            info!(user_id = %user.id, "login rejected: wrong password");
            return Err(LoginError::InvalidCredentials);
        }

        let issued = state.token_service.issue(user.id).map_err(|e| {
            error!(user_id = %user.id, error = %e, "failed to issue token");
            LoginError::InternalServerError
        })?;

        info!(user_id = %user.id, "user logged in");
        Ok((user, issued))
    }

    pub async fn get_user(state: &AppState, user_id: UserId) -> Result<User, ProfileError> {
        let result = state.user_store.read().await.get_user_by_id(user_id).await;
        result.map_err(profile_store_error)
    }

    pub async fn update_profile(
        state: &AppState,
        user_id: UserId,
        update: ProfileUpdate,
    ) -> Result<User, ProfileError> {
        let mut user = Self::get_user(state, user_id).await?;

        if let Some(name) = update.name {
            user.name = name.trim().to_owned();
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(password) = update.password {
            user.password_hash = state.password_hasher.hash(&password).await.map_err(|e| {
                error!(user_id = %user_id, error = %e, "failed to hash password");
                ProfileError::InternalServerError
            })?;
        }

        let email = user.email.to_string();
        let result = state.user_store.write().await.update_user(user).await;
        let user = result.map_err(|e| match e {
            UserStoreError::UserAlreadyExists => ProfileError::EmailAlreadyExists(email),
            other => profile_store_error(other),
        })?;

        info!(user_id = %user.id, "updated profile");
        Ok(user)
    }

    pub async fn delete_account(state: &AppState, user_id: UserId) -> Result<User, ProfileError> {
        let result = state.user_store.write().await.delete_user(user_id).await;
        let user = result.map_err(profile_store_error)?;
        info!(user_id = %user.id, "deleted account");
        Ok(user)
    }
}

fn profile_store_error(error: UserStoreError) -> ProfileError {
    match error {
        UserStoreError::UserNotFound => ProfileError::UserNotFound,
        other => {
            error!(error = %other, "user store failure");
            ProfileError::InternalServerError
        }
    }
}
