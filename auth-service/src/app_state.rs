use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::UserStore;
use crate::services::{AccessGuard, Argon2Hasher, Clock, SigningKeys, TokenService};
use crate::utils::Config;

// Using type aliases to improve readability!
pub type UserStoreType = Arc<RwLock<dyn UserStore>>;
pub type TokenServiceType = Arc<TokenService>;
pub type AccessGuardType = Arc<AccessGuard>;
pub type ConfigType = Arc<Config>;

#[derive(Clone)]
pub struct AppState {
    pub user_store: UserStoreType,
    pub token_service: TokenServiceType,
    pub access_guard: AccessGuardType,
    pub password_hasher: Arc<Argon2Hasher>,
    pub config: ConfigType,
}

impl AppState {
    pub fn new(
        user_store: UserStoreType,
        token_service: TokenServiceType,
        access_guard: AccessGuardType,
        password_hasher: Arc<Argon2Hasher>,
        config: ConfigType,
    ) -> Self {
        Self {
            user_store,
            token_service,
            access_guard,
            password_hasher,
            config,
        }
    }

    /// Wire the token service and access guard to one shared set of signing
    /// keys derived from `config`.
    pub fn from_config(config: Config, user_store: UserStoreType, clock: Arc<dyn Clock>) -> Self {
        let keys = Arc::new(SigningKeys::from_config(&config));
        let token_service = TokenService::from_config(&config, keys.clone(), clock.clone());
        let access_guard = AccessGuard::new(keys, clock);

        Self::new(
            user_store,
            Arc::new(token_service),
            Arc::new(access_guard),
            Arc::new(Argon2Hasher::default()),
            Arc::new(config),
        )
    }
}
