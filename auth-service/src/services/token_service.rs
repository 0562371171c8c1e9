/// Access token issuance.
///
/// Tokens are stateless HMAC-signed JWTs carrying the user id (`sub`), the
/// issue time (`iat`), the expiry (`exp`) and a random token id (`jti`).
/// Nothing is persisted: a token stays valid until `exp` passes or the
/// signing secret changes. Verification lives in `AccessGuard`.
use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::{encode, Header};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::domain::{AccessClaims, IssuedToken, UserId};
use crate::services::{Clock, SigningKeys};
use crate::utils::Config;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("failed to sign access token: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
    #[error("token expiry is out of the representable date range")]
    ExpiryOutOfRange,
}

#[derive(Clone)]
pub struct TokenService {
    keys: Arc<SigningKeys>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl TokenService {
    pub fn new(keys: Arc<SigningKeys>, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self { keys, ttl, clock }
    }

    pub fn from_config(config: &Config, keys: Arc<SigningKeys>, clock: Arc<dyn Clock>) -> Self {
        Self::new(keys, Duration::seconds(config.token_ttl_seconds()), clock)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Sign a token for an already authenticated user, valid for the
    /// configured TTL from now.
    pub fn issue(&self, user_id: UserId) -> Result<IssuedToken, TokenError> {
        let now = self.clock.now();
        let expires_at = now
            .checked_add_signed(self.ttl)
            .ok_or(TokenError::ExpiryOutOfRange)?;

        let claims = AccessClaims {
            sub: user_id,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        let header = Header::new(self.keys.algorithm());
        let access_token = encode(&header, &claims, self.keys.encoding_key())?;

        debug!(user_id = %user_id, exp = claims.exp, "issued access token");

        Ok(IssuedToken {
            user_id,
            access_token,
            expires_at,
        })
    }
}
