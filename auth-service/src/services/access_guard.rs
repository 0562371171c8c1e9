use std::sync::Arc;

use jsonwebtoken::{decode, Validation};
use tracing::{debug, warn};

use crate::domain::{AccessClaims, Role, User, UserId, UserStore, UserStoreError};
use crate::errors::AuthError;
use crate::services::{Clock, SigningKeys};

/// Decides whether a presented token identifies an authenticated user, and
/// whether that user holds a required role.
#[derive(Clone)]
pub struct AccessGuard {
    keys: Arc<SigningKeys>,
    validation: Validation,
    clock: Arc<dyn Clock>,
}

impl AccessGuard {
    pub fn new(keys: Arc<SigningKeys>, clock: Arc<dyn Clock>) -> Self {
        let mut validation = Validation::new(keys.algorithm());
        validation.set_required_spec_claims(&["exp", "sub"]);
        // Expiry is checked against the injected clock instead.
        validation.validate_exp = false;
        validation.leeway = 0;

        Self {
            keys,
            validation,
            clock,
        }
    }

    /// Check signature and expiry and return the embedded claims.
    ///
    /// The signature is checked before the claims are looked at, so a
    /// tampered payload reports `InvalidSignature` rather than `Malformed`.
    pub fn verify(&self, token: &str) -> Result<AccessClaims, AuthError> {
        let data = decode::<AccessClaims>(token, self.keys.decoding_key(), &self.validation)
            .map_err(|e| {
                debug!(error = %e, "rejected access token");
                AuthError::from(e)
            })?;

        let claims = data.claims;
        if self.clock.now().timestamp() >= claims.exp {
            debug!(user_id = %claims.sub, exp = claims.exp, "access token expired");
            return Err(AuthError::Expired);
        }

        Ok(claims)
    }

    /// Resolve a verified identity to its user record and require an exact
    /// role match.
    pub async fn require_role<S>(
        &self,
        user_id: UserId,
        required: Role,
        users: &S,
    ) -> Result<User, AuthError>
    where
        S: UserStore + ?Sized,
    {
        let user = users.get_user_by_id(user_id).await.map_err(|e| match e {
            UserStoreError::UserNotFound => AuthError::UnknownSubject,
            other => {
                warn!(user_id = %user_id, error = %other, "user lookup failed");
                AuthError::InternalServerError
            }
        })?;

        if user.role != required {
            debug!(user_id = %user_id, role = %user.role, required = %required, "role check failed");
            return Err(AuthError::Forbidden { required });
        }

        Ok(user)
    }

    /// `verify` followed by `require_role`.
    pub async fn authorize<S>(&self, token: &str, required: Role, users: &S) -> Result<User, AuthError>
    where
        S: UserStore + ?Sized,
    {
        let claims = self.verify(token)?;
        self.require_role(claims.sub, required, users).await
    }
}
