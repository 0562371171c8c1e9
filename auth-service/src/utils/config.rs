use std::env as std_env;

use base64::engine::general_purpose::{STANDARD as B64_STD, URL_SAFE_NO_PAD as B64_URL};
use base64::Engine;
use dotenvy::dotenv;
use jsonwebtoken::Algorithm;
use thiserror::Error;

use super::consts::{
    env, DEFAULT_ACCESS_COOKIE_NAME, DEFAULT_BIND_ADDRESS, DEFAULT_TOKEN_TTL_SECONDS,
    MAX_TOKEN_TTL_SECONDS,
};

/// Process-wide settings. Built once at startup and shared read-only.
#[derive(Clone)]
pub struct Config {
    jwt_secret: Vec<u8>,
    jwt_algorithm: Algorithm,
    token_ttl_seconds: i64,
    access_cookie_name: String,
    bind_address: String,
}

impl Config {
    /// Build a config in code, with default cookie name and bind address.
    pub fn new(
        jwt_secret: impl Into<Vec<u8>>,
        jwt_algorithm: Algorithm,
        token_ttl_seconds: i64,
    ) -> Result<Self, ConfigError> {
        let jwt_secret = jwt_secret.into();
        if jwt_secret.is_empty() {
            return Err(ConfigError::Invalid("JWT secret must not be empty"));
        }
        ensure_hmac(jwt_algorithm)?;
        if token_ttl_seconds <= 0 {
            return Err(ConfigError::Invalid("token TTL must be positive"));
        }
        if token_ttl_seconds > MAX_TOKEN_TTL_SECONDS {
            return Err(ConfigError::Invalid("token TTL must not exceed one year"));
        }

        Ok(Self {
            jwt_secret,
            jwt_algorithm,
            token_ttl_seconds,
            access_cookie_name: DEFAULT_ACCESS_COOKIE_NAME.to_owned(),
            bind_address: DEFAULT_BIND_ADDRESS.to_owned(),
        })
    }

    pub fn with_access_cookie_name(mut self, name: impl Into<String>) -> Self {
        self.access_cookie_name = name.into();
        self
    }

    pub fn with_bind_address(mut self, address: impl Into<String>) -> Self {
        self.bind_address = address.into();
        self
    }

    pub fn jwt_secret(&self) -> &[u8] {
        &self.jwt_secret
    }
    pub fn jwt_algorithm(&self) -> Algorithm {
        self.jwt_algorithm
    }
    pub fn token_ttl_seconds(&self) -> i64 {
        self.token_ttl_seconds
    }
    pub fn access_cookie_name(&self) -> &str {
        &self.access_cookie_name
    }
    pub fn bind_address(&self) -> &str {
        &self.bind_address
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env in dev; no-op in prod if not present.
        let _ = dotenv();

        let jwt_secret = match opt_var(env::JWT_SECRET_B64) {
            Some(encoded) => {
                decode_b64_any(&encoded).map_err(|_| ConfigError::Decode(env::JWT_SECRET_B64))?
            }
            None => req_var(env::JWT_SECRET)?.into_bytes(),
        };

        let jwt_algorithm = match opt_var(env::JWT_ALGORITHM) {
            Some(raw) => parse_algorithm(&raw)?,
            None => Algorithm::HS256,
        };

        let token_ttl_seconds = match opt_var(env::TOKEN_TTL_SECONDS) {
            Some(_) => parse_i64(env::TOKEN_TTL_SECONDS)?,
            None => DEFAULT_TOKEN_TTL_SECONDS,
        };

        let mut config = Self::new(jwt_secret, jwt_algorithm, token_ttl_seconds)?;
        if let Some(name) = opt_var(env::ACCESS_COOKIE_NAME) {
            config = config.with_access_cookie_name(name);
        }
        if let Some(address) = opt_var(env::BIND_ADDRESS) {
            config = config.with_bind_address(address);
        }
        Ok(config)
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing env var {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
    #[error("decode error in {0}")]
    Decode(&'static str),
}

fn req_var(key: &'static str) -> Result<String, ConfigError> {
    std_env::var(key).map_err(|_| ConfigError::Missing(key))
}

fn opt_var(key: &str) -> Option<String> {
    std_env::var(key).ok().filter(|v| !v.is_empty())
}

fn parse_i64(key: &'static str) -> Result<i64, ConfigError> {
    let v = req_var(key)?;
    v.trim().parse::<i64>().map_err(|_| ConfigError::Invalid(key))
}

fn decode_b64_any(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    // Try URL-safe (no padding) first, then standard.
    B64_URL.decode(s).or_else(|_| B64_STD.decode(s))
}

/// Parse an algorithm identifier such as `HS256`. Only the symmetric HMAC
/// family is accepted since the same secret signs and verifies.
pub fn parse_algorithm(raw: &str) -> Result<Algorithm, ConfigError> {
    let algorithm = raw
        .trim()
        .parse::<Algorithm>()
        .map_err(|_| ConfigError::Invalid(env::JWT_ALGORITHM))?;
    ensure_hmac(algorithm)?;
    Ok(algorithm)
}

fn ensure_hmac(algorithm: Algorithm) -> Result<(), ConfigError> {
    match algorithm {
        Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => Ok(()),
        _ => Err(ConfigError::Invalid(
            "JWT algorithm must be one of HS256, HS384, HS512",
        )),
    }
}
