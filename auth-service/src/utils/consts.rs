pub mod env {
    pub const JWT_SECRET: &str = "JWT_SECRET";
    pub const JWT_SECRET_B64: &str = "JWT_SECRET_B64";
    pub const JWT_ALGORITHM: &str = "JWT_ALGORITHM";
    pub const TOKEN_TTL_SECONDS: &str = "TOKEN_TTL_SECONDS";
    pub const ACCESS_COOKIE_NAME: &str = "ACCESS_COOKIE_NAME";
    pub const BIND_ADDRESS: &str = "BIND_ADDRESS";
}

pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 30 * 60;
pub const MAX_TOKEN_TTL_SECONDS: i64 = 365 * 24 * 60 * 60;
pub const DEFAULT_ACCESS_COOKIE_NAME: &str = "access_token";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";
