pub mod config;
pub mod consts;
pub mod cookie_helpers;
pub mod telemetry;

pub use config::{Config, ConfigError};
pub use consts::*;
pub use cookie_helpers::*;
