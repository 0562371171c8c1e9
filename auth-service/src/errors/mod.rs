mod auth;
mod login;
mod profile;
mod register;

pub use auth::*;
pub use login::*;
pub use profile::*;
pub use register::*;
