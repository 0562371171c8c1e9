pub mod access_guard;
pub mod auth;
pub mod clock;
pub mod hashmap_user_store;
pub mod password_hasher;
pub mod signing_keys;
pub mod token_service;

pub use access_guard::*;
pub use auth::*;
pub use clock::*;
pub use hashmap_user_store::*;
pub use password_hasher::*;
pub use signing_keys::*;
pub use token_service::*;
