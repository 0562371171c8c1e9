pub mod access_claims;
pub mod data_stores;
pub mod email;
pub mod issued_token;
pub mod login_request;
pub mod login_response;
pub mod password;
pub mod profile;
pub mod register_request;
pub mod register_response;
pub mod role;
mod user;
pub mod user_id;
pub mod verify_token_request;

pub use access_claims::*;
pub use data_stores::*;
pub use email::*;
pub use issued_token::*;
pub use login_request::*;
pub use login_response::*;
pub use password::*;
pub use profile::*;
pub use register_request::*;
pub use register_response::*;
pub use role::*;
pub use user::*;
pub use user_id::UserId;
pub use verify_token_request::*;
