pub(crate) mod admin;
pub(crate) mod extractors;
pub(crate) mod login;
pub(crate) mod profile;
pub(crate) mod register;
pub(crate) mod users;
pub(crate) mod verify_token;

// re-export items from sub-modules
pub use admin::*;
pub use extractors::*;
pub use login::*;
pub use profile::*;
pub use register::*;
pub use users::*;
pub use verify_token::*;
