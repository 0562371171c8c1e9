mod email;
mod name;
mod password;

pub use email::is_valid_email;
pub use name::is_valid_name;
pub use password::is_valid_password;
