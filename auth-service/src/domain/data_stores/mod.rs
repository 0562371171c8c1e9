pub mod user_store;
pub mod user_store_err;

pub use user_store::UserStore;
pub use user_store_err::UserStoreError;
