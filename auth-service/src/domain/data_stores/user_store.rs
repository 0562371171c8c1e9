use crate::domain::{Email, NewUser, User, UserId};

use super::UserStoreError;

/// Persistence for user records. Access checks resolve token subjects
/// through `get_user_by_id`.
#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    async fn add_user(&mut self, user: NewUser) -> Result<User, UserStoreError>;
    async fn get_user_by_id(&self, id: UserId) -> Result<User, UserStoreError>;
    async fn get_user_by_email(&self, email: &Email) -> Result<User, UserStoreError>;
    async fn update_user(&mut self, user: User) -> Result<User, UserStoreError>;
    async fn delete_user(&mut self, id: UserId) -> Result<User, UserStoreError>;
    async fn list_users(&self) -> Result<Vec<User>, UserStoreError>;
}
