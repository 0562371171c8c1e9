use std::collections::HashMap;

use crate::domain::{Email, NewUser, User, UserId, UserStore, UserStoreError};

/// In-memory user store. Ids are assigned sequentially starting at 1 and
/// emails are unique.
pub struct HashmapUserStore {
    users: HashMap<UserId, User>,
    next_id: i64,
}

impl Default for HashmapUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HashmapUserStore {
    pub fn new() -> Self {
        HashmapUserStore {
            users: HashMap::new(),
            next_id: 1,
        }
    }

    pub fn get_user_count(&self) -> usize {
        self.users.len()
    }

    fn email_taken(&self, email: &Email, except: Option<UserId>) -> bool {
        self.users
            .values()
            .any(|u| &u.email == email && Some(u.id) != except)
    }
}

#[async_trait::async_trait]
impl UserStore for HashmapUserStore {
    async fn add_user(&mut self, user: NewUser) -> Result<User, UserStoreError> {
        if self.email_taken(&user.email, None) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        let id = UserId::new(self.next_id);
        self.next_id += 1;

        let user = user.with_id(id);
        self.users.insert(id, user.clone());
        Ok(user)
    }

    async fn get_user_by_id(&self, id: UserId) -> Result<User, UserStoreError> {
        self.users
            .get(&id)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn get_user_by_email(&self, email: &Email) -> Result<User, UserStoreError> {
        self.users
            .values()
            .find(|u| &u.email == email)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn update_user(&mut self, user: User) -> Result<User, UserStoreError> {
        if !self.users.contains_key(&user.id) {
            return Err(UserStoreError::UserNotFound);
        }
        if self.email_taken(&user.email, Some(user.id)) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        self.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete_user(&mut self, id: UserId) -> Result<User, UserStoreError> {
        self.users.remove(&id).ok_or(UserStoreError::UserNotFound)
    }

    async fn list_users(&self) -> Result<Vec<User>, UserStoreError> {
        let mut users: Vec<User> = self.users.values().cloned().collect();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }
}
