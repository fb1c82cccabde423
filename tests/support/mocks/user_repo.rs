// tests/support/mocks/user_repo.rs
use async_trait::async_trait;
use gardenworks::domain::errors::{DomainError, DomainResult};
use gardenworks::domain::user::{Email, NewUser, User, UserId, UserRepository};
use std::sync::Mutex;

/// メールアドレスの一意性のみを再現するユーザーリポジトリ
#[derive(Default)]
pub struct InMemoryUsers {
    users: Mutex<Vec<User>>,
}

impl InMemoryUsers {
    pub fn deactivate(&self, email: &str) {
        let mut users = self.users.lock().unwrap();
        for user in users.iter_mut().filter(|u| u.email.as_str() == email) {
            user.is_active = false;
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn count(&self) -> DomainResult<u64> {
        Ok(self.users.lock().unwrap().len() as u64)
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == new_user.email) {
            return Err(DomainError::Conflict("email already exists".into()));
        }
        let user = User {
            id: UserId::new(users.len() as i64 + 1)?,
            email: new_user.email,
            password_hash: new_user.password_hash,
            is_active: new_user.is_active,
            created_at: new_user.created_at,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| &u.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }
}
