// tests/support/mocks/contact_repo.rs
use async_trait::async_trait;
use gardenworks::domain::contact::{ContactId, ContactMessage, ContactRepository, NewContactMessage};
use gardenworks::domain::errors::DomainResult;
use std::sync::Mutex;

/// 受け付けた問い合わせを保持し、テストから参照できるようにする
#[derive(Default)]
pub struct InMemoryContacts {
    messages: Mutex<Vec<ContactMessage>>,
}

impl InMemoryContacts {
    pub fn stored(&self) -> Vec<ContactMessage> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContacts {
    async fn insert(&self, message: NewContactMessage) -> DomainResult<ContactMessage> {
        let mut messages = self.messages.lock().unwrap();
        let stored = ContactMessage {
            id: ContactId::new(messages.len() as i64 + 1)?,
            name: message.name,
            email: message.email,
            comment: message.comment,
            created_at: message.created_at,
        };
        messages.push(stored.clone());
        Ok(stored)
    }
}
