use std::sync::Arc;

use crate::{
    application::{dto::ContactReceiptDto, error::ApplicationResult, ports::time::Clock},
    domain::contact::{
        ContactComment, ContactEmail, ContactName, ContactRepository, NewContactMessage,
    },
};

pub struct SubmitContactCommand {
    pub name: String,
    pub email: String,
    pub comment: String,
}

pub struct ContactCommandService {
    repo: Arc<dyn ContactRepository>,
    clock: Arc<dyn Clock>,
}

impl ContactCommandService {
    pub fn new(repo: Arc<dyn ContactRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn submit(&self, command: SubmitContactCommand) -> ApplicationResult<ContactReceiptDto> {
        let message = NewContactMessage {
            name: ContactName::new(command.name)?,
            email: ContactEmail::new(command.email)?,
            comment: ContactComment::new(command.comment)?,
            created_at: self.clock.now(),
        };

        let stored = self.repo.insert(message).await?;
        tracing::info!(contact_id = i64::from(stored.id), "contact message received");

        Ok(ContactReceiptDto {
            id: stored.id.into(),
            status: "received".to_string(),
        })
    }
}
