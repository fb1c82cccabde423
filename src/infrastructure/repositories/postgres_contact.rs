use super::map_sqlx;
use crate::domain::contact::{
    ContactComment, ContactEmail, ContactId, ContactMessage, ContactName, ContactRepository,
    NewContactMessage,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresContactRepository {
    pool: PgPool,
}

impl PostgresContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ContactRow {
    id: i64,
    name: String,
    email: String,
    comment: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ContactRow> for ContactMessage {
    type Error = DomainError;

    fn try_from(row: ContactRow) -> Result<Self, Self::Error> {
        Ok(ContactMessage {
            id: ContactId::new(row.id)?,
            name: ContactName::new(row.name)?,
            email: ContactEmail::new(row.email)?,
            comment: ContactComment::new(row.comment)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ContactRepository for PostgresContactRepository {
    async fn insert(&self, message: NewContactMessage) -> DomainResult<ContactMessage> {
        let row = sqlx::query_as::<_, ContactRow>(
            "INSERT INTO contacts (name, email, comment, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id, name, email, comment, created_at",
        )
        .bind(message.name.as_str())
        .bind(message.email.as_str())
        .bind(message.comment.as_str())
        .bind(message.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ContactMessage::try_from(row)
    }
}
