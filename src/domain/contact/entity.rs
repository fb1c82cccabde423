use crate::domain::contact::value_objects::{ContactComment, ContactEmail, ContactId, ContactName};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub id: ContactId,
    pub name: ContactName,
    pub email: ContactEmail,
    pub comment: ContactComment,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewContactMessage {
    pub name: ContactName,
    pub email: ContactEmail,
    pub comment: ContactComment,
    pub created_at: DateTime<Utc>,
}
