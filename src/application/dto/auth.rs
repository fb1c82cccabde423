use crate::domain::user::{Email, User, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionTokenDto {
    pub token: String,
    #[serde(with = "serde_time")]
    pub expires_at: DateTime<Utc>,
    pub expires_in: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i64,
    pub email: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            email: user.email.to_string(),
        }
    }
}

/// Current session as reported to the admin UI ("logged in as ...").
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionDto {
    pub user: UserDto,
    #[serde(with = "serde_time")]
    pub expires_at: DateTime<Utc>,
}

impl From<&AuthenticatedUser> for SessionDto {
    fn from(auth: &AuthenticatedUser) -> Self {
        Self {
            user: UserDto {
                id: auth.id.into(),
                email: auth.email.to_string(),
            },
            expires_at: auth.expires_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub email: Email,
    pub session_digest: String,
    pub expires_at: DateTime<Utc>,
}
