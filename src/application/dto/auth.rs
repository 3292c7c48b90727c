use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::serde_time;

/// Caller identity resolved from basic credentials or a session cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub username: String,
    pub via: AuthMethod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMethod {
    Basic,
    Session,
}

/// Freshly opened session. `token` is only ever handed to the client.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SessionDto {
    #[serde(skip)]
    pub token: String,
    pub username: String,
    #[serde(with = "serde_time")]
    pub expires_at: DateTime<Utc>,
}
