use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// Acting identity attached to a request after session verification.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub session_id: Option<String>,
    pub expires_at: DateTime<Utc>,
}
