// src/application/ports/security.rs
use crate::application::{ApplicationResult, dto::AuthenticatedUser};
use async_trait::async_trait;

/// Resolves an opaque session token, issued elsewhere, into the acting
/// identity. Verification failures are `ApplicationError::Unauthorized`.
#[async_trait]
pub trait SessionVerifier: Send + Sync {
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser>;
}
