// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use tsuzuri_core::application::{
    ApplicationResult, dto::AuthenticatedUser, error::ApplicationError,
    ports::security::SessionVerifier,
};
use tsuzuri_core::domain::user::UserId;

/// テスト用トークン定数（タイポ防止とIDE補完のため）
pub const ALICE_TOKEN: &str = "alice-token";
pub const BOB_TOKEN: &str = "bob-token";
pub const EXPIRED_TOKEN: &str = "expired-token";

pub const ALICE_ID: &str = "6f1c2a34-8d4e-4b7a-9a0c-1e2f3a4b5c6d";
pub const BOB_ID: &str = "0b9e8d7c-6a5f-4e3d-8c2b-1a0f9e8d7c6b";

pub fn alice_id() -> UserId {
    ALICE_ID.parse().expect("alice id")
}

pub fn bob_id() -> UserId {
    BOB_ID.parse().expect("bob id")
}

/* -------------------------------- SessionVerifier -------------------------------- */

/// 固定トークンを固定ユーザーへ解決する検証器
#[derive(Clone, Debug, Default)]
pub struct StaticSessionVerifier;

#[async_trait]
impl SessionVerifier for StaticSessionVerifier {
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let id = match token {
            ALICE_TOKEN => alice_id(),
            BOB_TOKEN => bob_id(),
            EXPIRED_TOKEN => return Err(ApplicationError::unauthorized("session expired")),
            _ => return Err(ApplicationError::unauthorized("invalid session token")),
        };
        Ok(AuthenticatedUser {
            id,
            session_id: Some(format!("sid-{token}")),
            expires_at: super::time::fixed_now() + Duration::hours(1),
        })
    }
}
