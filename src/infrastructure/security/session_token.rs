// src/infrastructure/security/session_token.rs
//! Verifier for session tokens minted by the external login service.
//!
//! Wire format: `base64url(claims_json) "." base64url(HMAC-SHA256(secret, claims_json))`,
//! both segments unpadded.
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
    ports::{security::SessionVerifier, time::Clock},
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::sync::Arc;

type HmacSha256 = Hmac<Sha256>;

pub const MIN_SECRET_LEN: usize = 32;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionClaims {
    /// Author identity (UUID).
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

#[derive(Clone)]
pub struct HmacSessionVerifier {
    secret: Arc<Vec<u8>>,
    clock: Arc<dyn Clock>,
}

impl HmacSessionVerifier {
    pub fn new(secret: impl AsRef<[u8]>, clock: Arc<dyn Clock>) -> ApplicationResult<Self> {
        let secret = secret.as_ref();
        if secret.len() < MIN_SECRET_LEN {
            return Err(ApplicationError::infrastructure(format!(
                "session secret must be at least {MIN_SECRET_LEN} bytes"
            )));
        }
        Ok(Self {
            secret: Arc::new(secret.to_vec()),
            clock,
        })
    }

    fn mac(&self) -> ApplicationResult<HmacSha256> {
        HmacSha256::new_from_slice(&self.secret)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }

    /// Mint a token. Production sessions come from the login service; this
    /// exists for local tooling and tests that share the secret.
    pub fn sign(&self, claims: &SessionClaims) -> ApplicationResult<String> {
        let payload = serde_json::to_vec(claims)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let mut mac = self.mac()?;
        mac.update(&payload);
        let signature = mac.finalize().into_bytes();
        Ok(format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(&payload),
            URL_SAFE_NO_PAD.encode(signature)
        ))
    }

    fn verify(&self, token: &str) -> ApplicationResult<SessionClaims> {
        let invalid = || ApplicationError::unauthorized("invalid session token");

        let (payload_b64, signature_b64) = token.trim().split_once('.').ok_or_else(invalid)?;
        let payload = URL_SAFE_NO_PAD.decode(payload_b64).map_err(|_| invalid())?;
        let signature = URL_SAFE_NO_PAD.decode(signature_b64).map_err(|_| invalid())?;

        let mut mac = self.mac()?;
        mac.update(&payload);
        mac.verify_slice(&signature).map_err(|_| invalid())?;

        serde_json::from_slice(&payload).map_err(|_| invalid())
    }
}

#[async_trait]
impl SessionVerifier for HmacSessionVerifier {
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let claims = self.verify(token)?;

        let expires_at = DateTime::<Utc>::from_timestamp(claims.exp, 0)
            .ok_or_else(|| ApplicationError::unauthorized("invalid session token"))?;
        if expires_at <= self.clock.now() {
            return Err(ApplicationError::unauthorized("session expired"));
        }

        let id: UserId = claims
            .sub
            .parse()
            .map_err(|_| ApplicationError::unauthorized("invalid session subject"))?;

        Ok(AuthenticatedUser {
            id,
            session_id: claims.sid,
            expires_at,
        })
    }
}
