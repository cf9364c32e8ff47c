// src/infrastructure/security/mod.rs
pub mod session_token;

pub use session_token::{HmacSessionVerifier, SessionClaims};
