// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// Cookie consulted when no `Authorization: Bearer` header is present.
    pub session_cookie_name: Arc<str>,
}
