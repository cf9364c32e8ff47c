// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, Cookie, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// Acting identity; rejects the request with 401 when absent.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

/// Acting identity if the request carries one. A token that is present but
/// fails verification still rejects the request.
#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<AuthenticatedUser>);

fn session_token(parts: &Parts, cookie_name: &str) -> Option<String> {
    if let Some(header) = parts.headers.typed_get::<Authorization<Bearer>>() {
        return Some(header.token().to_string());
    }

    parts
        .headers
        .typed_get::<Cookie>()
        .and_then(|cookie| cookie.get(cookie_name).map(str::to_string))
        .filter(|token| !token.is_empty())
}

async fn resolve_actor(parts: &Parts) -> Result<Option<AuthenticatedUser>, HttpError> {
    let app_state = parts.extensions.get::<HttpState>().cloned().ok_or_else(|| {
        HttpError::from_error(ApplicationError::Infrastructure(
            "application state missing".into(),
        ))
    })?;

    let Some(token) = session_token(parts, &app_state.session_cookie_name) else {
        return Ok(None);
    };

    app_state
        .services
        .authenticate(&token)
        .await
        .map(Some)
        .map_err(HttpError::from_error)
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        resolve_actor(parts).await?.map(Self).ok_or_else(|| {
            HttpError::from_error(ApplicationError::Unauthorized(
                "authentication required".into(),
            ))
        })
    }
}

impl<S> FromRequestParts<S> for MaybeAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        resolve_actor(parts).await.map(Self)
    }
}
