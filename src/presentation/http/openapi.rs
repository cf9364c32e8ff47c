// src/presentation/http/openapi.rs
use serde::{Deserialize, Serialize};
use utoipa::openapi::{
    Components,
    security::{ApiKey, ApiKeyValue, Http, HttpAuthScheme, SecurityScheme},
};
use axum::Extension;
use utoipa::{Modify, OpenApi, ToSchema};

use super::state::HttpState;

const DEFAULT_SESSION_COOKIE: &str = "session";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_published,
        crate::presentation::http::controllers::articles::get_article_by_slug,
        crate::presentation::http::controllers::articles::list_my_articles,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::articles::ArticleFeedParams,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::UpdateArticleRequest,
            crate::presentation::http::controllers::articles::ArticleResponse,
            crate::presentation::http::controllers::articles::ArticleListResponse,
            crate::presentation::http::controllers::articles::ArticleFeedResponse,
            crate::presentation::http::controllers::articles::MessageResponse,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleSummaryDto,
            crate::application::dto::AuthorDto,
            crate::application::dto::TagDto
        )
    ),
    tags(
        (name = "Articles", description = "Article publishing endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Tsuzuri API",
        description = "Article publishing backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
        set_session_cookie_scheme(openapi, DEFAULT_SESSION_COOKIE);
    }
}

fn set_session_cookie_scheme(openapi: &mut utoipa::openapi::OpenApi, cookie_name: &str) {
    openapi
        .components
        .get_or_insert_with(Components::default)
        .add_security_scheme(
            "sessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(cookie_name))),
        );
}

/// The generated document with the cookie scheme renamed to the configured
/// session cookie.
pub fn api_doc_for(cookie_name: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    set_session_cookie_scheme(&mut doc, cookie_name);
    doc
}

pub async fn serve_openapi(
    Extension(state): Extension<HttpState>,
) -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(api_doc_for(&state.session_cookie_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_article_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in [
            "/health",
            "/api/v1/articles",
            "/api/v1/articles/{slug}",
            "/api/v1/me/articles",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn security_schemes_are_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearerAuth"));
        assert!(components.security_schemes.contains_key("sessionCookie"));
    }

    #[test]
    fn cookie_scheme_follows_configured_name() {
        let doc = api_doc_for("tsuzuri_sid");
        let components = doc.components.expect("components");
        let scheme = serde_json::to_value(&components.security_schemes["sessionCookie"]).unwrap();
        assert_eq!(scheme["in"], "cookie");
        assert_eq!(scheme["name"], "tsuzuri_sid");
    }
}
