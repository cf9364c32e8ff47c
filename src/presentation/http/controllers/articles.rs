// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::{ArticleDto, ArticleSummaryDto, CursorPage},
    error::ApplicationError,
    queries::articles::{GetArticleBySlugQuery, ListPublishedQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Distinguishes an explicit `null` (`Some(None)`) from an absent field (`None`).
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ArticleFeedParams {
    /// Page size. Non-numeric values fall back to 10; numbers are clamped
    /// to the configured maximum.
    #[serde(default)]
    pub limit: Option<String>,
    /// `publishedAt` of the last item of the previous page.
    #[serde(default)]
    pub cursor: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Defaults to `true`.
    #[serde(default)]
    pub is_published: Option<bool>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticleRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    /// Absent keeps the image, `null` removes it.
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<String>, nullable)]
    pub image_url: Option<Option<String>>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub is_published: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleResponse {
    pub message: String,
    pub article: ArticleDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleListResponse {
    pub message: String,
    pub items: Vec<ArticleDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleFeedResponse {
    pub message: String,
    pub items: Vec<ArticleSummaryDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

impl ArticleFeedResponse {
    fn new(message: impl Into<String>, page: CursorPage<ArticleSummaryDto>) -> Self {
        Self {
            message: message.into(),
            items: page.items,
            next_cursor: page.next_cursor,
            has_more: page.has_more,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(ArticleFeedParams),
    responses(
        (status = 200, description = "Published feed page, newest first.", body = ArticleFeedResponse),
        (status = 400, description = "Malformed cursor.", body = ErrorResponse),
        (status = 500, description = "Store failure.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_published(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleFeedParams>,
) -> HttpResult<Json<ArticleFeedResponse>> {
    let page = state
        .services
        .article_queries
        .list_published(ListPublishedQuery {
            limit: params.limit,
            cursor: params.cursor,
        })
        .await
        .into_http()?;

    Ok(Json(ArticleFeedResponse::new("articles fetched", page)))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Article with author details.", body = ArticleResponse),
        (status = 400, description = "Missing slug.", body = ErrorResponse),
        (status = 404, description = "No article with this slug.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleResponse>> {
    let article = state
        .services
        .article_queries
        .get_article_by_slug(GetArticleBySlugQuery { slug })
        .await
        .into_http()?;

    Ok(Json(ArticleResponse {
        message: "article fetched".into(),
        article,
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/me/articles",
    responses(
        (status = 200, description = "Articles written by the caller.", body = ArticleListResponse),
        (status = 401, description = "No session.", body = ErrorResponse),
        (status = 404, description = "Caller has no articles.", body = ErrorResponse)
    ),
    security(("bearerAuth" = []), ("sessionCookie" = [])),
    tag = "Articles"
)]
pub async fn list_my_articles(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
) -> HttpResult<Json<ArticleListResponse>> {
    let items = state
        .services
        .article_queries
        .list_my_articles(actor.0.as_ref())
        .await
        .into_http()?;

    Ok(Json(ArticleListResponse {
        message: "articles fetched".into(),
        items,
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleResponse),
        (status = 400, description = "Missing title or content.", body = ErrorResponse),
        (status = 401, description = "No session.", body = ErrorResponse)
    ),
    security(("bearerAuth" = []), ("sessionCookie" = [])),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    payload: Result<Json<CreateArticleRequest>, JsonRejection>,
) -> HttpResult<(StatusCode, Json<ArticleResponse>)> {
    let Json(payload) = payload?;

    let mut builder = CreateArticleCommand::builder()
        .published(payload.is_published.unwrap_or(true));
    if let Some(title) = payload.title {
        builder = builder.title(title);
    }
    if let Some(content) = payload.content {
        builder = builder.content(content);
    }
    if let Some(image_url) = payload.image_url {
        builder = builder.image_url(image_url);
    }
    for tag in payload.tags.unwrap_or_default() {
        builder = builder.tag(tag);
    }
    let command = builder
        .build()
        .map_err(|reason| HttpError::from_error(ApplicationError::validation(reason)))?;

    let article = state
        .services
        .article_commands
        .create_article(&user, command)
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(ArticleResponse {
            message: "article created".into(),
            article,
        }),
    ))
}

#[utoipa::path(
    patch,
    path = "/api/v1/articles/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Article updated.", body = ArticleResponse),
        (status = 400, description = "Blank slug or no acting identity.", body = ErrorResponse),
        (status = 401, description = "Invalid or expired session.", body = ErrorResponse),
        (status = 403, description = "Caller is not the author.", body = ErrorResponse),
        (status = 404, description = "No article with this slug.", body = ErrorResponse)
    ),
    security(("bearerAuth" = []), ("sessionCookie" = [])),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(slug): Path<String>,
    payload: Result<Json<UpdateArticleRequest>, JsonRejection>,
) -> HttpResult<Json<ArticleResponse>> {
    let Json(payload) = payload?;

    let command = UpdateArticleCommand {
        slug,
        title: payload.title,
        content: payload.content,
        image_url: payload.image_url,
        tags: payload.tags,
        is_published: payload.is_published,
    };

    let article = state
        .services
        .article_commands
        .update_article(actor.0.as_ref(), command)
        .await
        .into_http()?;

    Ok(Json(ArticleResponse {
        message: "article updated".into(),
        article,
    }))
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Article deleted.", body = MessageResponse),
        (status = 400, description = "Blank slug or no acting identity.", body = ErrorResponse),
        (status = 401, description = "Invalid or expired session.", body = ErrorResponse),
        (status = 403, description = "Caller is not the author.", body = ErrorResponse),
        (status = 404, description = "No article with this slug.", body = ErrorResponse)
    ),
    security(("bearerAuth" = []), ("sessionCookie" = [])),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<MessageResponse>> {
    state
        .services
        .article_commands
        .delete_article(actor.0.as_ref(), DeleteArticleCommand { slug })
        .await
        .into_http()?;

    Ok(Json(MessageResponse {
        message: "article deleted".into(),
    }))
}
