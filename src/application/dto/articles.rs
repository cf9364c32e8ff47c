use crate::domain::article::{Article, ArticleSummary, ArticleWithAuthor, Tag};
use crate::domain::user::AuthorSummary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct TagDto {
    pub name: String,
    pub slug: String,
}

impl From<Tag> for TagDto {
    fn from(tag: Tag) -> Self {
        Self {
            name: tag.name,
            slug: tag.slug,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    pub id: Uuid,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl From<AuthorSummary> for AuthorDto {
    fn from(author: AuthorSummary) -> Self {
        Self {
            id: author.id.into(),
            username: author.username,
            display_name: author.display_name,
            avatar_url: author.avatar_url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub slug: String,
    pub author_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorDto>,
    pub tags: Vec<TagDto>,
    pub is_published: bool,
    pub is_draft: bool,
    #[serde(default, with = "serde_time::option")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        let is_draft = article.is_draft();
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            content: article.content.into_inner(),
            image_url: article.image_url.map(|url| url.into_inner()),
            slug: article.slug.into_inner(),
            author_id: article.author_id.into(),
            author: None,
            tags: article.tags.into_iter().map(Into::into).collect(),
            is_published: article.is_published,
            is_draft,
            published_at: article.published_at,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

impl From<ArticleWithAuthor> for ArticleDto {
    fn from(value: ArticleWithAuthor) -> Self {
        let mut dto = Self::from(value.article);
        dto.author = value.author.map(Into::into);
        dto
    }
}

/// Feed entry: title, author, publication time, and slug only.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummaryDto {
    pub title: String,
    pub slug: String,
    #[serde(with = "serde_time")]
    pub published_at: DateTime<Utc>,
    pub author_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorDto>,
}

impl From<ArticleSummary> for ArticleSummaryDto {
    fn from(summary: ArticleSummary) -> Self {
        Self {
            title: summary.title.into_inner(),
            slug: summary.slug.into_inner(),
            published_at: summary.published_at,
            author_id: summary.author_id.into(),
            author: summary.author.map(Into::into),
        }
    }
}
