// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleContent, ArticleId, ArticleReadRepository, ArticleSlug, ArticleSummary,
    ArticleTitle, ArticleUpdate, ArticleWithAuthor, ArticleWriteRepository, ImageUrl, NewArticle,
    PageWindow, PublishedCursor, Tag,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{AuthorSummary, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, types::Json};
use uuid::Uuid;

const ARTICLE_COLUMNS: &str = "a.id, a.title, a.content, a.image_url, a.slug, a.author_id, a.tags, \
     a.is_published, a.is_draft, a.published_at, a.created_at, a.updated_at";

const AUTHOR_COLUMNS: &str =
    "au.username AS author_username, au.display_name AS author_display_name, \
     au.avatar_url AS author_avatar_url";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TagRecord {
    name: String,
    slug: String,
}

impl From<TagRecord> for Tag {
    fn from(record: TagRecord) -> Self {
        Tag::new(record.name, record.slug)
    }
}

impl From<&Tag> for TagRecord {
    fn from(tag: &Tag) -> Self {
        Self {
            name: tag.name.clone(),
            slug: tag.slug.clone(),
        }
    }
}

fn tag_records(tags: &[Tag]) -> Json<Vec<TagRecord>> {
    Json(tags.iter().map(TagRecord::from).collect())
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: Uuid,
    title: String,
    content: String,
    image_url: Option<String>,
    slug: String,
    author_id: Uuid,
    tags: Json<Vec<TagRecord>>,
    is_published: bool,
    is_draft: bool,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        if row.is_draft == row.is_published {
            return Err(DomainError::Persistence(format!(
                "article {} has inconsistent draft flags",
                row.id
            )));
        }

        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            content: ArticleContent::new(row.content)?,
            image_url: row.image_url.and_then(ImageUrl::parse),
            slug: ArticleSlug::new(row.slug)?,
            author_id: UserId::new(row.author_id)?,
            tags: row.tags.0.into_iter().map(Into::into).collect(),
            is_published: row.is_published,
            published_at: row.published_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct AuthorColumns {
    author_username: Option<String>,
    author_display_name: Option<String>,
    author_avatar_url: Option<String>,
}

impl AuthorColumns {
    fn into_summary(self, id: UserId) -> Option<AuthorSummary> {
        let username = self.author_username?;
        Some(AuthorSummary {
            id,
            username,
            display_name: self.author_display_name,
            avatar_url: self.author_avatar_url,
        })
    }
}

#[derive(Debug, FromRow)]
struct ArticleWithAuthorRow {
    #[sqlx(flatten)]
    article: ArticleRow,
    #[sqlx(flatten)]
    author: AuthorColumns,
}

impl TryFrom<ArticleWithAuthorRow> for ArticleWithAuthor {
    type Error = DomainError;

    fn try_from(row: ArticleWithAuthorRow) -> Result<Self, Self::Error> {
        let article = Article::try_from(row.article)?;
        let author = row.author.into_summary(article.author_id);
        Ok(Self { article, author })
    }
}

#[derive(Debug, FromRow)]
struct SummaryRow {
    title: String,
    slug: String,
    published_at: DateTime<Utc>,
    author_id: Uuid,
    #[sqlx(flatten)]
    author: AuthorColumns,
}

impl TryFrom<SummaryRow> for ArticleSummary {
    type Error = DomainError;

    fn try_from(row: SummaryRow) -> Result<Self, Self::Error> {
        let author_id = UserId::new(row.author_id)?;
        Ok(ArticleSummary {
            title: ArticleTitle::new(row.title)?,
            slug: ArticleSlug::new(row.slug)?,
            published_at: row.published_at,
            author_id,
            author: row.author.into_summary(author_id),
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            id,
            title,
            content,
            image_url,
            slug,
            author_id,
            tags,
            is_published,
            published_at,
            created_at,
            updated_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles AS a (id, title, content, image_url, slug, author_id, tags, \
             is_published, is_draft, published_at, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(Uuid::from(id))
        .bind(title.as_str())
        .bind(content.as_str())
        .bind(image_url.as_ref().map(ImageUrl::as_str))
        .bind(slug.as_str())
        .bind(Uuid::from(author_id))
        .bind(tag_records(&tags))
        .bind(is_published)
        .bind(!is_published)
        .bind(published_at)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            content,
            image_url,
            tags,
            publish_state,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE articles AS a SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }

        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(content.into_inner());
        }

        if let Some(image_url) = image_url {
            builder.push(", image_url = ");
            builder.push_bind(image_url.map(ImageUrl::into_inner));
        }

        if let Some(tags) = tags {
            builder.push(", tags = ");
            builder.push_bind(tag_records(&tags));
        }

        if let Some(state) = publish_state {
            builder.push(", is_published = ");
            builder.push_bind(state.is_published);
            builder.push(", is_draft = ");
            builder.push_bind(!state.is_published);
            builder.push(", published_at = ");
            builder.push_bind(state.published_at);
        }

        builder.push(" WHERE a.id = ");
        builder.push_bind(Uuid::from(id));
        builder.push(" RETURNING ");
        builder.push(ARTICLE_COLUMNS);

        let row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn slug_exists(&self, slug: &str) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM articles WHERE slug = $1)")
            .bind(slug)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles a WHERE a.slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_slug_with_author(
        &self,
        slug: &ArticleSlug,
    ) -> DomainResult<Option<ArticleWithAuthor>> {
        let row = sqlx::query_as::<_, ArticleWithAuthorRow>(&format!(
            "SELECT {ARTICLE_COLUMNS}, {AUTHOR_COLUMNS}
             FROM articles a LEFT JOIN authors au ON au.id = a.author_id
             WHERE a.slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(ArticleWithAuthor::try_from).transpose()
    }

    async fn find_by_author(&self, author_id: UserId) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles a
             WHERE a.author_id = $1
             ORDER BY a.published_at DESC NULLS LAST, a.created_at DESC"
        ))
        .bind(Uuid::from(author_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn find_published_page(
        &self,
        window: PageWindow,
    ) -> DomainResult<(Vec<ArticleSummary>, Option<PublishedCursor>)> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT a.title, a.slug, a.published_at, a.author_id, {AUTHOR_COLUMNS}
             FROM articles a LEFT JOIN authors au ON au.id = a.author_id
             WHERE a.is_published = TRUE AND a.published_at IS NOT NULL"
        ));

        if let Some(before) = window.before {
            builder.push(" AND a.published_at < ");
            builder.push_bind(before);
        }

        builder.push(" ORDER BY a.published_at DESC LIMIT ");
        builder.push_bind(i64::from(window.fetch_limit()));

        let rows = builder
            .build_query_as::<SummaryRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let summaries = rows
            .into_iter()
            .map(ArticleSummary::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(window.split_page(summaries, |summary| summary.published_at))
    }
}
