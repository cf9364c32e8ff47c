use crate::domain::article::cursor::{PageWindow, PublishedCursor};
use crate::domain::article::entity::{
    Article, ArticleSummary, ArticleUpdate, ArticleWithAuthor, NewArticle,
};
use crate::domain::article::value_objects::{ArticleId, ArticleSlug};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Fails with `DomainError::Conflict` when the slug is already taken.
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn slug_exists(&self, slug: &str) -> DomainResult<bool>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    async fn find_by_slug_with_author(
        &self,
        slug: &ArticleSlug,
    ) -> DomainResult<Option<ArticleWithAuthor>>;
    async fn find_by_author(&self, author_id: UserId) -> DomainResult<Vec<Article>>;
    /// Fetches `window.fetch_limit()` published rows ordered by
    /// `published_at` descending and splits them with `window.split_page`.
    async fn find_published_page(
        &self,
        window: PageWindow,
    ) -> DomainResult<(Vec<ArticleSummary>, Option<PublishedCursor>)>;
}
