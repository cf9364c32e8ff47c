// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleContent, ArticleId, ArticleSlug, ArticleTitle, ImageUrl, Tag,
};
use crate::domain::user::{AuthorSummary, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub image_url: Option<ImageUrl>,
    pub slug: ArticleSlug,
    pub author_id: UserId,
    pub tags: Vec<Tag>,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Always the complement of `is_published`.
    pub fn is_draft(&self) -> bool {
        !self.is_published
    }
}

/// `published_at` after applying a publish flag at `now`.
pub fn first_published_at(
    existing: Option<DateTime<Utc>>,
    is_published: bool,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    match existing {
        Some(at) => Some(at),
        None if is_published => Some(now),
        None => None,
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub image_url: Option<ImageUrl>,
    pub slug: ArticleSlug,
    pub author_id: UserId,
    pub tags: Vec<Tag>,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PublishStateUpdate {
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
}

/// Partial update. `None` leaves a field untouched; `image_url: Some(None)`
/// clears the image.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub content: Option<ArticleContent>,
    pub image_url: Option<Option<ImageUrl>>,
    pub tags: Option<Vec<Tag>>,
    pub publish_state: Option<PublishStateUpdate>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            content: None,
            image_url: None,
            tags: None,
            publish_state: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_content(mut self, content: ArticleContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_image_url(mut self, image_url: Option<ImageUrl>) -> Self {
        self.image_url = Some(image_url);
        self
    }

    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn with_publish_state(
        mut self,
        is_published: bool,
        published_at: Option<DateTime<Utc>>,
    ) -> Self {
        self.publish_state = Some(PublishStateUpdate {
            is_published,
            published_at,
        });
        self
    }

    /// Apply this update to an in-memory copy. Store adapters that cannot
    /// express the update natively use this to stay consistent with SQL ones.
    pub fn apply_to(&self, article: &mut Article) {
        if let Some(title) = &self.title {
            article.title = title.clone();
        }
        if let Some(content) = &self.content {
            article.content = content.clone();
        }
        if let Some(image_url) = &self.image_url {
            article.image_url = image_url.clone();
        }
        if let Some(tags) = &self.tags {
            article.tags = tags.clone();
        }
        if let Some(state) = &self.publish_state {
            article.is_published = state.is_published;
            article.published_at = state.published_at;
        }
        article.updated_at = self.updated_at;
    }
}

/// Full article plus the joined author profile, if the author is known.
#[derive(Debug, Clone)]
pub struct ArticleWithAuthor {
    pub article: Article,
    pub author: Option<AuthorSummary>,
}

/// Feed projection. Content is intentionally absent.
#[derive(Debug, Clone)]
pub struct ArticleSummary {
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub published_at: DateTime<Utc>,
    pub author_id: UserId,
    pub author: Option<AuthorSummary>,
}
