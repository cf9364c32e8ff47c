// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{
            ArticleContent, ArticleId, ArticleTitle, ImageUrl, NewArticle, Tag,
            entity::first_published_at,
        },
        errors::DomainError,
    },
};

/// Resolve-and-insert rounds before a slug collision is reported as a failure.
pub const MAX_SLUG_ATTEMPTS: usize = 5;

pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub tags: Vec<String>,
    pub is_published: bool,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    content: Option<String>,
    image_url: Option<String>,
    tags: Vec<String>,
    is_published: bool,
}

impl Default for CreateArticleCommandBuilder {
    fn default() -> Self {
        Self {
            title: None,
            content: None,
            image_url: None,
            tags: Vec::new(),
            is_published: true,
        }
    }
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn tag(mut self, name: impl Into<String>) -> Self {
        self.tags.push(name.into());
        self
    }

    pub fn published(mut self, is_published: bool) -> Self {
        self.is_published = is_published;
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            content: self.content.ok_or("content is required")?,
            image_url: self.image_url,
            tags: self.tags,
            is_published: self.is_published,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;
        let image_url = command.image_url.and_then(ImageUrl::parse);
        let tags: Vec<Tag> = command
            .tags
            .into_iter()
            .map(|name| self.slug_service.tag(name))
            .collect();

        for attempt in 1..=MAX_SLUG_ATTEMPTS {
            let slug = self.slug_service.generate_unique_slug(&title).await?;
            let now = self.clock.now();

            let new_article = NewArticle {
                id: ArticleId::generate(),
                title: title.clone(),
                content: content.clone(),
                image_url: image_url.clone(),
                slug: slug.clone(),
                author_id: actor.id,
                tags: tags.clone(),
                is_published: command.is_published,
                published_at: first_published_at(None, command.is_published, now),
                created_at: now,
                updated_at: now,
            };

            match self.write_repo.insert(new_article).await {
                Ok(created) => {
                    tracing::info!(
                        article_id = %created.id,
                        author_id = %created.author_id,
                        slug = %created.slug,
                        "article created"
                    );
                    return Ok(created.into());
                }
                Err(DomainError::Conflict(reason)) => {
                    tracing::warn!(
                        slug = %slug,
                        attempt,
                        %reason,
                        "slug claimed concurrently, resolving again"
                    );
                }
                Err(other) => return Err(other.into()),
            }
        }

        Err(ApplicationError::infrastructure(format!(
            "unable to allocate a unique slug after {MAX_SLUG_ATTEMPTS} attempts"
        )))
    }
}
