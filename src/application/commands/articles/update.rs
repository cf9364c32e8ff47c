use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::{
        ArticleContent, ArticleTitle, ArticleUpdate, ImageUrl, entity::first_published_at,
    },
};

/// Partial update addressed by slug.
///
/// Every field is optional. Blank `title`, `content` and `image_url` strings
/// count as "not sent" and never overwrite stored values. `image_url:
/// Some(None)` clears the image; `tags: Some(vec![])` clears the tags.
#[derive(Debug, Default)]
pub struct UpdateArticleCommand {
    pub slug: String,
    pub title: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<Option<String>>,
    pub tags: Option<Vec<String>>,
    pub is_published: Option<bool>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let UpdateArticleCommand {
            slug,
            title,
            content,
            image_url,
            tags,
            is_published,
        } = command;

        let article = self.load_owned_article(actor, slug, "update").await?;
        let now = self.clock.now();
        let mut update = ArticleUpdate::new(article.id, now);

        if let Some(title) = non_blank(title) {
            update = update.with_title(ArticleTitle::new(title)?);
        }

        if let Some(content) = non_blank(content) {
            update = update.with_content(ArticleContent::new(content)?);
        }

        match image_url {
            Some(Some(raw)) => {
                if let Some(url) = ImageUrl::parse(raw) {
                    update = update.with_image_url(Some(url));
                }
            }
            Some(None) => update = update.with_image_url(None),
            None => {}
        }

        if let Some(names) = tags {
            let tags = names
                .into_iter()
                .map(|name| self.slug_service.tag(name))
                .collect();
            update = update.with_tags(tags);
        }

        if let Some(flag) = is_published {
            let published_at = first_published_at(article.published_at, flag, now);
            update = update.with_publish_state(flag, published_at);
        }

        let updated = self.write_repo.update(update).await?;
        tracing::info!(article_id = %updated.id, slug = %updated.slug, "article updated");
        Ok(updated.into())
    }
}
