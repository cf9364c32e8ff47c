// src/application/commands/articles/access.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{
        Article, ArticleSlug,
        specifications::{Access, authorize},
    },
};

impl ArticleCommandService {
    /// Look up the target of an update or delete and run the ownership
    /// guard against the acting identity.
    pub(super) async fn load_owned_article(
        &self,
        actor: Option<&AuthenticatedUser>,
        slug: String,
        action: &str,
    ) -> ApplicationResult<Article> {
        let slug = ArticleSlug::new(slug)?;
        let article = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        match (authorize(&article, actor.map(|a| a.id)), actor) {
            (Access::Allow, _) => Ok(article),
            (Access::Deny, None) => Err(ApplicationError::validation(format!(
                "an author identity is required to {action} an article"
            ))),
            (Access::Deny, Some(_)) => Err(ApplicationError::forbidden(format!(
                "only the author may {action} this article"
            ))),
        }
    }
}
