use super::ArticleQueryService;
use crate::application::{
    dto::{ArticleDto, AuthenticatedUser},
    error::{ApplicationError, ApplicationResult},
};

impl ArticleQueryService {
    /// Every article written by the acting identity, drafts included,
    /// newest-published first.
    pub async fn list_my_articles(
        &self,
        actor: Option<&AuthenticatedUser>,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let actor = actor
            .ok_or_else(|| ApplicationError::unauthorized("authentication required"))?;

        let articles = self.read_repo.find_by_author(actor.id).await?;
        if articles.is_empty() && self.policy.empty_author_listing_is_not_found {
            return Err(ApplicationError::not_found("no articles found for this author"));
        }

        Ok(articles.into_iter().map(Into::into).collect())
    }
}
