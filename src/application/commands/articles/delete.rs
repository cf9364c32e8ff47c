// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::application::{dto::AuthenticatedUser, error::ApplicationResult};

pub struct DeleteArticleCommand {
    pub slug: String,
}

impl ArticleCommandService {
    pub async fn delete_article(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        let article = self
            .load_owned_article(actor, command.slug, "delete")
            .await?;

        self.write_repo.delete(article.id).await?;
        tracing::info!(article_id = %article.id, slug = %article.slug, "article deleted");
        Ok(())
    }
}
