use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleSummaryDto, CursorPage},
        error::ApplicationResult,
    },
    domain::article::{PageWindow, PublishedCursor},
};

pub struct ListPublishedQuery {
    /// Raw `limit` parameter; parsed leniently.
    pub limit: Option<String>,
    pub cursor: Option<String>,
}

impl ArticleQueryService {
    pub async fn list_published(
        &self,
        query: ListPublishedQuery,
    ) -> ApplicationResult<CursorPage<ArticleSummaryDto>> {
        let limit =
            PageWindow::limit_from_param(query.limit.as_deref(), self.policy.max_page_size);
        let cursor = query
            .cursor
            .as_deref()
            .filter(|token| !token.trim().is_empty())
            .map(PublishedCursor::decode)
            .transpose()?;

        let (records, next_cursor) = self
            .read_repo
            .find_published_page(PageWindow::new(cursor, limit))
            .await?;

        let items = records.into_iter().map(Into::into).collect();
        Ok(CursorPage::new(
            items,
            next_cursor.map(|cursor| cursor.encode()),
        ))
    }
}
