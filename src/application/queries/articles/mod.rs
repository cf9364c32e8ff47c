mod get_by_slug;
mod list;
mod mine;
mod service;

pub use get_by_slug::GetArticleBySlugQuery;
pub use list::ListPublishedQuery;
pub use service::{ArticleQueryService, ListingPolicy};
