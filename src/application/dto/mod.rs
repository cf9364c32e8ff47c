pub mod articles;
pub mod auth;
pub mod pagination;
pub mod serde_time;

pub use articles::{ArticleDto, ArticleSummaryDto, AuthorDto, TagDto};
pub use auth::AuthenticatedUser;
pub use pagination::CursorPage;
