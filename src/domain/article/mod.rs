pub mod cursor;
pub mod entity;
pub mod repository;
pub mod services;
pub mod specifications;
pub mod value_objects;

pub use cursor::{PageWindow, PublishedCursor};
pub use entity::{
    Article, ArticleSummary, ArticleUpdate, ArticleWithAuthor, NewArticle, PublishStateUpdate,
};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{ArticleContent, ArticleId, ArticleSlug, ArticleTitle, ImageUrl, Tag};
