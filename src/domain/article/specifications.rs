use crate::domain::article::entity::Article;
use crate::domain::user::UserId;

/// Outcome of an ownership check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    Deny,
}

pub trait ArticleSpecification {
    fn is_satisfied(&self) -> bool;
}

/// The acting identity may update or delete the article only if it authored
/// it. An absent identity never satisfies the specification.
pub struct CanMutateArticleSpec<'a> {
    article: &'a Article,
    actor: Option<UserId>,
}

impl<'a> CanMutateArticleSpec<'a> {
    pub fn new(article: &'a Article, actor: Option<UserId>) -> Self {
        Self { article, actor }
    }
}

impl ArticleSpecification for CanMutateArticleSpec<'_> {
    fn is_satisfied(&self) -> bool {
        self.actor == Some(self.article.author_id)
    }
}

pub fn authorize(article: &Article, actor: Option<UserId>) -> Access {
    if CanMutateArticleSpec::new(article, actor).is_satisfied() {
        Access::Allow
    } else {
        Access::Deny
    }
}
