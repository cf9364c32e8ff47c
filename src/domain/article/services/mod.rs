// src/domain/article/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::article::repository::ArticleReadRepository;
use crate::domain::article::value_objects::{ArticleSlug, ArticleTitle, Tag};
use crate::domain::errors::{DomainError, DomainResult};

/// Domain service responsible for producing unique slugs for articles.
pub struct ArticleSlugService {
    read_repo: Arc<dyn ArticleReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl ArticleSlugService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    /// Slug candidate for a title, rejected when nothing URL-safe remains.
    pub fn candidate_for(&self, title: &ArticleTitle) -> DomainResult<String> {
        let candidate = self.generator.slugify(title.as_str());
        if candidate.is_empty() {
            return Err(DomainError::Validation(
                "title must contain at least one letter or digit".into(),
            ));
        }
        Ok(candidate)
    }

    /// First of `candidate`, `candidate-1`, `candidate-2`, ... that no stored
    /// article currently uses. Not atomic: the insert must still be guarded
    /// by the store's unique index.
    pub async fn resolve_unique(&self, candidate: &str) -> DomainResult<String> {
        let mut slug = candidate.to_string();
        let mut counter = 1u64;

        while self.read_repo.slug_exists(&slug).await? {
            slug = format!("{candidate}-{counter}");
            counter += 1;
        }

        Ok(slug)
    }

    pub async fn generate_unique_slug(&self, title: &ArticleTitle) -> DomainResult<ArticleSlug> {
        let candidate = self.candidate_for(title)?;
        let slug = self.resolve_unique(&candidate).await?;
        ArticleSlug::new(slug)
    }

    pub fn tag(&self, name: impl Into<String>) -> Tag {
        let name = name.into();
        let slug = self.generator.slugify(&name);
        Tag::new(name, slug)
    }
}
