use std::sync::Arc;

use crate::domain::article::ArticleReadRepository;

/// Listing knobs resolved from configuration.
#[derive(Debug, Clone, Copy)]
pub struct ListingPolicy {
    pub max_page_size: u32,
    /// Answer an empty "my articles" listing with `NotFound` instead of `[]`.
    pub empty_author_listing_is_not_found: bool,
}

impl Default for ListingPolicy {
    fn default() -> Self {
        Self {
            max_page_size: 50,
            empty_author_listing_is_not_found: true,
        }
    }
}

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) policy: ListingPolicy,
}

impl ArticleQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>, policy: ListingPolicy) -> Self {
        Self { read_repo, policy }
    }
}
