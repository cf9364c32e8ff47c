// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::articles::ArticleCommandService,
        dto::AuthenticatedUser,
        ports::{security::SessionVerifier, time::Clock, util::SlugGenerator},
        queries::articles::{ArticleQueryService, ListingPolicy},
        ApplicationResult,
    },
    domain::article::{ArticleReadRepository, ArticleWriteRepository, services::ArticleSlugService},
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    session_verifier: Arc<dyn SessionVerifier>,
}

impl ApplicationServices {
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        session_verifier: Arc<dyn SessionVerifier>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        listing_policy: ListingPolicy,
    ) -> Self {
        let slug_service = Arc::new(ArticleSlugService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&slugger),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            listing_policy,
        ));

        Self {
            article_commands,
            article_queries,
            session_verifier,
        }
    }

    /// Resolve a raw session token into the acting identity.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.session_verifier.authenticate(token).await
    }
}
