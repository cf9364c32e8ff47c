// tests/support/mocks/article_repos.rs
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tsuzuri_core::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleSlug, ArticleSummary, ArticleUpdate,
    ArticleWithAuthor, ArticleWriteRepository, NewArticle, PageWindow, PublishedCursor,
};
use tsuzuri_core::domain::errors::{DomainError, DomainResult};
use tsuzuri_core::domain::user::{AuthorSummary, UserId};

/* -------------------------------- InMemoryArticleStore -------------------------------- */

/// メモリ上の記事ストア。slug の一意制約を Postgres の一意インデックスと同様に強制する。
#[derive(Default)]
pub struct InMemoryArticleStore {
    articles: Mutex<Vec<Article>>,
    authors: Mutex<HashMap<UserId, AuthorSummary>>,
}

impl InMemoryArticleStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn add_author(&self, id: UserId, username: &str) {
        self.authors.lock().unwrap().insert(
            id,
            AuthorSummary {
                id,
                username: username.to_string(),
                display_name: Some(username.to_uppercase()),
                avatar_url: None,
            },
        );
    }

    pub fn get(&self, slug: &str) -> Option<Article> {
        self.articles
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.slug.as_str() == slug)
            .cloned()
    }

    pub fn slugs(&self) -> Vec<String> {
        self.articles
            .lock()
            .unwrap()
            .iter()
            .map(|a| a.slug.as_str().to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.articles.lock().unwrap().len()
    }

    fn author_of(&self, id: UserId) -> Option<AuthorSummary> {
        self.authors.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleStore {
    async fn insert(&self, new: NewArticle) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        if articles.iter().any(|a| a.slug == new.slug) {
            return Err(DomainError::Conflict(format!(
                "slug '{}' already exists",
                new.slug
            )));
        }

        let article = Article {
            id: new.id,
            title: new.title,
            content: new.content,
            image_url: new.image_url,
            slug: new.slug,
            author_id: new.author_id,
            tags: new.tags,
            is_published: new.is_published,
            published_at: new.published_at,
            created_at: new.created_at,
            updated_at: new.updated_at,
        };
        articles.push(article.clone());
        Ok(article)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        let article = articles
            .iter_mut()
            .find(|a| a.id == update.id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        update.apply_to(article);
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut articles = self.articles.lock().unwrap();
        let before = articles.len();
        articles.retain(|a| a.id != id);
        if articles.len() == before {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleStore {
    async fn slug_exists(&self, slug: &str) -> DomainResult<bool> {
        Ok(self
            .articles
            .lock()
            .unwrap()
            .iter()
            .any(|a| a.slug.as_str() == slug))
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        Ok(self.get(slug.as_str()))
    }

    async fn find_by_slug_with_author(
        &self,
        slug: &ArticleSlug,
    ) -> DomainResult<Option<ArticleWithAuthor>> {
        Ok(self.get(slug.as_str()).map(|article| {
            let author = self.author_of(article.author_id);
            ArticleWithAuthor { article, author }
        }))
    }

    async fn find_by_author(&self, author_id: UserId) -> DomainResult<Vec<Article>> {
        let mut mine: Vec<Article> = self
            .articles
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.author_id == author_id)
            .cloned()
            .collect();
        mine.sort_by(|a, b| {
            b.published_at
                .cmp(&a.published_at)
                .then(b.created_at.cmp(&a.created_at))
        });
        Ok(mine)
    }

    async fn find_published_page(
        &self,
        window: PageWindow,
    ) -> DomainResult<(Vec<ArticleSummary>, Option<PublishedCursor>)> {
        let mut published: Vec<(Article, chrono::DateTime<chrono::Utc>)> = self
            .articles
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.is_published)
            .filter_map(|a| a.published_at.map(|at| (a.clone(), at)))
            .filter(|(_, at)| window.admits(*at))
            .collect();
        published.sort_by(|(_, a), (_, b)| b.cmp(a));
        published.truncate(window.fetch_limit() as usize);

        let summaries = published
            .into_iter()
            .map(|(article, published_at)| ArticleSummary {
                author: self.author_of(article.author_id),
                title: article.title,
                slug: article.slug,
                published_at,
                author_id: article.author_id,
            })
            .collect();

        Ok(window.split_page(summaries, |s| s.published_at))
    }
}

/* -------------------------------- RacingReadRepository -------------------------------- */

/// 並行作成を再現する読み取りリポジトリ。
/// 最初の `lies` 回の `slug_exists` は常に「未使用」と答え、
/// 解決済み slug が挿入時に既に使われている状況を作る。
pub struct RacingReadRepository {
    inner: Arc<InMemoryArticleStore>,
    lies: AtomicUsize,
}

impl RacingReadRepository {
    pub fn new(inner: Arc<InMemoryArticleStore>, lies: usize) -> Self {
        Self {
            inner,
            lies: AtomicUsize::new(lies),
        }
    }
}

#[async_trait]
impl ArticleReadRepository for RacingReadRepository {
    async fn slug_exists(&self, slug: &str) -> DomainResult<bool> {
        let lied = self
            .lies
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if lied {
            return Ok(false);
        }
        self.inner.slug_exists(slug).await
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        self.inner.find_by_slug(slug).await
    }

    async fn find_by_slug_with_author(
        &self,
        slug: &ArticleSlug,
    ) -> DomainResult<Option<ArticleWithAuthor>> {
        self.inner.find_by_slug_with_author(slug).await
    }

    async fn find_by_author(&self, author_id: UserId) -> DomainResult<Vec<Article>> {
        self.inner.find_by_author(author_id).await
    }

    async fn find_published_page(
        &self,
        window: PageWindow,
    ) -> DomainResult<(Vec<ArticleSummary>, Option<PublishedCursor>)> {
        self.inner.find_published_page(window).await
    }
}

/* -------------------------------- FailingReadRepository -------------------------------- */

/// すべての読み取りが永続化エラーになるリポジトリ
pub struct FailingReadRepository;

#[async_trait]
impl ArticleReadRepository for FailingReadRepository {
    async fn slug_exists(&self, _slug: &str) -> DomainResult<bool> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn find_by_slug(&self, _slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn find_by_slug_with_author(
        &self,
        _slug: &ArticleSlug,
    ) -> DomainResult<Option<ArticleWithAuthor>> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn find_by_author(&self, _author_id: UserId) -> DomainResult<Vec<Article>> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn find_published_page(
        &self,
        _window: PageWindow,
    ) -> DomainResult<(Vec<ArticleSummary>, Option<PublishedCursor>)> {
        Err(DomainError::Persistence("connection refused".into()))
    }
}
