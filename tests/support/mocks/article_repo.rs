// tests/support/mocks/article_repo.rs
use article_api::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use article_api::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Serves both repository traits from one map, like a single table would.
#[derive(Default)]
pub struct InMemoryArticleRepo {
    inner: Mutex<State>,
}

#[derive(Default)]
struct State {
    next_id: i64,
    rows: BTreeMap<i64, Article>,
}

impl InMemoryArticleRepo {
    pub fn with_articles(articles: impl IntoIterator<Item = Article>) -> Self {
        let repo = Self::default();
        {
            let mut state = repo.inner.lock().unwrap();
            for article in articles {
                state.next_id = state.next_id.max(article.id.0);
                state.rows.insert(article.id.0, article);
            }
        }
        repo
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }

    pub fn get(&self, id: i64) -> Option<Article> {
        self.inner.lock().unwrap().rows.get(&id).cloned()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut state = self.inner.lock().unwrap();
        state.next_id += 1;
        let article = article.into_article(ArticleId::new(state.next_id)?);
        state.rows.insert(article.id.0, article.clone());
        Ok(article)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut state = self.inner.lock().unwrap();
        let article = state
            .rows
            .get_mut(&update.id.0)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        article.apply(update);
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut state = self.inner.lock().unwrap();
        state
            .rows
            .remove(&id.0)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.inner.lock().unwrap().rows.get(&id.0).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        Ok(self.inner.lock().unwrap().rows.values().cloned().collect())
    }
}
