use std::collections::BTreeMap;

use tokio::sync::RwLock;
use tracing::debug;

use crate::article::{
    error::ArticleError,
    query::{QueryResult, TagDateQuery},
    types::Article,
};

/// In-memory article collection keyed by numeric id.
///
/// Lives for the lifetime of the process. All access goes through one
/// `RwLock`; a query holds the read lock for the whole scan.
#[derive(Debug, Default)]
pub struct ArticleStore {
    articles: RwLock<BTreeMap<i64, Article>>,
}

impl ArticleStore {
    pub fn new() -> Self {
        Self {
            articles: RwLock::new(BTreeMap::new()),
        }
    }

    /// Insert `article`, failing if its numeric id is already taken.
    pub async fn insert(&self, article: Article) -> Result<i64, ArticleError> {
        let id = article.key()?;

        let mut articles = self.articles.write().await;
        if articles.contains_key(&id) {
            return Err(ArticleError::DuplicateIdentifier(id));
        }

        articles.insert(id, article);
        debug!("Stored article {} ({} total)", id, articles.len());

        Ok(id)
    }

    pub async fn get(&self, id: i64) -> Option<Article> {
        self.articles.read().await.get(&id).cloned()
    }

    pub async fn query(&self, query: &TagDateQuery) -> QueryResult {
        let articles = self.articles.read().await;
        query.run(articles.iter())
    }

    pub async fn len(&self) -> usize {
        self.articles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.articles.read().await.is_empty()
    }
}
