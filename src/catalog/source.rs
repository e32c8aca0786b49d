use std::sync::Arc;

use async_trait::async_trait;

use super::record::Recommendation;

/// Where the query engine reads recommendations from.
///
/// Implementations hand out the whole collection in its seeded order; the
/// engine only ever reads from it.
#[async_trait]
pub trait RecommendationSource: Send + Sync {
    async fn all(&self) -> Result<Arc<[Recommendation]>, SourceError>;
    async fn get(&self, id: &str) -> Result<Option<Recommendation>, SourceError>;
}

/// A fixed, in-memory collection.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    records: Arc<[Recommendation]>,
}

impl InMemorySource {
    pub fn new(records: Vec<Recommendation>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl RecommendationSource for InMemorySource {
    async fn all(&self) -> Result<Arc<[Recommendation]>, SourceError> {
        Ok(Arc::clone(&self.records))
    }

    async fn get(&self, id: &str) -> Result<Option<Recommendation>, SourceError> {
        Ok(self.records.iter().find(|r| r.id == id).cloned())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Source unavailable: {0}")]
    Unavailable(String),
}
