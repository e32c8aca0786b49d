use std::sync::Arc;

use tracing::{debug, error, info};

use super::category::CategoryTable;
use super::distance::{DistancePolicy, ThrottlePolicy};
use super::filter::{apply_category_filter, apply_vibe_filter, FilterSpec};
use super::pagination::{apply_pagination, Page, PageRequest};
use super::sort::rank_by_trend;
use crate::catalog::{Recommendation, RecommendationSource};

/// Answers recommendation queries against a read-only source.
#[derive(Clone)]
pub struct QueryEngine {
    source: Arc<dyn RecommendationSource>,
    categories: Arc<CategoryTable>,
    distance: Arc<dyn DistancePolicy>,
}

impl QueryEngine {
    pub fn new(
        source: Arc<dyn RecommendationSource>,
        categories: CategoryTable,
        distance: Arc<dyn DistancePolicy>,
    ) -> Self {
        Self {
            source,
            categories: Arc::new(categories),
            distance,
        }
    }

    /// Built-in category table and the default distance throttle.
    pub fn with_defaults(source: Arc<dyn RecommendationSource>) -> Self {
        Self::new(
            source,
            CategoryTable::default(),
            Arc::new(ThrottlePolicy::default()),
        )
    }

    pub fn categories(&self) -> &CategoryTable {
        &self.categories
    }

    pub async fn query(
        &self,
        filter: &FilterSpec,
        request: PageRequest,
    ) -> Result<Page<Recommendation>, QueryError> {
        let records = self.source.all().await.map_err(|e| {
            error!("Failed to read recommendations: {}", e);
            QueryError::Query
        })?;

        let page = run_query(
            &records,
            filter,
            &self.categories,
            self.distance.as_ref(),
            request,
        );
        debug!(
            total = page.total,
            returned = page.items.len(),
            page = page.page,
            "Recommendation query"
        );
        Ok(page)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Recommendation, QueryError> {
        match self.source.get(id).await {
            Ok(Some(rec)) => Ok(rec),
            Ok(None) => Err(QueryError::NotFound(id.to_string())),
            Err(e) => {
                error!("Failed to read recommendation {}: {}", id, e);
                Err(QueryError::Query)
            }
        }
    }

    /// Acknowledge that a user saved a recommendation. Nothing is stored.
    pub async fn save(&self, user_id: &str, recommendation_id: &str) -> Result<(), QueryError> {
        if user_id.trim().is_empty() || recommendation_id.trim().is_empty() {
            return Err(QueryError::Save);
        }
        info!(
            user = user_id,
            recommendation = recommendation_id,
            "Saving recommendation"
        );
        Ok(())
    }
}

/// Filter, rank, throttle and paginate `records`. Pure: `records` is only read.
pub fn run_query(
    records: &[Recommendation],
    filter: &FilterSpec,
    categories: &CategoryTable,
    distance: &dyn DistancePolicy,
    request: PageRequest,
) -> Page<Recommendation> {
    let items: Vec<&Recommendation> = records.iter().collect();
    let items = apply_vibe_filter(items, &filter.vibes);
    let items = apply_category_filter(items, filter.category.as_deref(), categories);
    let items = rank_by_trend(items);
    let items = distance.apply(filter.max_distance, items);

    let page = apply_pagination(items, request);
    Page {
        items: page.items.into_iter().cloned().collect(),
        total: page.total,
        page: page.page,
        limit: page.limit,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("Recommendation not found: {0}")]
    NotFound(String),
    #[error("Failed to fetch recommendations")]
    Query,
    #[error("Failed to save recommendation")]
    Save,
}
