use std::sync::Arc;

use crate::catalog::Recommendation;
use crate::config::{millis, LatencyConfig};
use crate::query::{FilterSpec, Page, PageRequest, QueryEngine, QueryError};
use crate::user::{PreferencesUpdate, User, UserResult, UserStore};

/// The asynchronous front door to the query engine and user store.
///
/// Every call first waits out its configured latency, then runs against
/// in-memory data. Dropping the future before it resolves abandons the call
/// with nothing left half-done.
#[derive(Clone)]
pub struct VibeApi {
    engine: QueryEngine,
    users: Arc<dyn UserStore>,
    latency: LatencyConfig,
}

impl VibeApi {
    pub fn new(engine: QueryEngine, users: Arc<dyn UserStore>, latency: LatencyConfig) -> Self {
        Self {
            engine,
            users,
            latency,
        }
    }

    pub fn engine(&self) -> &QueryEngine {
        &self.engine
    }

    async fn delay(ms: u64) {
        if ms > 0 {
            tokio::time::sleep(millis(ms)).await;
        }
    }

    pub async fn get_recommendations(
        &self,
        filter: &FilterSpec,
        request: PageRequest,
    ) -> Result<Page<Recommendation>, QueryError> {
        Self::delay(self.latency.query).await;
        self.engine.query(filter, request).await
    }

    pub async fn get_recommendation(&self, id: &str) -> Result<Recommendation, QueryError> {
        Self::delay(self.latency.get).await;
        self.engine.get_by_id(id).await
    }

    pub async fn save_recommendation(
        &self,
        user_id: &str,
        recommendation_id: &str,
    ) -> Result<(), QueryError> {
        Self::delay(self.latency.save).await;
        self.engine.save(user_id, recommendation_id).await
    }

    pub async fn get_current_user(&self) -> Option<User> {
        Self::delay(self.latency.get_user).await;
        self.users.get_user().await
    }

    pub async fn update_preferences(
        &self,
        user_id: &str,
        update: PreferencesUpdate,
    ) -> UserResult<User> {
        Self::delay(self.latency.update_preferences).await;
        self.users.update_preferences(user_id, update).await
    }

    pub async fn complete_onboarding(
        &self,
        user_id: &str,
        update: PreferencesUpdate,
    ) -> UserResult<User> {
        Self::delay(self.latency.complete_onboarding).await;
        self.users.complete_onboarding(user_id, update).await
    }

    pub async fn get_saved_locations(&self, user_id: &str) -> UserResult<Vec<String>> {
        Self::delay(self.latency.saved_locations).await;
        self.users.saved_locations(user_id).await
    }
}
