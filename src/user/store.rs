use async_trait::async_trait;

use super::model::*;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn get_user(&self) -> Option<User>;
    async fn update_preferences(&self, user_id: &str, update: PreferencesUpdate) -> UserResult<User>;
    async fn complete_onboarding(&self, user_id: &str, update: PreferencesUpdate) -> UserResult<User>;
    async fn saved_locations(&self, user_id: &str) -> UserResult<Vec<String>>;
}
