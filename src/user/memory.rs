use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use super::model::*;
use super::store::UserStore;

/// Holds the single current user profile in memory.
pub struct InMemoryUserStore {
    user: Arc<RwLock<Option<User>>>,
}

impl InMemoryUserStore {
    pub fn new(user: Option<User>) -> Self {
        Self {
            user: Arc::new(RwLock::new(user)),
        }
    }

    async fn modify<F>(&self, user_id: &str, f: F) -> UserResult<User>
    where
        F: FnOnce(&mut User) + Send,
    {
        let mut guard = self.user.write().await;
        match guard.as_mut() {
            Some(user) if user.id == user_id => {
                f(user);
                Ok(user.clone())
            }
            _ => Err(UserError::NotFound(user_id.to_string())),
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new(Some(User::default()))
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn get_user(&self) -> Option<User> {
        self.user.read().await.clone()
    }

    async fn update_preferences(&self, user_id: &str, update: PreferencesUpdate) -> UserResult<User> {
        let user = self
            .modify(user_id, |user| user.preferences.merge(update))
            .await?;
        info!(user = user_id, "Updated preferences");
        Ok(user)
    }

    async fn complete_onboarding(&self, user_id: &str, update: PreferencesUpdate) -> UserResult<User> {
        let user = self
            .modify(user_id, |user| {
                user.preferences.merge(update);
                user.onboarding_complete = true;
            })
            .await?;
        info!(user = user_id, "Completed onboarding");
        Ok(user)
    }

    async fn saved_locations(&self, user_id: &str) -> UserResult<Vec<String>> {
        let guard = self.user.read().await;
        match guard.as_ref() {
            Some(user) if user.id == user_id => Ok(user.preferences.saved_locations.clone()),
            _ => Err(UserError::NotFound(user_id.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_default_user() {
        let store = InMemoryUserStore::default();
        let user = store.get_user().await.unwrap();
        assert_eq!(user.id, "user-123");
        assert!(!user.onboarding_complete);

        assert!(InMemoryUserStore::new(None).get_user().await.is_none());
    }

    #[tokio::test]
    async fn test_update_preferences_persists() {
        let store = InMemoryUserStore::default();
        let update = PreferencesUpdate {
            vibes: Some(vec!["Chill".to_string()]),
            ..Default::default()
        };
        let user = store.update_preferences("user-123", update).await.unwrap();
        assert_eq!(user.preferences.vibes, vec!["Chill"]);
        assert_eq!(user.preferences.location, "New York, NY");
        assert!(!user.onboarding_complete);

        let again = store.get_user().await.unwrap();
        assert_eq!(again, user);
    }

    #[tokio::test]
    async fn test_complete_onboarding() {
        let store = InMemoryUserStore::default();
        let update = PreferencesUpdate {
            location: Some("Austin, TX".to_string()),
            ..Default::default()
        };
        let user = store.complete_onboarding("user-123", update).await.unwrap();
        assert!(user.onboarding_complete);
        assert_eq!(user.preferences.location, "Austin, TX");
        assert_eq!(user.preferences.vibes.len(), 3);
    }

    #[tokio::test]
    async fn test_saved_locations() {
        let store = InMemoryUserStore::default();
        assert!(store.saved_locations("user-123").await.unwrap().is_empty());

        let update = PreferencesUpdate {
            saved_locations: Some(vec!["1".to_string(), "5".to_string()]),
            ..Default::default()
        };
        store.update_preferences("user-123", update).await.unwrap();
        assert_eq!(
            store.saved_locations("user-123").await.unwrap(),
            vec!["1", "5"]
        );
    }

    #[tokio::test]
    async fn test_unknown_user() {
        let store = InMemoryUserStore::default();
        assert!(matches!(
            store
                .update_preferences("someone-else", PreferencesUpdate::default())
                .await,
            Err(UserError::NotFound(_))
        ));
        assert!(store.saved_locations("someone-else").await.is_err());

        let empty = InMemoryUserStore::new(None);
        assert!(empty
            .complete_onboarding("user-123", PreferencesUpdate::default())
            .await
            .is_err());
    }
}
