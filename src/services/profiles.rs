use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::{error::AppResult, models::TasteProfile};

/// Profile lookup collaborator.
///
/// The comparison engine never fetches listening data itself; whatever layer
/// owns user data implements this trait and hands resolved profiles to the
/// engine. The trait is object-safe so handlers can hold `Arc<dyn
/// ProfileProvider>` and tests can swap in a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ProfileProvider: Send + Sync {
    /// Resolves a user id to their taste profile, if one is known
    async fn profile(&self, user_id: &str) -> AppResult<Option<TasteProfile>>;

    /// Stores or replaces the profile for `profile.user_id`
    async fn store_profile(&self, profile: TasteProfile) -> AppResult<()>;
}

/// In-memory profile store keyed by user id
#[derive(Default)]
pub struct InMemoryProfileStore {
    profiles: RwLock<HashMap<String, TasteProfile>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ProfileProvider for InMemoryProfileStore {
    async fn profile(&self, user_id: &str) -> AppResult<Option<TasteProfile>> {
        let profiles = self.profiles.read().await;
        Ok(profiles.get(user_id).cloned())
    }

    async fn store_profile(&self, profile: TasteProfile) -> AppResult<()> {
        let mut profiles = self.profiles.write().await;
        profiles.insert(profile.user_id.clone(), profile);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Artist;

    #[tokio::test]
    async fn test_store_and_lookup() {
        let store = InMemoryProfileStore::new();
        let profile = TasteProfile::from_artists(
            "user-1",
            vec![Artist::new("a1", "Nirvana", vec!["grunge".into()], 0)],
        );

        store.store_profile(profile.clone()).await.unwrap();
        let found = store.profile("user-1").await.unwrap();
        assert_eq!(found, Some(profile));
    }

    #[tokio::test]
    async fn test_missing_user_resolves_to_none() {
        let store = InMemoryProfileStore::new();
        assert_eq!(store.profile("nobody").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_store_replaces_existing_profile() {
        let store = InMemoryProfileStore::new();
        store
            .store_profile(TasteProfile::empty("user-1"))
            .await
            .unwrap();

        let updated = TasteProfile::from_artists(
            "user-1",
            vec![Artist::new("a1", "Nirvana", vec!["grunge".into()], 0)],
        );
        store.store_profile(updated.clone()).await.unwrap();

        let found = store.profile("user-1").await.unwrap().unwrap();
        assert_eq!(found.top_artists.len(), 1);
    }
}
