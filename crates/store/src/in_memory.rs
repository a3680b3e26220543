use std::collections::btree_map::Entry;
use std::collections::HashMap;

use async_trait::async_trait;
use favorites_core::assets::{validate_replacement, Asset};
use favorites_core::error::CoreError;
use favorites_core::seed;
use favorites_core::types::{AssetId, UserId};
use favorites_core::user::{Favorites, User};
use tokio::sync::Mutex;

use crate::repository::FavoritesRepository;

/// Process-local favorites store.
///
/// A single `Mutex` guards the whole user map, so every operation runs its
/// existence checks and its mutation as one critical section. Reads hand
/// out cloned snapshots; nothing outside the lock ever aliases stored data.
#[derive(Debug, Default)]
pub struct InMemoryUserRepo {
    users: Mutex<HashMap<UserId, User>>,
}

impl InMemoryUserRepo {
    /// Create an empty store with no users.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with `users`.
    pub fn with_users(users: HashMap<UserId, User>) -> Self {
        Self {
            users: Mutex::new(users),
        }
    }

    /// Replace all users with generated sample data.
    pub async fn populate(&self, user_count: usize, assets_per_user: usize) {
        let generated = seed::generate_users(user_count, assets_per_user);
        *self.users.lock().await = generated;
        tracing::debug!(user_count, assets_per_user, "Store populated with sample users");
    }

    /// Register a user with no favorites. Returns `false` if the id is taken.
    pub async fn add_user(&self, user_id: UserId) -> bool {
        let mut users = self.users.lock().await;
        if users.contains_key(&user_id) {
            return false;
        }
        users.insert(user_id, User::new(user_id));
        true
    }

    /// Number of users currently held.
    pub async fn user_count(&self) -> usize {
        self.users.lock().await.len()
    }
}

#[async_trait]
impl FavoritesRepository for InMemoryUserRepo {
    async fn list_favorites(&self, user_id: UserId) -> Result<Favorites, CoreError> {
        let users = self.users.lock().await;
        let user = users
            .get(&user_id)
            .ok_or_else(|| CoreError::user_not_found(user_id))?;
        Ok(user.favorites.clone())
    }

    async fn add_favorite(&self, user_id: UserId, asset: Asset) -> Result<Asset, CoreError> {
        let mut users = self.users.lock().await;
        let user = users
            .get_mut(&user_id)
            .ok_or_else(|| CoreError::user_not_found(user_id))?;

        let asset_id = asset.id();
        match user.favorites.entry(asset_id) {
            Entry::Occupied(_) => Err(CoreError::AssetExists(asset_id)),
            Entry::Vacant(slot) => {
                let stored = slot.insert(asset).clone();
                tracing::debug!(user_id, asset_id, kind = %stored.kind(), "Favorite inserted");
                Ok(stored)
            }
        }
    }

    async fn remove_favorite(&self, user_id: UserId, asset_id: AssetId) -> Result<(), CoreError> {
        let mut users = self.users.lock().await;
        let user = users
            .get_mut(&user_id)
            .ok_or_else(|| CoreError::user_not_found(user_id))?;

        user.favorites
            .remove(&asset_id)
            .ok_or_else(|| CoreError::asset_not_found(asset_id))?;
        tracing::debug!(user_id, asset_id, "Favorite removed");
        Ok(())
    }

    async fn edit_favorite(
        &self,
        user_id: UserId,
        asset_id: AssetId,
        asset: Asset,
    ) -> Result<Asset, CoreError> {
        let mut users = self.users.lock().await;
        let user = users
            .get_mut(&user_id)
            .ok_or_else(|| CoreError::user_not_found(user_id))?;
        let existing = user
            .favorites
            .get_mut(&asset_id)
            .ok_or_else(|| CoreError::asset_not_found(asset_id))?;

        validate_replacement(existing, &asset)?;

        *existing = asset;
        tracing::debug!(user_id, asset_id, "Favorite replaced");
        Ok(existing.clone())
    }
}
