//! Favorites service facade.
//!
//! Sits between the HTTP handlers and the storage backend so the backend can
//! be swapped without touching the transport. Errors pass through unchanged.

use std::sync::Arc;

use favorites_core::assets::Asset;
use favorites_core::error::CoreError;
use favorites_core::types::{AssetId, UserId};
use favorites_core::user::Favorites;
use favorites_store::FavoritesRepository;

/// Cheaply cloneable handle over a shared [`FavoritesRepository`].
#[derive(Clone)]
pub struct FavoritesService {
    repo: Arc<dyn FavoritesRepository>,
}

impl FavoritesService {
    pub fn new(repo: Arc<dyn FavoritesRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_favorites(&self, user_id: UserId) -> Result<Favorites, CoreError> {
        self.repo.list_favorites(user_id).await
    }

    pub async fn add_favorite(&self, user_id: UserId, asset: Asset) -> Result<Asset, CoreError> {
        self.repo.add_favorite(user_id, asset).await
    }

    pub async fn remove_favorite(
        &self,
        user_id: UserId,
        asset_id: AssetId,
    ) -> Result<(), CoreError> {
        self.repo.remove_favorite(user_id, asset_id).await
    }

    pub async fn edit_favorite(
        &self,
        user_id: UserId,
        asset_id: AssetId,
        asset: Asset,
    ) -> Result<Asset, CoreError> {
        self.repo.edit_favorite(user_id, asset_id, asset).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;
    use favorites_core::assets::{Audience, Insight};
    use favorites_core::error::{EditError, Entity};
    use favorites_core::user::User;
    use favorites_store::InMemoryUserRepo;

    use super::*;

    fn audience(id: AssetId) -> Asset {
        Asset::Audience(Audience {
            id,
            description: "Sample Audience".into(),
            age: 25,
            age_group: "26-40".into(),
            gender: "Male".into(),
            birth_country: "Greece".into(),
            hours_spent_on_media: 18,
            number_of_purchases: 4,
        })
    }

    fn service() -> FavoritesService {
        let mut users = HashMap::new();
        users.insert(1, User::with_favorites(1, [audience(3)]));
        FavoritesService::new(Arc::new(InMemoryUserRepo::with_users(users)))
    }

    #[tokio::test]
    async fn passes_operations_through_to_repository() {
        let service = service();
        let insight = Asset::Insight(Insight {
            id: 4,
            description: "d".into(),
            text: "t".into(),
        });

        service.add_favorite(1, insight.clone()).await.unwrap();
        assert_eq!(service.list_favorites(1).await.unwrap().len(), 2);

        let mut updated = audience(3);
        if let Asset::Audience(a) = &mut updated {
            a.number_of_purchases = 5;
        }
        assert_eq!(service.edit_favorite(1, 3, updated.clone()).await.unwrap(), updated);

        service.remove_favorite(1, 4).await.unwrap();
        let favorites = service.list_favorites(1).await.unwrap();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[&3], updated);
    }

    #[tokio::test]
    async fn preserves_repository_errors() {
        let service = service();
        assert_matches!(
            service.list_favorites(2).await,
            Err(CoreError::NotFound { entity: Entity::User, id: 2 })
        );
        assert_matches!(
            service.add_favorite(1, audience(3)).await,
            Err(CoreError::AssetExists(3))
        );
        assert_matches!(
            service.remove_favorite(1, 9).await,
            Err(CoreError::NotFound { entity: Entity::Asset, id: 9 })
        );
        assert_matches!(
            service.edit_favorite(1, 3, audience(8)).await,
            Err(CoreError::InvalidEdit(EditError::IdMismatch { expected: 3, found: 8 }))
        );
    }
}
