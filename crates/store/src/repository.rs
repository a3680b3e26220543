use async_trait::async_trait;
use favorites_core::assets::Asset;
use favorites_core::error::CoreError;
use favorites_core::types::{AssetId, UserId};
use favorites_core::user::Favorites;

/// CRUD over per-user favorite assets.
///
/// Every operation checks that the user exists before anything else, and
/// either fully succeeds or leaves the store untouched.
#[async_trait]
pub trait FavoritesRepository: Send + Sync + 'static {
    /// Snapshot of a user's favorites.
    ///
    /// Fails with `NotFound(User)`.
    async fn list_favorites(&self, user_id: UserId) -> Result<Favorites, CoreError>;

    /// Insert `asset` under its own id and return the stored copy.
    ///
    /// Fails with `NotFound(User)` or `AssetExists`.
    async fn add_favorite(&self, user_id: UserId, asset: Asset) -> Result<Asset, CoreError>;

    /// Remove one favorite.
    ///
    /// Fails with `NotFound(User)`, then `NotFound(Asset)`.
    async fn remove_favorite(&self, user_id: UserId, asset_id: AssetId) -> Result<(), CoreError>;

    /// Replace an existing favorite wholesale. The replacement must keep the
    /// existing id and kind.
    ///
    /// Fails with `NotFound(User)`, `NotFound(Asset)`, then `InvalidEdit`.
    async fn edit_favorite(
        &self,
        user_id: UserId,
        asset_id: AssetId,
        asset: Asset,
    ) -> Result<Asset, CoreError>;
}
