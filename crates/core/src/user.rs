use std::collections::BTreeMap;

use serde::Serialize;

use crate::assets::Asset;
use crate::types::{AssetId, UserId};

/// A user's favorites keyed by asset id.
pub type Favorites = BTreeMap<AssetId, Asset>;

/// A user and the assets they have favorited.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: UserId,
    pub favorites: Favorites,
}

impl User {
    /// A user with no favorites yet.
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            favorites: Favorites::new(),
        }
    }

    /// Build a user from a list of assets, keyed by their own ids.
    ///
    /// Later assets replace earlier ones that share an id.
    pub fn with_favorites(id: UserId, assets: impl IntoIterator<Item = Asset>) -> Self {
        let favorites = assets.into_iter().map(|a| (a.id(), a)).collect();
        Self { id, favorites }
    }
}
