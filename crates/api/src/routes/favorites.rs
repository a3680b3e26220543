//! Route definitions for user favorites.
//!
//! All routes are mounted under `/users`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::favorites;
use crate::state::AppState;

/// Favorites routes mounted at `/users`.
///
/// ```text
/// GET    /{id}/favorites              -> list_favorites
/// POST   /{id}/favorites              -> add_favorite
/// PUT    /{id}/favorites/{asset_id}   -> edit_favorite
/// DELETE /{id}/favorites/{asset_id}   -> remove_favorite
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}/favorites",
            get(favorites::list_favorites).post(favorites::add_favorite),
        )
        .route(
            "/{id}/favorites/{asset_id}",
            put(favorites::edit_favorite).delete(favorites::remove_favorite),
        )
}
