pub mod favorites;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users/{id}/favorites                            list, add
/// /users/{id}/favorites/{asset_id}                 edit, remove
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/users", favorites::router())
}
