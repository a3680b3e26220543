//! Handlers for per-user favorite assets.
//!
//! Request bodies are read as raw bytes and run through the discriminated
//! asset decoder so that unknown `type` tags and malformed payloads are
//! reported with their own error codes.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use favorites_core::assets::{decode_asset, Asset};
use favorites_core::types::{AssetId, UserId};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Decode a request body into an asset, rejecting empty bodies up front.
///
/// Only a zero-length body is `MissingBody`; whitespace or any other
/// non-object payload goes through the decoder and comes back `Malformed`.
fn asset_from_body(body: &Bytes) -> AppResult<Asset> {
    if body.is_empty() {
        return Err(AppError::MissingBody);
    }
    Ok(decode_asset(body)?)
}

// ---------------------------------------------------------------------------
// Favorites CRUD
// ---------------------------------------------------------------------------

/// GET /users/{id}/favorites
///
/// List a user's favorites as an object keyed by asset id.
pub async fn list_favorites(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> AppResult<impl IntoResponse> {
    let favorites = state.favorites.list_favorites(user_id).await?;

    Ok(Json(favorites))
}

/// POST /users/{id}/favorites
///
/// Add an asset to a user's favorites and echo it back.
pub async fn add_favorite(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let asset = asset_from_body(&body)?;
    let asset = state.favorites.add_favorite(user_id, asset).await?;

    tracing::info!(
        user_id,
        asset_id = asset.id(),
        kind = %asset.kind(),
        "Favorite added",
    );

    Ok((StatusCode::CREATED, Json(asset)))
}

/// DELETE /users/{id}/favorites/{asset_id}
///
/// Remove one favorite. Returns 204 with an empty body.
pub async fn remove_favorite(
    State(state): State<AppState>,
    Path((user_id, asset_id)): Path<(UserId, AssetId)>,
) -> AppResult<impl IntoResponse> {
    state.favorites.remove_favorite(user_id, asset_id).await?;

    tracing::info!(user_id, asset_id, "Favorite removed");

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /users/{id}/favorites/{asset_id}
///
/// Replace an existing favorite. The body must keep the stored id and type.
pub async fn edit_favorite(
    State(state): State<AppState>,
    Path((user_id, asset_id)): Path<(UserId, AssetId)>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let asset = asset_from_body(&body)?;
    let asset = state
        .favorites
        .edit_favorite(user_id, asset_id, asset)
        .await?;

    tracing::info!(
        user_id,
        asset_id,
        kind = %asset.kind(),
        "Favorite updated",
    );

    Ok(Json(asset))
}
