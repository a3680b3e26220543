use std::fmt;

use crate::assets::AssetKind;
use crate::types::{AssetId, UserId};

/// The kind of record a [`CoreError::NotFound`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    User,
    Asset,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::User => f.write_str("User"),
            Entity::Asset => f.write_str("Asset"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: Entity, id: i64 },

    #[error("Asset with id {0} already exists")]
    AssetExists(AssetId),

    #[error(transparent)]
    InvalidEdit(#[from] EditError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl CoreError {
    pub fn user_not_found(id: UserId) -> Self {
        CoreError::NotFound {
            entity: Entity::User,
            id,
        }
    }

    pub fn asset_not_found(id: AssetId) -> Self {
        CoreError::NotFound {
            entity: Entity::Asset,
            id,
        }
    }
}

/// Rejections raised when an edit would change an asset's identity.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EditError {
    #[error("Edited asset id {found} does not match existing asset id {expected}")]
    IdMismatch { expected: AssetId, found: AssetId },

    #[error("Edited asset type {found} does not match existing asset type {expected}")]
    KindMismatch {
        expected: AssetKind,
        found: AssetKind,
    },
}

/// Failures of the discriminated asset decoder.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DecodeError {
    /// Input is not well-formed JSON, is not an object, or a field has the
    /// wrong shape for the selected variant.
    #[error("Malformed asset: {0}")]
    Malformed(String),

    /// The `type` discriminator is absent or names no known asset kind.
    #[error("Invalid asset type: {0}")]
    UnknownKind(String),
}
