//! Favorite asset variants.
//!
//! An [`Asset`] is a closed sum over three kinds. Every kind carries an `id`
//! and a `description`; the remaining fields are kind-specific. On the wire
//! the kind is an internal `type` tag:
//!
//! ```text
//! {"type":"Insight","id":1,"description":"...","text":"..."}
//! ```

pub mod audience;
pub mod chart;
pub mod decode;
pub mod insight;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use audience::Audience;
pub use chart::{Chart, Point};
pub use decode::{decode_asset, decode_asset_value};
pub use insight::Insight;

use crate::error::EditError;
use crate::types::AssetId;

/// Discriminator values accepted in the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKind {
    Chart,
    Insight,
    Audience,
}

impl AssetKind {
    pub const ALL: [AssetKind; 3] = [AssetKind::Chart, AssetKind::Insight, AssetKind::Audience];

    pub fn as_str(self) -> &'static str {
        match self {
            AssetKind::Chart => "Chart",
            AssetKind::Insight => "Insight",
            AssetKind::Audience => "Audience",
        }
    }

    /// Look up a kind by its exact wire tag. Matching is case-sensitive.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user's favorite item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Asset {
    Chart(Chart),
    Insight(Insight),
    Audience(Audience),
}

impl Asset {
    pub fn id(&self) -> AssetId {
        match self {
            Asset::Chart(c) => c.id,
            Asset::Insight(i) => i.id,
            Asset::Audience(a) => a.id,
        }
    }

    pub fn kind(&self) -> AssetKind {
        match self {
            Asset::Chart(_) => AssetKind::Chart,
            Asset::Insight(_) => AssetKind::Insight,
            Asset::Audience(_) => AssetKind::Audience,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Asset::Chart(c) => &c.description,
            Asset::Insight(i) => &i.description,
            Asset::Audience(a) => &a.description,
        }
    }
}

/// Check that `replacement` may overwrite `existing`: both the id and the
/// kind must be unchanged.
pub fn validate_replacement(existing: &Asset, replacement: &Asset) -> Result<(), EditError> {
    if replacement.id() != existing.id() {
        return Err(EditError::IdMismatch {
            expected: existing.id(),
            found: replacement.id(),
        });
    }
    if replacement.kind() != existing.kind() {
        return Err(EditError::KindMismatch {
            expected: existing.kind(),
            found: replacement.kind(),
        });
    }
    Ok(())
}

impl From<Chart> for Asset {
    fn from(chart: Chart) -> Self {
        Asset::Chart(chart)
    }
}

impl From<Insight> for Asset {
    fn from(insight: Insight) -> Self {
        Asset::Insight(insight)
    }
}

impl From<Audience> for Asset {
    fn from(audience: Audience) -> Self {
        Asset::Audience(audience)
    }
}
