use serde::{Deserialize, Serialize};

use crate::types::AssetId;

/// A free-text finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub id: AssetId,
    pub description: String,
    pub text: String,
}
