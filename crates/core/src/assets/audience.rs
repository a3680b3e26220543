use serde::{Deserialize, Serialize};

use crate::types::AssetId;

/// Demographic profile of an audience segment.
///
/// Counters are unsigned; a negative value on the wire fails decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Audience {
    pub id: AssetId,
    pub description: String,
    pub age: u32,
    pub age_group: String,
    pub gender: String,
    pub birth_country: String,
    pub hours_spent_on_media: u32,
    pub number_of_purchases: u32,
}
