/// User identifiers are plain integers assigned at seeding time.
pub type UserId = i64;

/// Asset identifiers are unique within one user's favorites only.
pub type AssetId = i64;
