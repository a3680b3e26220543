//! Domain model for the favorites service.
//!
//! Holds the asset variants and their discriminated decoder, the user model,
//! the shared error taxonomy, and sample-data generation. Nothing here knows
//! about storage or HTTP.

pub mod assets;
pub mod error;
pub mod seed;
pub mod types;
pub mod user;
