//! Storage layer for user favorites.
//!
//! [`FavoritesRepository`] is the seam the API layer depends on;
//! [`InMemoryUserRepo`] is the process-local implementation.

pub mod in_memory;
pub mod repository;

pub use in_memory::InMemoryUserRepo;
pub use repository::FavoritesRepository;
