//! Game data and planner configuration loaders.
//!
//! This crate reads the data directory the planner works from:
//! - Character and weapon index files (JSON)
//! - One detail record per character and weapon (JSON)
//! - Planner configuration and team files (TOML)
//!
//! Loaded data is exposed through [`ContentRepository`], which implements the
//! read-only oracles defined by `planner-core`.

#[cfg(feature = "loaders")]
pub mod loaders;
#[cfg(feature = "loaders")]
pub mod repository;

#[cfg(feature = "loaders")]
pub use loaders::{
    CharacterLoader, ConfigLoader, ContentFactory, LoadResult, TeamLoader, WeaponLoader,
};
#[cfg(feature = "loaders")]
pub use repository::ContentRepository;
