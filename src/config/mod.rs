//! Configuration loading, mutation, and persistence.
//!
//! - Record shape and defaults in [`schema`]
//! - In-memory mutations in [`store`]
//! - Directory layout and atomic save in [`loader`]
//!
//! # Example
//!
//! ```
//! use boilerplates::catalog::Registry;
//! use boilerplates::config::ConfigPaths;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let paths = ConfigPaths::new(temp.path());
//!
//! let mut config = paths.load().unwrap();
//! config
//!     .add_registry(Registry::new("team", "https://example.com/registry.json"))
//!     .unwrap();
//! paths.save(&config).unwrap();
//!
//! assert_eq!(paths.load().unwrap().registries.len(), 2);
//! ```

pub mod loader;
pub mod schema;
pub mod store;

pub use loader::{ConfigPaths, HOME_ENV};
pub use schema::{mask_token, Configuration, OFFICIAL_REGISTRY_ID, OFFICIAL_REGISTRY_URL};
pub use store::{ImportOutcome, ImportSelection};
