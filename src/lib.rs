//! Boilerplates - scaffold new projects from reusable templates.
//!
//! Templates come from three places: remote registry documents, custom
//! templates declared in the user's configuration, and `template.json`
//! manifests discovered on disk. They are merged into one catalog, and any
//! entry can be materialized into a new project directory with its
//! placeholders filled in.
//!
//! # Modules
//!
//! - [`catalog`] - Template, registry, and custom template types; the merged catalog
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration record, persistence, and mutations
//! - [`error`] - Error types and result aliases
//! - [`materialize`] - Copying a template tree into a new project
//! - [`registry`] - Fetching registries and discovering local templates
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//! - [`variables`] - Values substituted into templates
//!
//! # Example
//!
//! ```
//! use boilerplates::materialize::render;
//! use boilerplates::variables::Variables;
//!
//! let vars = Variables::new("Shop", "Ada");
//! let out = render("# {{ ProjectName }} by {{ AuthorName }}", &vars, "README.md").unwrap();
//! assert_eq!(out, "# Shop by Ada");
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod materialize;
pub mod registry;
pub mod ui;
pub mod variables;

pub use error::{BoilerplateError, Result};
