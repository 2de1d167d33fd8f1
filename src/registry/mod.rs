//! Template sources outside the configuration file.
//!
//! - [`remote`]: registry documents fetched over HTTP
//! - [`local`]: `template.json` manifests discovered on disk

pub mod fetch;
pub mod local;
pub mod remote;

pub use fetch::{AuthHeader, HttpFetcher};
pub use local::discover_local_templates;
pub use remote::{fetch_all_registries, fetch_registry};
