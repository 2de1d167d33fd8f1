//! Template catalog model.
//!
//! Three sources feed the catalog: remote [`Registry`] documents, the
//! configuration's [`CustomTemplate`]s, and local `template.json` manifests.
//! Each is converted into a [`Template`] and merged by [`Catalog`].

pub mod aggregate;
pub mod custom;
pub mod registry;
pub mod template;
pub mod wire;

pub use aggregate::{Catalog, CatalogView};
pub use custom::CustomTemplate;
pub use registry::Registry;
pub use template::{pin_label, Prompt, ReplaceRule, Template, TemplateSource, MANIFEST_FILE};
pub use wire::{RegistryTemplate, TemplateRegistry};
