//! The merged catalog of every template the tool knows about.
//!
//! Order is registry templates, then custom templates, then local ones.
//! Ids are not de-duplicated; lookups return the first match.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, warn};

use super::template::{Template, TemplateSource};
use crate::config::Configuration;
use crate::registry::{discover_local_templates, fetch_all_registries, HttpFetcher};

/// An ordered list of templates from all sources.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    templates: Vec<Template>,
}

/// Templates grouped by origin, for display.
#[derive(Debug, Default)]
pub struct CatalogView<'a> {
    /// Registry templates keyed by category, sorted.
    pub registry: BTreeMap<String, Vec<&'a Template>>,
    pub custom: Vec<&'a Template>,
    pub local: Vec<&'a Template>,
}

impl Catalog {
    /// Gather templates from every source.
    ///
    /// Registry and discovery failures are logged; they never fail the whole
    /// catalog.
    pub fn assemble(fetcher: &HttpFetcher, config: &Configuration, local_root: &Path) -> Self {
        let registry = fetch_all_registries(fetcher, config);
        let custom = config
            .custom_templates
            .iter()
            .map(|c| c.to_template())
            .collect();
        let local = match discover_local_templates(local_root) {
            Ok(local) => local,
            Err(e) => {
                warn!(path = %local_root.display(), error = %e, "skipping local templates");
                Vec::new()
            }
        };

        let catalog = Self::from_parts(registry, custom, local);
        debug!(count = catalog.len(), "assembled catalog");
        catalog
    }

    /// Build a catalog from already-loaded sources, keeping their order.
    pub fn from_parts(
        registry: Vec<Template>,
        custom: Vec<Template>,
        local: Vec<Template>,
    ) -> Self {
        let mut templates = registry;
        templates.extend(custom);
        templates.extend(local);
        Self { templates }
    }

    /// First template with the given id.
    pub fn find(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Group templates by origin, registry templates by category.
    pub fn by_origin(&self) -> CatalogView<'_> {
        let mut view = CatalogView::default();
        for template in &self.templates {
            match template.source {
                TemplateSource::Registry { .. } => view
                    .registry
                    .entry(template.display_category().to_uppercase())
                    .or_default()
                    .push(template),
                TemplateSource::Custom => view.custom.push(template),
                TemplateSource::Local => view.local.push(template),
            }
        }
        view
    }

    /// Ids that appear more than once, in first-seen order.
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        let mut order = Vec::new();
        for template in &self.templates {
            let count = counts.entry(template.id.as_str()).or_insert(0);
            *count += 1;
            if *count == 2 {
                order.push(template.id.as_str());
            }
        }
        order
    }
}
