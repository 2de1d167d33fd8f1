//! Mutations on the configuration record.
//!
//! Every operation either applies fully or leaves the collections untouched
//! and returns an error. Ids are unique within each collection.

use tracing::debug;

use crate::catalog::{CustomTemplate, Registry, TemplateRegistry};
use crate::error::{BoilerplateError, Result};

use super::schema::Configuration;

const REGISTRY: &str = "registry";
const TEMPLATE: &str = "template";

/// Which registry entries an import should copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportSelection {
    /// Every entry in the registry.
    All,
    /// Only the entry with this id.
    One(String),
}

/// Result of copying registry entries into the custom templates.
#[derive(Debug, Default, PartialEq)]
pub struct ImportOutcome {
    /// Ids that were added.
    pub imported: Vec<String>,
    /// Ids that were not added, with the reason.
    pub skipped: Vec<(String, String)>,
}

impl Configuration {
    /// Append a registry. Fails if the id is taken.
    pub fn add_registry(&mut self, registry: Registry) -> Result<()> {
        if self.registries.iter().any(|r| r.id == registry.id) {
            return Err(BoilerplateError::DuplicateId {
                kind: REGISTRY,
                id: registry.id,
            });
        }
        debug!(registry = %registry.id, "adding registry");
        self.registries.push(registry);
        Ok(())
    }

    /// Remove a registry by id, returning it.
    pub fn remove_registry(&mut self, id: &str) -> Result<Registry> {
        let index = self
            .registries
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| not_found(REGISTRY, id))?;
        Ok(self.registries.remove(index))
    }

    /// Enable or disable a registry in place.
    pub fn set_registry_enabled(&mut self, id: &str, enabled: bool) -> Result<()> {
        let registry = self
            .registries
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| not_found(REGISTRY, id))?;
        registry.enabled = enabled;
        Ok(())
    }

    /// Append a custom template. Fails if the id is taken.
    pub fn add_custom_template(&mut self, template: CustomTemplate) -> Result<()> {
        if self.custom_templates.iter().any(|t| t.id == template.id) {
            return Err(BoilerplateError::DuplicateId {
                kind: TEMPLATE,
                id: template.id,
            });
        }
        debug!(template = %template.id, "adding custom template");
        self.custom_templates.push(template);
        Ok(())
    }

    /// Remove a custom template by id, returning it.
    pub fn remove_custom_template(&mut self, id: &str) -> Result<CustomTemplate> {
        let index = self
            .custom_templates
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| not_found(TEMPLATE, id))?;
        Ok(self.custom_templates.remove(index))
    }

    /// Pin a custom template to a commit, or clear the pin with `None`.
    pub fn set_template_commit(&mut self, id: &str, commit: Option<String>) -> Result<()> {
        let template = self
            .custom_templates
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| not_found(TEMPLATE, id))?;
        template.commit = commit;
        Ok(())
    }

    /// Set or clear the auth token.
    pub fn set_token(&mut self, token: Option<String>) {
        self.github_token = token.unwrap_or_default();
    }

    /// Copy registry entries into the custom templates.
    ///
    /// Entries whose id already exists are skipped, not fatal. Selecting an
    /// id the registry does not contain is an error.
    pub fn import_registry_templates(
        &mut self,
        registry: &TemplateRegistry,
        selection: &ImportSelection,
        private: bool,
    ) -> Result<ImportOutcome> {
        let entries: Vec<_> = match selection {
            ImportSelection::All => registry.templates.iter().collect(),
            ImportSelection::One(id) => vec![registry
                .get(id)
                .ok_or_else(|| not_found(TEMPLATE, id))?],
        };

        let mut outcome = ImportOutcome::default();
        for entry in entries {
            let custom = entry.to_custom_template(&registry.default_repo, private);
            match self.add_custom_template(custom) {
                Ok(()) => outcome.imported.push(entry.id.clone()),
                Err(e) => outcome.skipped.push((entry.id.clone(), e.to_string())),
            }
        }
        Ok(outcome)
    }
}

fn not_found(kind: &'static str, id: &str) -> BoilerplateError {
    BoilerplateError::NotFound {
        kind,
        id: id.to_string(),
    }
}
