//! List command implementation.
//!
//! The `boilerplates list` command shows every template in the catalog,
//! grouped by where it came from.

use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::cli::args::ListArgs;
use crate::config::ConfigPaths;
use crate::error::{BoilerplateError, Result};
use crate::registry::HttpFetcher;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::{custom_template_line, local_template_line, registry_template_line};

/// The list command implementation.
pub struct ListCommand {
    paths: ConfigPaths,
    templates_root: PathBuf,
    fetcher: HttpFetcher,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(
        paths: &ConfigPaths,
        templates_root: &Path,
        fetcher: &HttpFetcher,
        args: ListArgs,
    ) -> Self {
        Self {
            paths: paths.clone(),
            templates_root: templates_root.to_path_buf(),
            fetcher: fetcher.clone(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.paths.load()?;

        if !self.args.json {
            ui.message("Fetching templates from registries...");
        }
        let catalog = Catalog::assemble(&self.fetcher, &config, &self.templates_root);

        if self.args.json {
            let json = serde_json::to_string_pretty(catalog.templates())
                .map_err(|e| BoilerplateError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        for id in catalog.duplicate_ids() {
            ui.warning(&format!(
                "Template ID '{}' is defined more than once; the first definition is used",
                id
            ));
        }

        let view = catalog.by_origin();

        let registry_count: usize = view.registry.values().map(Vec::len).sum();
        if registry_count > 0 {
            ui.message(&format!("\nRegistry Templates ({}):", registry_count));
            for (category, templates) in &view.registry {
                ui.message(&format!("  [{}]", category));
                for template in templates {
                    ui.message(&registry_template_line(template));
                }
            }
        }

        if !view.custom.is_empty() {
            ui.message(&format!("\nCustom Templates ({}):", view.custom.len()));
            for template in &view.custom {
                ui.message(&custom_template_line(template));
            }
        }

        if !view.local.is_empty() {
            ui.message(&format!("\nLocal Templates ({}):", view.local.len()));
            for template in &view.local {
                ui.message(&local_template_line(template));
            }
        }

        ui.message(&format!("\nTotal Templates: {}", catalog.len()));

        Ok(CommandResult::success())
    }
}
