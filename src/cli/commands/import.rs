//! Import command implementation.
//!
//! The `boilerplates import` command copies entries from a registry document
//! into the custom templates, so they survive the registry going away.

use crate::cli::args::ImportArgs;
use crate::config::{ConfigPaths, ImportSelection};
use crate::error::Result;
use crate::registry::{fetch_registry, HttpFetcher};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The import command implementation.
pub struct ImportCommand {
    paths: ConfigPaths,
    fetcher: HttpFetcher,
    args: ImportArgs,
}

impl ImportCommand {
    /// Create a new import command.
    pub fn new(paths: &ConfigPaths, fetcher: &HttpFetcher, args: ImportArgs) -> Self {
        Self {
            paths: paths.clone(),
            fetcher: fetcher.clone(),
            args,
        }
    }

    fn selection(&self) -> Option<ImportSelection> {
        if self.args.all {
            Some(ImportSelection::All)
        } else {
            self.args.template.clone().map(ImportSelection::One)
        }
    }
}

impl Command for ImportCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut config = self.paths.load()?;

        ui.message(&format!("Fetching registry from {}...", self.args.url));
        let registry = fetch_registry(
            &self.fetcher,
            &self.args.url,
            config.token(),
            self.args.auth,
        )?;
        ui.message(&format!(
            "Registry: {} ({} templates)",
            registry.name,
            registry.templates.len()
        ));

        let Some(selection) = self.selection() else {
            ui.message("\nAvailable templates:");
            for entry in &registry.templates {
                ui.message(&format!("  - {}: {}", entry.id, entry.name));
                ui.message(&format!(
                    "    Repo: {}",
                    entry.effective_repo(&registry.default_repo)
                ));
                ui.message(&format!("    Path: {}", entry.path));
            }
            ui.show_hint(
                "Use --template <id> to import a specific template, or --all to import all.",
            );
            return Ok(CommandResult::success());
        };

        let outcome = config.import_registry_templates(&registry, &selection, self.args.auth)?;
        for (id, reason) in &outcome.skipped {
            ui.warning(&format!("Skipping '{}': {}", id, reason));
        }
        for id in &outcome.imported {
            ui.message(&format!("Imported: {}", id));
        }

        if outcome.imported.is_empty() {
            ui.warning("No templates imported");
        } else {
            self.paths.save(&config)?;
            ui.success(&format!(
                "Successfully imported {} template(s)",
                outcome.imported.len()
            ));
        }

        Ok(CommandResult::success())
    }
}
