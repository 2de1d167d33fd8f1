//! Registry command implementation.
//!
//! `boilerplates registry list|add|remove|enable|disable`.

use crate::catalog::Registry;
use crate::cli::args::{RegistryArgs, RegistryCommands};
use crate::config::ConfigPaths;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::registry_lines;

/// The registry command implementation.
pub struct RegistryCommand {
    paths: ConfigPaths,
    args: RegistryArgs,
}

impl RegistryCommand {
    /// Create a new registry command.
    pub fn new(paths: &ConfigPaths, args: RegistryArgs) -> Self {
        Self {
            paths: paths.clone(),
            args,
        }
    }
}

impl Command for RegistryCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut config = self.paths.load()?;

        match &self.args.command {
            RegistryCommands::List => {
                ui.message("Configured Registries:");
                if config.registries.is_empty() {
                    ui.message("  No registries configured");
                }
                for registry in &config.registries {
                    for line in registry_lines(registry) {
                        ui.message(&line);
                    }
                }
                return Ok(CommandResult::success());
            }
            RegistryCommands::Add {
                id,
                url,
                name,
                auth,
            } => {
                let mut registry = Registry::new(id.clone(), url.clone()).with_auth(*auth);
                if let Some(name) = name {
                    registry = registry.with_name(name.clone());
                }
                config.add_registry(registry)?;
                self.paths.save(&config)?;
                ui.success(&format!("Registry '{}' added successfully", id));
            }
            RegistryCommands::Remove { id } => {
                config.remove_registry(id)?;
                self.paths.save(&config)?;
                ui.success(&format!("Registry '{}' removed successfully", id));
            }
            RegistryCommands::Enable { id } => {
                config.set_registry_enabled(id, true)?;
                self.paths.save(&config)?;
                ui.success(&format!("Registry '{}' enabled", id));
            }
            RegistryCommands::Disable { id } => {
                config.set_registry_enabled(id, false)?;
                self.paths.save(&config)?;
                ui.success(&format!("Registry '{}' disabled", id));
            }
        }

        Ok(CommandResult::success())
    }
}
