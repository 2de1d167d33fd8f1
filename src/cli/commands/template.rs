//! Template command implementation.
//!
//! `boilerplates template list|add|remove|pin|unpin` manages the custom
//! templates stored in the configuration.

use crate::catalog::CustomTemplate;
use crate::cli::args::{TemplateAddArgs, TemplateArgs, TemplateCommands};
use crate::config::ConfigPaths;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::custom_template_lines;

/// The template command implementation.
pub struct TemplateCommand {
    paths: ConfigPaths,
    args: TemplateArgs,
}

impl TemplateCommand {
    /// Create a new template command.
    pub fn new(paths: &ConfigPaths, args: TemplateArgs) -> Self {
        Self {
            paths: paths.clone(),
            args,
        }
    }
}

fn to_custom_template(args: &TemplateAddArgs) -> CustomTemplate {
    CustomTemplate {
        name: args.name.clone().unwrap_or_else(|| args.id.clone()),
        description: args.description.clone(),
        path: args.path.clone(),
        branch: args.branch.clone(),
        commit: args.commit.clone().filter(|c| !c.is_empty()),
        private: args.private,
        category: args.category.clone(),
        tags: args.tags.clone(),
        ..CustomTemplate::new(args.id.clone(), args.repo.clone())
    }
}

impl Command for TemplateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut config = self.paths.load()?;

        match &self.args.command {
            TemplateCommands::List => {
                ui.message("Custom Templates:");
                if config.custom_templates.is_empty() {
                    ui.message("  No custom templates configured");
                }
                for template in &config.custom_templates {
                    for line in custom_template_lines(template) {
                        ui.message(&line);
                    }
                }
                return Ok(CommandResult::success());
            }
            TemplateCommands::Add(args) => {
                let template = to_custom_template(args);
                let commit = template.commit.clone();
                config.add_custom_template(template)?;
                self.paths.save(&config)?;
                ui.success(&format!("Template '{}' added successfully", args.id));
                if let Some(commit) = commit {
                    ui.message(&format!("Pinned to commit: {}", commit));
                }
            }
            TemplateCommands::Remove { id } => {
                config.remove_custom_template(id)?;
                self.paths.save(&config)?;
                ui.success(&format!("Template '{}' removed successfully", id));
            }
            TemplateCommands::Pin { id, commit } => {
                config.set_template_commit(id, Some(commit.clone()))?;
                self.paths.save(&config)?;
                ui.success(&format!("Template '{}' pinned to commit {}", id, commit));
            }
            TemplateCommands::Unpin { id } => {
                config.set_template_commit(id, None)?;
                self.paths.save(&config)?;
                ui.success(&format!("Template '{}' unpinned, will use latest", id));
            }
        }

        Ok(CommandResult::success())
    }
}
