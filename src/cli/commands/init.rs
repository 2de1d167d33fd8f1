//! Init command implementation.
//!
//! The `boilerplates init` command walks the user through picking a
//! template and answering its prompts, then creates the project.

use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::cli::args::InitArgs;
use crate::config::ConfigPaths;
use crate::error::{BoilerplateError, Result};
use crate::registry::HttpFetcher;
use crate::ui::{Prompt, PromptOption, UserInterface};

use super::create::{bind_variables, output_dir, scaffold};
use super::dispatcher::{Command, CommandResult};
use super::display::choice_label;

/// The init command implementation.
pub struct InitCommand {
    paths: ConfigPaths,
    templates_root: PathBuf,
    fetcher: HttpFetcher,
    args: InitArgs,
}

impl InitCommand {
    /// Create a new init command.
    pub fn new(
        paths: &ConfigPaths,
        templates_root: &Path,
        fetcher: &HttpFetcher,
        args: InitArgs,
    ) -> Self {
        Self {
            paths: paths.clone(),
            templates_root: templates_root.to_path_buf(),
            fetcher: fetcher.clone(),
            args,
        }
    }

    /// Use the flag value or ask for it.
    fn value_or_prompt(
        &self,
        ui: &mut dyn UserInterface,
        given: Option<&String>,
        prompt: Prompt,
    ) -> Result<String> {
        match given {
            Some(value) => Ok(value.clone()),
            None => Ok(ui.prompt(&prompt)?.as_string().trim().to_string()),
        }
    }
}

impl Command for InitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.paths.load()?;
        ui.message("Fetching templates from registries...");
        let catalog = Catalog::assemble(&self.fetcher, &config, &self.templates_root);

        if catalog.is_empty() {
            ui.error("No templates available. Add a registry or custom template first.");
            return Ok(CommandResult::failure(2));
        }

        let template_id = match &self.args.template {
            Some(id) => id.clone(),
            None => {
                let options = catalog
                    .templates()
                    .iter()
                    .map(|t| PromptOption {
                        label: choice_label(t),
                        value: t.id.clone(),
                    })
                    .collect();
                ui.prompt(&Prompt::select("template", "Select a template", options))?
                    .as_string()
            }
        };

        let Some(template) = catalog.find(&template_id) else {
            ui.error(&BoilerplateError::UnknownTemplate { id: template_id }.to_string());
            return Ok(CommandResult::failure(2));
        };
        ui.show_header(&template.name);

        let project_name = self.value_or_prompt(
            ui,
            self.args.project_name.as_ref(),
            Prompt::input("project_name", "Project name"),
        )?;
        if project_name.is_empty() {
            ui.error("Project name is required");
            return Ok(CommandResult::failure(2));
        }

        let author_name = self.value_or_prompt(
            ui,
            self.args.author_name.as_ref(),
            Prompt::input("author_name", "Author name").with_default(""),
        )?;

        let mut variables = bind_variables(&project_name, &author_name, &self.args.vars)?;
        variables.resolve_prompts(&template.prompts, |name, prompt| {
            let question = if prompt.label.is_empty() {
                name
            } else {
                prompt.label.as_str()
            };
            let answer = ui.prompt(&Prompt::input(name, question).with_default(&prompt.default))?;
            Ok(Some(answer.as_string()))
        })?;

        let dest = output_dir(self.args.output.as_deref(), &project_name);
        ui.message(&format!(
            "Creating project '{}' from template '{}'",
            project_name, template.name
        ));
        scaffold(ui, template, &self.templates_root, variables, &dest)?;
        ui.success("Project created successfully!");
        ui.show_hint(&format!("cd {}", dest.display()));

        Ok(CommandResult::success())
    }
}
