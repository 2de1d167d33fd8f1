//! Create command implementation.
//!
//! The `boilerplates create` command materializes a template without
//! prompting. Template prompts take their defaults unless `--var` sets them.

use std::path::{Path, PathBuf};

use crate::catalog::{Catalog, Template};
use crate::cli::args::CreateArgs;
use crate::config::ConfigPaths;
use crate::error::{BoilerplateError, Result};
use crate::materialize::{source_dir, MaterializeReport, Materializer};
use crate::registry::HttpFetcher;
use crate::ui::UserInterface;
use crate::variables::{parse_assignment, Variables};

use super::dispatcher::{Command, CommandResult};

/// The create command implementation.
pub struct CreateCommand {
    paths: ConfigPaths,
    templates_root: PathBuf,
    fetcher: HttpFetcher,
    args: CreateArgs,
}

impl CreateCommand {
    /// Create a new create command.
    pub fn new(
        paths: &ConfigPaths,
        templates_root: &Path,
        fetcher: &HttpFetcher,
        args: CreateArgs,
    ) -> Self {
        Self {
            paths: paths.clone(),
            templates_root: templates_root.to_path_buf(),
            fetcher: fetcher.clone(),
            args,
        }
    }
}

impl Command for CreateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let project_name = self.args.project_name.trim();
        if project_name.is_empty() {
            ui.error("Project name is required");
            return Ok(CommandResult::failure(2));
        }

        let config = self.paths.load()?;
        let catalog = Catalog::assemble(&self.fetcher, &config, &self.templates_root);

        let Some(template) = catalog.find(&self.args.template_id) else {
            let err = BoilerplateError::UnknownTemplate {
                id: self.args.template_id.clone(),
            };
            ui.error(&err.to_string());
            return Ok(CommandResult::failure(2));
        };

        let mut variables = bind_variables(project_name, &self.args.author_name, &self.args.vars)?;
        variables.resolve_prompts(&template.prompts, |_, _| Ok(None))?;

        let dest = output_dir(self.args.output.as_deref(), project_name);
        ui.message(&format!(
            "Creating project '{}' from template '{}'",
            project_name, template.name
        ));
        scaffold(ui, template, &self.templates_root, variables, &dest)?;
        ui.success("Project created successfully!");

        Ok(CommandResult::success())
    }
}

/// Bind the fixed names, then apply `--var KEY=VALUE` flags over them.
pub(super) fn bind_variables(
    project_name: &str,
    author_name: &str,
    assignments: &[String],
) -> Result<Variables> {
    let mut variables = Variables::new(project_name, author_name);
    for assignment in assignments {
        let (key, value) = parse_assignment(assignment)?;
        variables.insert(key, value);
    }
    Ok(variables)
}

/// `--output` when given, otherwise `./<project name>`.
pub(super) fn output_dir(output: Option<&Path>, project_name: &str) -> PathBuf {
    match output {
        Some(dir) => dir.to_path_buf(),
        None => PathBuf::from(project_name),
    }
}

/// Locate the template's files and write them out under a spinner.
pub(super) fn scaffold(
    ui: &mut dyn UserInterface,
    template: &Template,
    templates_root: &Path,
    variables: Variables,
    dest: &Path,
) -> Result<MaterializeReport> {
    let source = source_dir(template, templates_root)?;
    let mut spinner = ui.start_spinner(&format!("Copying files from {}", source.display()));

    match Materializer::new(variables).materialize(template, &source, dest) {
        Ok(report) => {
            spinner.finish_success(&format!(
                "Wrote {} files to {}",
                report.files,
                dest.display()
            ));
            if ui.output_mode().shows_detail() {
                for (from, to) in &report.renamed {
                    ui.message(&format!("  {} -> {}", from.display(), to.display()));
                }
            }
            Ok(report)
        }
        Err(e) => {
            spinner.finish_error("Materialization failed");
            Err(e)
        }
    }
}
