//! Config command implementation.
//!
//! The `boilerplates config` command shows the configuration, manages the
//! access token, and prints where files live. The token is never printed
//! unmasked.

use crate::catalog::pin_label;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::ConfigPaths;
use crate::error::{BoilerplateError, Result};
use crate::ui::{Prompt, PromptType, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    paths: ConfigPaths,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(paths: &ConfigPaths, args: ConfigArgs) -> Self {
        Self {
            paths: paths.clone(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ConfigArgs {
        &self.args
    }

    fn show(&self, ui: &mut dyn UserInterface, json: bool) -> Result<()> {
        let config = self.paths.load()?;

        if json {
            let mut shown = config.clone();
            if !shown.github_token.is_empty() {
                shown.github_token = config.masked_token();
            }
            let json = serde_json::to_string_pretty(&shown)
                .map_err(|e| BoilerplateError::Other(e.into()))?;
            ui.message(&json);
            return Ok(());
        }

        ui.message(&format!("Config directory: {}", self.paths.root().display()));
        ui.message(&format!("GitHub Token: {}", config.masked_token()));

        ui.message(&format!("\nRegistries ({}):", config.registries.len()));
        for registry in &config.registries {
            ui.message(&format!(
                "  - {} ({}): {}",
                registry.id,
                registry.status_label(),
                registry.url
            ));
        }

        ui.message(&format!(
            "\nCustom Templates ({}):",
            config.custom_templates.len()
        ));
        for template in &config.custom_templates {
            ui.message(&format!(
                "  - {} [{}]: {}",
                template.id,
                pin_label(template.commit.as_deref()),
                template.repo
            ));
        }
        Ok(())
    }

    fn set_token(&self, ui: &mut dyn UserInterface, token: Option<&String>) -> Result<()> {
        let token = match token {
            Some(token) => token.trim().to_string(),
            None => {
                let prompt = Prompt {
                    prompt_type: PromptType::Password,
                    ..Prompt::input("github_token", "GitHub token (empty to clear)")
                };
                ui.prompt(&prompt)?.as_string().trim().to_string()
            }
        };

        let mut config = self.paths.load()?;
        if token.is_empty() {
            config.set_token(None);
            self.paths.save(&config)?;
            ui.success("GitHub token cleared");
        } else {
            config.set_token(Some(token));
            self.paths.save(&config)?;
            ui.success("GitHub token saved successfully");
        }
        Ok(())
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &self.args.command {
            ConfigCommands::Show { json } => self.show(ui, *json)?,
            ConfigCommands::SetToken { token } => self.set_token(ui, token.as_ref())?,
            ConfigCommands::ClearToken => {
                let mut config = self.paths.load()?;
                config.set_token(None);
                self.paths.save(&config)?;
                ui.success("GitHub token cleared");
            }
            ConfigCommands::Path => {
                ui.message(&format!("Config directory: {}", self.paths.root().display()));
                ui.message(&format!(
                    "Config file: {}",
                    self.paths.config_file().display()
                ));
                ui.message(&format!(
                    "Cache directory: {}",
                    self.paths.cache_dir().display()
                ));
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CustomTemplate;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn run(paths: &ConfigPaths, command: ConfigCommands, ui: &mut MockUI) {
        let cmd = ConfigCommand::new(paths, ConfigArgs { command });
        let result = cmd.execute(ui).unwrap();
        assert!(result.success);
    }

    #[test]
    fn show_masks_token() {
        let temp = TempDir::new().unwrap();
        let paths = ConfigPaths::new(temp.path());
        let mut config = paths.load().unwrap();
        config.set_token(Some("ghp_SECRETSECRET_wxyz".into()));
        let mut custom = CustomTemplate::new("api", "https://github.com/acme/api");
        custom.commit = Some("0123456789".into());
        config.add_custom_template(custom).unwrap();
        paths.save(&config).unwrap();

        let mut ui = MockUI::new();
        run(&paths, ConfigCommands::Show { json: false }, &mut ui);

        assert!(ui.has_message("GitHub Token: ghp_...wxyz"));
        assert!(!ui.messages().iter().any(|m| m.contains("SECRET")));
        assert!(ui.has_message("Registries (1):"));
        assert!(ui.has_message("  - official (enabled): https://"));
        assert!(ui.has_message("  - api [0123456]: https://github.com/acme/api"));
    }

    #[test]
    fn show_json_masks_token() {
        let temp = TempDir::new().unwrap();
        let paths = ConfigPaths::new(temp.path());
        let mut config = paths.load().unwrap();
        config.set_token(Some("ghp_SECRETSECRET_wxyz".into()));
        paths.save(&config).unwrap();

        let mut ui = MockUI::new();
        run(&paths, ConfigCommands::Show { json: true }, &mut ui);

        let parsed: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(parsed["github_token"], "ghp_...wxyz");
    }

    #[test]
    fn show_unset_token() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        run(
            &ConfigPaths::new(temp.path()),
            ConfigCommands::Show { json: false },
            &mut ui,
        );
        assert!(ui.has_message("GitHub Token: (not set)"));
    }

    #[test]
    fn set_token_from_argument_then_clear() {
        let temp = TempDir::new().unwrap();
        let paths = ConfigPaths::new(temp.path());

        let mut ui = MockUI::new();
        run(
            &paths,
            ConfigCommands::SetToken {
                token: Some("ghp_abc".into()),
            },
            &mut ui,
        );
        assert!(ui.has_success("GitHub token saved successfully"));
        assert_eq!(paths.load().unwrap().github_token, "ghp_abc");

        let mut ui = MockUI::new();
        run(&paths, ConfigCommands::ClearToken, &mut ui);
        assert!(ui.has_success("GitHub token cleared"));
        assert!(paths.load().unwrap().github_token.is_empty());
    }

    #[test]
    fn set_token_prompts_when_missing() {
        let temp = TempDir::new().unwrap();
        let paths = ConfigPaths::new(temp.path());

        let mut ui = MockUI::new();
        ui.set_prompt_response("github_token", "ghp_prompted");
        run(&paths, ConfigCommands::SetToken { token: None }, &mut ui);

        assert_eq!(ui.prompts_shown(), &["github_token"]);
        assert_eq!(paths.load().unwrap().github_token, "ghp_prompted");
    }

    #[test]
    fn set_empty_token_clears() {
        let temp = TempDir::new().unwrap();
        let paths = ConfigPaths::new(temp.path());
        let mut config = paths.load().unwrap();
        config.set_token(Some("old".into()));
        paths.save(&config).unwrap();

        let mut ui = MockUI::new();
        run(
            &paths,
            ConfigCommands::SetToken {
                token: Some(String::new()),
            },
            &mut ui,
        );

        assert!(ui.has_success("GitHub token cleared"));
        assert!(paths.load().unwrap().github_token.is_empty());
    }

    #[test]
    fn path_lists_locations() {
        let temp = TempDir::new().unwrap();
        let paths = ConfigPaths::new(temp.path());

        let mut ui = MockUI::new();
        run(&paths, ConfigCommands::Path, &mut ui);

        assert!(ui.has_message("config.json"));
        assert!(ui.has_message("Cache directory:"));
    }
}
