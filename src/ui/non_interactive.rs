//! Non-interactive UI for CI/headless environments.
//!
//! Prompts are answered from `BOILERPLATES_PROMPT_<KEY>` environment
//! variables, then from the prompt's default. A prompt with neither is an
//! error rather than a hang.

use std::collections::HashMap;

use crate::error::{BoilerplateError, Result};

use super::theme::ScaffoldTheme;
use super::{OutputMode, Prompt, PromptResult, PromptType, SpinnerHandle, UserInterface};

/// Prefix of environment variables that answer prompts.
pub const PROMPT_ENV_PREFIX: &str = "BOILERPLATES_PROMPT_";

/// UI implementation for non-interactive mode.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI reading overrides from the environment.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }
}

fn override_key(prompt_key: &str) -> String {
    let normalized: String = prompt_key
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
        .collect();
    format!("{}{}", PROMPT_ENV_PREFIX, normalized)
}

fn parse_bool(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "yes" | "y" | "1")
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let is_confirm = matches!(prompt.prompt_type, PromptType::Confirm);

        let answer = self
            .env_overrides
            .get(&override_key(&prompt.key))
            .or(prompt.default.as_ref());

        match answer {
            Some(value) if is_confirm => Ok(PromptResult::Bool(parse_bool(value))),
            Some(value) => Ok(PromptResult::String(value.clone())),
            None => Err(BoilerplateError::Prompt {
                message: format!(
                    "Cannot prompt for '{}' in non-interactive mode (set {} or pass it as a flag)",
                    prompt.key,
                    override_key(&prompt.key)
                ),
            }),
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("  {}", message);
        }
        Box::new(NoopSpinner { mode: self.mode })
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            println!("{}", ScaffoldTheme::plain().format_hint(hint));
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

struct NoopSpinner {
    mode: OutputMode,
}

impl SpinnerHandle for NoopSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        if self.mode.shows_spinners() {
            println!("{}", ScaffoldTheme::plain().format_success(msg));
        }
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("{}", ScaffoldTheme::plain().format_error(msg));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::PromptOption;

    fn ui_with(pairs: &[(&str, &str)]) -> NonInteractiveUI {
        let overrides = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        NonInteractiveUI::with_overrides(OutputMode::Silent, overrides)
    }

    #[test]
    fn env_override_wins_over_default() {
        let mut ui = ui_with(&[("BOILERPLATES_PROMPT_PACKAGE_NAME", "shop")]);
        let prompt = Prompt::input("package_name", "Package").with_default("myproject");

        let result = ui.prompt(&prompt).unwrap();

        assert_eq!(result.as_string(), "shop");
    }

    #[test]
    fn default_used_without_override() {
        let mut ui = ui_with(&[]);
        let prompt = Prompt::input("package_name", "Package").with_default("myproject");

        assert_eq!(ui.prompt(&prompt).unwrap().as_string(), "myproject");
    }

    #[test]
    fn missing_answer_is_error_naming_variable() {
        let mut ui = ui_with(&[]);
        let prompt = Prompt::input("project-name", "Project");

        let err = ui.prompt(&prompt).unwrap_err();

        assert!(err.to_string().contains("BOILERPLATES_PROMPT_PROJECT_NAME"));
    }

    #[test]
    fn confirm_parses_bool() {
        let mut ui = ui_with(&[("BOILERPLATES_PROMPT_OVERWRITE", "yes")]);
        let prompt = Prompt {
            prompt_type: PromptType::Confirm,
            ..Prompt::input("overwrite", "Overwrite?")
        };

        assert_eq!(ui.prompt(&prompt).unwrap().as_bool(), Some(true));
    }

    #[test]
    fn select_returns_override_value() {
        let mut ui = ui_with(&[("BOILERPLATES_PROMPT_TEMPLATE", "go_cli")]);
        let prompt = Prompt::select(
            "template",
            "Template",
            vec![PromptOption {
                label: "Go".into(),
                value: "go_cli".into(),
            }],
        );

        assert_eq!(ui.prompt(&prompt).unwrap().as_string(), "go_cli");
    }

    #[test]
    fn is_never_interactive() {
        assert!(!ui_with(&[]).is_interactive());
    }
}
