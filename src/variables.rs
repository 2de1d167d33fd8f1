//! Variable bindings used when rendering a template.
//!
//! Every materialization binds `ProjectName` and `AuthorName`. The
//! snake-case aliases `project_name`, `package_name`, and `author_name` are
//! bound too, since many manifests use them as prompt keys. Template prompts
//! and `--var KEY=VALUE` flags add to the set.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::debug;

use crate::catalog::Prompt;
use crate::error::{BoilerplateError, Result};

static INVALID_IDENT_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9_]").unwrap());
static LEADING_NON_IDENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^a-zA-Z_]+").unwrap());
static REPEATED_UNDERSCORES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_+").unwrap());

/// Name bound to the project name.
pub const PROJECT_NAME: &str = "ProjectName";
/// Name bound to the author name.
pub const AUTHOR_NAME: &str = "AuthorName";

/// An ordered name -> value map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Variables {
    values: BTreeMap<String, String>,
}

impl Variables {
    /// Bind the project and author names with their aliases.
    pub fn new(project_name: &str, author_name: &str) -> Self {
        let mut vars = Self::default();
        vars.insert(PROJECT_NAME, project_name);
        vars.insert(AUTHOR_NAME, author_name);
        vars.insert("project_name", project_name);
        vars.insert("package_name", ValueFormat::SnakeCase.apply(project_name));
        vars.insert("author_name", author_name);
        vars
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Bind a value for every prompt not already bound.
    ///
    /// `ask` returns the user's answer, or `None` to take the prompt's
    /// default. The prompt's format is applied to whatever value results,
    /// including values that were already bound.
    pub fn resolve_prompts<F>(
        &mut self,
        prompts: &BTreeMap<String, Prompt>,
        mut ask: F,
    ) -> Result<()>
    where
        F: FnMut(&str, &Prompt) -> Result<Option<String>>,
    {
        for (name, prompt) in prompts {
            let raw = match self.get(name) {
                Some(bound) => bound.to_string(),
                None => ask(name, prompt)?
                    .filter(|answer| !answer.is_empty())
                    .unwrap_or_else(|| prompt.default.clone()),
            };
            let value = ValueFormat::parse(&prompt.format).apply(&raw);
            debug!(name = %name, value = %value, "bound prompt");
            self.insert(name.clone(), value);
        }
        Ok(())
    }
}

/// Parse a `KEY=VALUE` flag.
pub fn parse_assignment(input: &str) -> Result<(String, String)> {
    match input.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(BoilerplateError::Other(anyhow::anyhow!(
            "invalid variable '{}': expected KEY=VALUE",
            input
        ))),
    }
}

/// Post-processing applied to a prompt answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    Text,
    SnakeCase,
    KebabCase,
    Lowercase,
    Uppercase,
}

impl ValueFormat {
    /// Parse a manifest `format` string. Unknown formats are treated as text.
    pub fn parse(format: &str) -> Self {
        match format {
            "" | "text" => Self::Text,
            "snake_case" => Self::SnakeCase,
            "kebab-case" | "kebab_case" => Self::KebabCase,
            "lowercase" => Self::Lowercase,
            "uppercase" => Self::Uppercase,
            other => {
                debug!(format = other, "unknown prompt format, using text");
                Self::Text
            }
        }
    }

    pub fn apply(self, value: &str) -> String {
        match self {
            Self::Text => value.to_string(),
            Self::SnakeCase => snake_case(value),
            Self::KebabCase => snake_case(value).replace('_', "-"),
            Self::Lowercase => value.to_lowercase(),
            Self::Uppercase => value.to_uppercase(),
        }
    }
}

/// Turn a free-form name into a valid identifier: `My-App 2` -> `my_app_2`.
fn snake_case(value: &str) -> String {
    let replaced = INVALID_IDENT_CHARS.replace_all(value, "_");
    let trimmed = LEADING_NON_IDENT.replace(&replaced, "");
    let collapsed = REPEATED_UNDERSCORES.replace_all(&trimmed, "_");
    collapsed.to_lowercase().trim_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt(default: &str, format: &str) -> Prompt {
        Prompt {
            label: "Question".into(),
            default: default.into(),
            format: format.into(),
        }
    }

    #[test]
    fn new_binds_names_and_aliases() {
        let vars = Variables::new("My App", "Ada");
        assert_eq!(vars.get(PROJECT_NAME), Some("My App"));
        assert_eq!(vars.get(AUTHOR_NAME), Some("Ada"));
        assert_eq!(vars.get("project_name"), Some("My App"));
        assert_eq!(vars.get("package_name"), Some("my_app"));
        assert_eq!(vars.get("author_name"), Some("Ada"));
    }

    #[test]
    fn snake_case_sanitizes() {
        assert_eq!(ValueFormat::SnakeCase.apply("My-App 2"), "my_app_2");
        assert_eq!(ValueFormat::SnakeCase.apply("123abc"), "abc");
        assert_eq!(ValueFormat::SnakeCase.apply("__a  b__"), "a_b");
        assert_eq!(ValueFormat::SnakeCase.apply("already_ok"), "already_ok");
    }

    #[test]
    fn other_formats() {
        assert_eq!(ValueFormat::KebabCase.apply("My App"), "my-app");
        assert_eq!(ValueFormat::Lowercase.apply("My App"), "my app");
        assert_eq!(ValueFormat::Uppercase.apply("My App"), "MY APP");
        assert_eq!(ValueFormat::Text.apply("My App"), "My App");
    }

    #[test]
    fn unknown_format_is_text() {
        assert_eq!(ValueFormat::parse("camelCase"), ValueFormat::Text);
        assert_eq!(ValueFormat::parse(""), ValueFormat::Text);
    }

    #[test]
    fn resolve_prompts_uses_answers_and_defaults() {
        let mut vars = Variables::new("app", "me");
        let mut prompts = BTreeMap::new();
        prompts.insert("answered".to_string(), prompt("x", "uppercase"));
        prompts.insert("defaulted".to_string(), prompt("fallback", ""));

        vars.resolve_prompts(&prompts, |name, _| {
            Ok((name == "answered").then(|| "yes".to_string()))
        })
        .unwrap();

        assert_eq!(vars.get("answered"), Some("YES"));
        assert_eq!(vars.get("defaulted"), Some("fallback"));
    }

    #[test]
    fn resolve_prompts_does_not_ask_for_bound_names() {
        let mut vars = Variables::new("My App", "me");
        let mut prompts = BTreeMap::new();
        prompts.insert("project_name".to_string(), prompt("", "snake_case"));

        vars.resolve_prompts(&prompts, |_, _| panic!("should not ask"))
            .unwrap();

        assert_eq!(vars.get("project_name"), Some("my_app"));
        assert_eq!(vars.get(PROJECT_NAME), Some("My App"));
    }

    #[test]
    fn empty_answer_takes_default() {
        let mut vars = Variables::default();
        let mut prompts = BTreeMap::new();
        prompts.insert("k".to_string(), prompt("dflt", ""));

        vars.resolve_prompts(&prompts, |_, _| Ok(Some(String::new())))
            .unwrap();

        assert_eq!(vars.get("k"), Some("dflt"));
    }

    #[test]
    fn parse_assignment_splits_on_first_equals() {
        assert_eq!(
            parse_assignment("url=a=b").unwrap(),
            ("url".to_string(), "a=b".to_string())
        );
        assert_eq!(
            parse_assignment("empty=").unwrap(),
            ("empty".to_string(), String::new())
        );
    }

    #[test]
    fn parse_assignment_rejects_missing_key() {
        assert!(parse_assignment("novalue").is_err());
        assert!(parse_assignment("=v").is_err());
    }
}
