//! Configuration record.
//!
//! The record is loaded once per command, mutated in memory, and written
//! back once. It is passed explicitly; there is no global instance.

use serde::{Deserialize, Serialize};

use crate::catalog::{CustomTemplate, Registry};

/// Id of the registry present in a fresh configuration.
pub const OFFICIAL_REGISTRY_ID: &str = "official";

/// URL of the registry present in a fresh configuration.
pub const OFFICIAL_REGISTRY_URL: &str =
    "https://raw.githubusercontent.com/jgarzarebel/boilerplates/main/templates-registry.json";

/// The persisted configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Token attached to registries that require auth
    #[serde(default)]
    pub github_token: String,

    /// Registries in fetch order
    #[serde(default = "default_registries")]
    pub registries: Vec<Registry>,

    /// User-declared templates in insertion order
    #[serde(default)]
    pub custom_templates: Vec<CustomTemplate>,

    /// Legacy: decoded for compatibility, never used
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub private_repos: Vec<String>,

    /// Legacy: decoded for compatibility, never used
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub public_repo_url: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            github_token: String::new(),
            registries: default_registries(),
            custom_templates: Vec::new(),
            private_repos: Vec::new(),
            public_repo_url: String::new(),
        }
    }
}

fn default_registries() -> Vec<Registry> {
    vec![Registry::new(OFFICIAL_REGISTRY_ID, OFFICIAL_REGISTRY_URL).with_name("Official Templates")]
}

impl Configuration {
    /// An empty configuration: no registries, no custom templates.
    pub fn empty() -> Self {
        Self {
            registries: Vec::new(),
            ..Self::default()
        }
    }

    /// The token, if one is set.
    pub fn token(&self) -> Option<&str> {
        if self.github_token.is_empty() {
            None
        } else {
            Some(&self.github_token)
        }
    }

    /// The token in a form safe to print.
    pub fn masked_token(&self) -> String {
        mask_token(&self.github_token)
    }
}

/// Mask a secret for display.
///
/// Tokens longer than 8 characters keep their first and last four
/// characters; shorter ones are fully hidden.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    match chars.len() {
        0 => "(not set)".to_string(),
        n if n > 8 => {
            let head: String = chars[..4].iter().collect();
            let tail: String = chars[n - 4..].iter().collect();
            format!("{}...{}", head, tail)
        }
        _ => "***".to_string(),
    }
}
