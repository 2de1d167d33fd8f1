//! Registry entries stored in the configuration.

use serde::{Deserialize, Serialize};

/// A remote registry document the catalog pulls templates from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    /// Unique key within the configuration
    pub id: String,

    /// Human-readable name
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// URL of the registry JSON document
    pub url: String,

    /// Disabled registries are skipped when listing
    #[serde(default)]
    pub enabled: bool,

    /// Attach the configured token when fetching
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub requires_auth: bool,
}

impl Registry {
    /// Create an enabled registry without authentication.
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            url: url.into(),
            enabled: true,
            requires_auth: false,
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Mark the registry as requiring authentication.
    pub fn with_auth(mut self, requires_auth: bool) -> Self {
        self.requires_auth = requires_auth;
        self
    }

    /// Name for display, falling back to the id.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }

    /// `enabled` or `disabled`.
    pub fn status_label(&self) -> &'static str {
        if self.enabled {
            "enabled"
        } else {
            "disabled"
        }
    }
}
