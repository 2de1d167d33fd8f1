//! The unified template shape.
//!
//! Registry entries, custom templates, and local `template.json` manifests
//! are all converted into a [`Template`] before they reach the catalog or
//! the materializer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Name of the manifest file that marks a local template directory.
pub const MANIFEST_FILE: &str = "template.json";

/// A template as used everywhere after normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Template id (first match wins when the catalog holds duplicates)
    pub id: String,

    /// Human-readable name
    pub name: String,

    /// Short description
    #[serde(default)]
    pub description: String,

    /// Category used for grouping (e.g., "python", "react")
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub category: String,

    /// Extra values asked for when the template is instantiated
    #[serde(default)]
    pub prompts: BTreeMap<String, Prompt>,

    /// Exact file or directory name -> rename pattern
    #[serde(default)]
    pub rename: BTreeMap<String, String>,

    /// Glob-scoped literal replacements
    #[serde(default)]
    pub replace: Vec<ReplaceRule>,

    /// Repository the template lives in
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub repo: String,

    /// Path within the repository, or the directory of a local manifest
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,

    /// Branch to track
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub branch: String,

    /// Pinned commit; `None` tracks the latest revision
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,

    /// Free-form tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Where this template came from (never read from a manifest)
    #[serde(default, skip_deserializing)]
    pub source: TemplateSource,
}

impl Template {
    /// Create a template with only the identifying fields set.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category: String::new(),
            prompts: BTreeMap::new(),
            rename: BTreeMap::new(),
            replace: Vec::new(),
            repo: String::new(),
            path: String::new(),
            branch: String::new(),
            commit: None,
            tags: Vec::new(),
            source: TemplateSource::default(),
        }
    }

    /// Display form of the pin: `latest` or the short commit hash.
    pub fn pin_label(&self) -> String {
        pin_label(self.commit.as_deref())
    }

    /// Category for display, `other` when unset.
    pub fn display_category(&self) -> &str {
        if self.category.is_empty() {
            "other"
        } else {
            &self.category
        }
    }
}

/// Format a commit pin for display.
pub fn pin_label(commit: Option<&str>) -> String {
    match commit {
        Some(sha) => sha.chars().take(7).collect(),
        None => "latest".to_string(),
    }
}

/// Origin of a catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TemplateSource {
    /// Fetched from the registry with this id.
    Registry { registry_id: String },
    /// Declared in the configuration's custom templates.
    Custom,
    /// Discovered from a `template.json` on disk.
    #[default]
    Local,
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Registry { registry_id } => write!(f, "registry:{}", registry_id),
            Self::Custom => write!(f, "custom"),
            Self::Local => write!(f, "local"),
        }
    }
}

/// A value to ask for when instantiating a template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Prompt {
    /// Question shown to the user
    pub label: String,

    /// Value used when nothing is entered
    pub default: String,

    /// Post-processing applied to the answer (see [`crate::variables::ValueFormat`])
    pub format: String,
}

/// Literal replacements applied to files matching a glob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplaceRule {
    /// Glob over destination-relative paths; `{a,b}` alternation is allowed
    #[serde(default = "default_replace_glob")]
    pub glob: String,

    /// Literal -> replacement (both may contain placeholders)
    #[serde(default)]
    pub values: BTreeMap<String, String>,
}

fn default_replace_glob() -> String {
    "**/*".to_string()
}
