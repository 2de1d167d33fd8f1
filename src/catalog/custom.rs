//! User-declared templates stored in the configuration.

use serde::{Deserialize, Serialize};

use super::template::{Template, TemplateSource};

/// A template declared directly in the configuration, optionally pinned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomTemplate {
    /// Unique key within the configuration
    pub id: String,

    /// Human-readable name
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Repository URL
    pub repo: String,

    /// Path within the repository
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub branch: String,

    /// `None` means "track latest", `Some` pins the commit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,

    /// Lives in a private repository
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub private: bool,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub category: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl CustomTemplate {
    /// Create a custom template tracking `main`.
    pub fn new(id: impl Into<String>, repo: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            description: String::new(),
            repo: repo.into(),
            path: String::new(),
            branch: "main".to_string(),
            commit: None,
            private: false,
            category: String::new(),
            tags: Vec::new(),
        }
    }

    /// Convert into the unified shape. No I/O.
    pub fn to_template(&self) -> Template {
        Template {
            description: self.description.clone(),
            category: self.category.clone(),
            repo: self.repo.clone(),
            path: self.path.clone(),
            branch: self.branch.clone(),
            commit: self.commit.clone(),
            tags: self.tags.clone(),
            source: TemplateSource::Custom,
            ..Template::new(self.id.clone(), self.name.clone())
        }
    }
}
