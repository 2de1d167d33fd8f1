//! Wire shapes of a fetched registry document.
//!
//! A [`TemplateRegistry`] is never persisted; its entries are converted into
//! [`Template`]s for the catalog or into [`CustomTemplate`]s by `import`.

use serde::{Deserialize, Serialize};

use super::custom::CustomTemplate;
use super::template::{Template, TemplateSource};

/// A whole registry document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateRegistry {
    #[serde(default)]
    pub version: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Repository used by entries that do not name their own
    #[serde(default)]
    pub default_repo: String,

    #[serde(default)]
    pub templates: Vec<RegistryTemplate>,
}

impl TemplateRegistry {
    /// Look up an entry by id.
    pub fn get(&self, id: &str) -> Option<&RegistryTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }
}

/// One entry of a registry document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryTemplate {
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub category: String,

    /// `None` (or `null`) means the registry's `default_repo`
    #[serde(default)]
    pub repo: Option<String>,

    #[serde(default)]
    pub path: String,

    #[serde(default)]
    pub branch: String,

    #[serde(default)]
    pub commit: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl RegistryTemplate {
    /// The entry's own repo, or `default_repo` when it names none.
    pub fn effective_repo<'a>(&'a self, default_repo: &'a str) -> &'a str {
        self.repo.as_deref().unwrap_or(default_repo)
    }

    /// Convert into the unified shape, resolving the repo.
    pub fn into_template(self, registry_id: &str, default_repo: &str) -> Template {
        let repo = self.effective_repo(default_repo).to_string();
        Template {
            description: self.description,
            category: self.category,
            repo,
            path: self.path,
            branch: self.branch,
            commit: self.commit,
            tags: self.tags,
            source: TemplateSource::Registry {
                registry_id: registry_id.to_string(),
            },
            ..Template::new(self.id, self.name)
        }
    }

    /// Copy this entry into a configuration-owned custom template.
    pub fn to_custom_template(&self, default_repo: &str, private: bool) -> CustomTemplate {
        CustomTemplate {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            repo: self.effective_repo(default_repo).to_string(),
            path: self.path.clone(),
            branch: self.branch.clone(),
            commit: self.commit.clone(),
            private,
            category: self.category.clone(),
            tags: self.tags.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"{
        "version": "1.0",
        "name": "Official Templates",
        "description": "Curated boilerplates",
        "default_repo": "https://example.com/tpl",
        "templates": [
            {"id": "react_spa", "name": "React SPA", "description": "", "category": "react",
             "repo": null, "path": "templates/react/react_spa", "branch": "main", "commit": null, "tags": ["vite"]},
            {"id": "wp_theme", "name": "WP Theme", "description": "", "category": "php",
             "repo": "https://example.com/wp", "path": "theme", "branch": "main", "commit": "deadbeef", "tags": []}
        ]
    }"#;

    #[test]
    fn parse_registry_document() {
        let registry: TemplateRegistry = serde_json::from_str(DOCUMENT).unwrap();
        assert_eq!(registry.name, "Official Templates");
        assert_eq!(registry.templates.len(), 2);
        assert_eq!(registry.templates[0].repo, None);
        assert_eq!(registry.templates[1].commit.as_deref(), Some("deadbeef"));
    }

    #[test]
    fn missing_repo_uses_default() {
        let registry: TemplateRegistry = serde_json::from_str(DOCUMENT).unwrap();
        let entry = registry.get("react_spa").unwrap();
        assert_eq!(
            entry.effective_repo(&registry.default_repo),
            "https://example.com/tpl"
        );
    }

    #[test]
    fn own_repo_overrides_default() {
        let registry: TemplateRegistry = serde_json::from_str(DOCUMENT).unwrap();
        let entry = registry.get("wp_theme").unwrap();
        assert_eq!(
            entry.effective_repo(&registry.default_repo),
            "https://example.com/wp"
        );
    }

    #[test]
    fn into_template_records_registry() {
        let registry: TemplateRegistry = serde_json::from_str(DOCUMENT).unwrap();
        let entry = registry.templates[0].clone();
        let template = entry.into_template("official", &registry.default_repo);

        assert_eq!(template.id, "react_spa");
        assert_eq!(template.repo, "https://example.com/tpl");
        assert_eq!(template.path, "templates/react/react_spa");
        assert_eq!(
            template.source,
            TemplateSource::Registry {
                registry_id: "official".into()
            }
        );
    }

    #[test]
    fn to_custom_template_keeps_pin_and_privacy() {
        let registry: TemplateRegistry = serde_json::from_str(DOCUMENT).unwrap();
        let custom = registry.templates[1].to_custom_template(&registry.default_repo, true);

        assert_eq!(custom.repo, "https://example.com/wp");
        assert_eq!(custom.commit.as_deref(), Some("deadbeef"));
        assert!(custom.private);
    }

    #[test]
    fn entries_tolerate_missing_optional_fields() {
        let registry: TemplateRegistry =
            serde_json::from_str(r#"{"templates": [{"id": "bare"}]}"#).unwrap();
        assert_eq!(registry.templates[0].effective_repo("fallback"), "fallback");
    }
}
