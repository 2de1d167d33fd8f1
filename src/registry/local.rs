//! Local template discovery.
//!
//! Any directory under the templates root that holds a `template.json` is a
//! template. Manifests that cannot be read or decoded are skipped with a
//! warning; only a root that cannot be walked at all is an error.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::catalog::{Template, TemplateSource, MANIFEST_FILE};
use crate::error::{BoilerplateError, Result};

/// Walk `root` recursively and decode every `template.json` found.
///
/// Results are in file-name order of the walk, so the same tree always
/// yields the same list.
pub fn discover_local_templates(root: &Path) -> Result<Vec<Template>> {
    let mut templates = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(BoilerplateError::DiscoveryFailed {
                    path: root.to_path_buf(),
                    message: e.to_string(),
                });
            }
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };

        if !entry.file_type().is_file() || entry.file_name() != MANIFEST_FILE {
            continue;
        }

        match load_manifest(entry.path()) {
            Ok(template) => {
                debug!(id = %template.id, path = %template.path, "found local template");
                templates.push(template);
            }
            Err(message) => {
                warn!(
                    path = %entry.path().display(),
                    error = %message,
                    "skipping template manifest"
                );
            }
        }
    }

    Ok(templates)
}

fn load_manifest(manifest: &Path) -> std::result::Result<Template, String> {
    let content = fs::read_to_string(manifest).map_err(|e| e.to_string())?;
    let mut template: Template = serde_json::from_str(&content).map_err(|e| e.to_string())?;

    let dir = manifest.parent().unwrap_or_else(|| Path::new("."));
    template.path = dir.to_string_lossy().into_owned();
    template.source = TemplateSource::Local;
    Ok(template)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_manifest(root: &Path, dir: &str, json: &str) {
        let dir = root.join(dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(MANIFEST_FILE), json).unwrap();
    }

    #[test]
    fn discovers_nested_manifests() {
        let temp = TempDir::new().unwrap();
        write_manifest(
            temp.path(),
            "go/cli",
            r#"{"id": "go_cli", "name": "Go CLI", "rename": {"main.go.tmpl": "{{ProjectName}}.go"}}"#,
        );
        write_manifest(temp.path(), "python/api", r#"{"id": "py_api", "name": "API"}"#);

        let templates = discover_local_templates(temp.path()).unwrap();

        let ids: Vec<_> = templates.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["go_cli", "py_api"]);
        assert_eq!(templates[0].rename["main.go.tmpl"], "{{ProjectName}}.go");
        assert_eq!(templates[0].source, TemplateSource::Local);
    }

    #[test]
    fn path_is_manifest_directory() {
        let temp = TempDir::new().unwrap();
        write_manifest(temp.path(), "go/cli", r#"{"id": "go_cli", "name": "Go CLI"}"#);

        let templates = discover_local_templates(temp.path()).unwrap();

        assert_eq!(
            Path::new(&templates[0].path),
            temp.path().join("go").join("cli")
        );
    }

    #[test]
    fn manifest_path_field_is_overwritten() {
        let temp = TempDir::new().unwrap();
        write_manifest(
            temp.path(),
            "t",
            r#"{"id": "t", "name": "T", "path": "/somewhere/else"}"#,
        );

        let templates = discover_local_templates(temp.path()).unwrap();

        assert_eq!(Path::new(&templates[0].path), temp.path().join("t"));
    }

    #[test]
    fn malformed_manifest_is_skipped() {
        let temp = TempDir::new().unwrap();
        write_manifest(temp.path(), "bad", "{ not json");
        write_manifest(temp.path(), "good", r#"{"id": "good", "name": "Good"}"#);

        let templates = discover_local_templates(temp.path()).unwrap();

        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].id, "good");
    }

    #[test]
    fn other_json_files_are_ignored() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), r#"{"id": "nope"}"#).unwrap();

        let templates = discover_local_templates(temp.path()).unwrap();

        assert!(templates.is_empty());
    }

    #[test]
    fn empty_root_yields_nothing() {
        let temp = TempDir::new().unwrap();
        assert!(discover_local_templates(temp.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_root_is_discovery_error() {
        let temp = TempDir::new().unwrap();
        let err = discover_local_templates(&temp.path().join("absent")).unwrap_err();
        assert!(matches!(err, BoilerplateError::DiscoveryFailed { .. }));
    }
}
