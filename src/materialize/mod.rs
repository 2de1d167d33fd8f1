//! Template materialization.
//!
//! Copies a template's source tree into a new project directory:
//! - paths are mapped through the template's rename rules ([`rename`])
//! - UTF-8 files have placeholders rendered ([`render`]) and replace rules
//!   applied ([`replace`])
//! - other files are copied byte-for-byte
//! - `template.json` manifests are never copied
//!
//! The walk stops at the first failure. Files already written stay.

pub mod render;
pub mod rename;
pub mod replace;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::catalog::{Template, TemplateSource, MANIFEST_FILE};
use crate::error::{BoilerplateError, Result};
use crate::variables::Variables;

pub use render::render;
pub use rename::Renamer;
pub use replace::{expand_braces, Replacer};

/// What a materialization wrote.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MaterializeReport {
    pub directories: usize,
    pub files: usize,
    /// Source-relative path -> destination-relative path, for renamed entries
    pub renamed: Vec<(PathBuf, PathBuf)>,
    /// Files changed by replace rules
    pub replaced_files: usize,
}

/// Writes templates out with a fixed set of variables.
pub struct Materializer {
    variables: Variables,
}

impl Materializer {
    pub fn new(variables: Variables) -> Self {
        Self { variables }
    }

    /// Copy `source_root` into `dest`, rendering as it goes.
    pub fn materialize(
        &self,
        template: &Template,
        source_root: &Path,
        dest: &Path,
    ) -> Result<MaterializeReport> {
        let renamer = Renamer::new(&template.rename, &self.variables)?;
        let replacer = Replacer::new(&template.replace, &self.variables)?;

        if dest.exists() && !dest.is_dir() {
            return Err(materialize_error(
                dest,
                "destination exists and is not a directory",
            ));
        }
        fs::create_dir_all(dest).map_err(|e| materialize_error(dest, e))?;

        info!(template = %template.id, dest = %dest.display(), "materializing");
        let mut report = MaterializeReport::default();
        // Applied after the walk so read-only directories can still be filled.
        let mut dir_permissions = Vec::new();

        for entry in WalkDir::new(source_root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(source_root).to_path_buf();
                materialize_error(&path, e)
            })?;
            let source = entry.path();
            let relative = source
                .strip_prefix(source_root)
                .map_err(|e| materialize_error(source, e))?;

            if entry.file_type().is_file() && entry.file_name() == MANIFEST_FILE {
                debug!(path = %relative.display(), "skipping manifest");
                continue;
            }

            let (mapped, renamed) = renamer.map(relative);
            if renamed {
                debug!(from = %relative.display(), to = %mapped.display(), "renamed");
                report.renamed.push((relative.to_path_buf(), mapped.clone()));
            }
            let target = dest.join(&mapped);

            if entry.file_type().is_dir() {
                fs::create_dir_all(&target).map_err(|e| materialize_error(&target, e))?;
                let permissions = fs::metadata(source)
                    .map_err(|e| materialize_error(source, e))?
                    .permissions();
                dir_permissions.push((target, permissions));
                report.directories += 1;
            } else if entry.file_type().is_file() {
                let replaced = self.write_file(source, &target, &mapped, &replacer)?;
                copy_permissions(source, &target)?;
                report.files += 1;
                if replaced {
                    report.replaced_files += 1;
                }
            } else {
                debug!(path = %relative.display(), "skipping non-regular entry");
            }
        }

        for (target, permissions) in dir_permissions.into_iter().rev() {
            fs::set_permissions(&target, permissions).map_err(|e| materialize_error(&target, e))?;
        }

        info!(
            files = report.files,
            directories = report.directories,
            "materialized"
        );
        Ok(report)
    }

    /// Write one file; returns whether a replace rule changed it.
    fn write_file(
        &self,
        source: &Path,
        target: &Path,
        mapped: &Path,
        replacer: &Replacer,
    ) -> Result<bool> {
        let bytes = fs::read(source).map_err(|e| materialize_error(source, e))?;

        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                fs::write(target, e.as_bytes()).map_err(|e| materialize_error(target, e))?;
                return Ok(false);
            }
        };

        let rendered = render(&text, &self.variables, &source.display().to_string())?;
        let relative = to_slash(mapped);
        let (content, replaced) = match replacer.apply(&relative, &rendered) {
            Some(changed) => (changed, true),
            None => (rendered, false),
        };

        fs::write(target, content).map_err(|e| materialize_error(target, e))?;
        Ok(replaced)
    }
}

/// Directory holding a template's files.
///
/// Local templates live where their manifest was found. Registry and custom
/// templates are expected as a checked-out copy under `templates_root`, at
/// their repository path or, failing that, a directory named after the id.
pub fn source_dir(template: &Template, templates_root: &Path) -> Result<PathBuf> {
    let candidates = match template.source {
        TemplateSource::Local => vec![PathBuf::from(&template.path)],
        _ if template.path.is_empty() => vec![templates_root.join(&template.id)],
        _ => vec![
            templates_root.join(&template.path),
            templates_root.join(&template.id),
        ],
    };

    candidates
        .iter()
        .find(|dir| dir.is_dir())
        .cloned()
        .ok_or_else(|| BoilerplateError::TemplateSourceMissing {
            id: template.id.clone(),
            path: candidates.last().cloned().unwrap_or_default(),
        })
}

fn copy_permissions(source: &Path, target: &Path) -> Result<()> {
    let permissions = fs::metadata(source)
        .map_err(|e| materialize_error(source, e))?
        .permissions();
    fs::set_permissions(target, permissions).map_err(|e| materialize_error(target, e))
}

fn to_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn materialize_error(path: &Path, error: impl ToString) -> BoilerplateError {
    BoilerplateError::Materialize {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}
