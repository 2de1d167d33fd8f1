//! Rename rules: exact file or directory name -> rendered name.

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

use super::render::render;
use crate::error::{BoilerplateError, Result};
use crate::variables::Variables;

/// Rename rules with their patterns already rendered.
#[derive(Debug, Default)]
pub struct Renamer {
    names: BTreeMap<String, String>,
}

impl Renamer {
    /// Render every pattern up front so a bad pattern fails before any file is written.
    pub fn new(rules: &BTreeMap<String, String>, vars: &Variables) -> Result<Self> {
        let mut names = BTreeMap::new();
        for (from, pattern) in rules {
            let origin = format!("rename pattern '{}'", pattern);
            let to = render(pattern, vars, &origin)?;
            if to.is_empty() || to == "." || to == ".." || to.contains(['/', '\\']) {
                return Err(BoilerplateError::TemplateRender {
                    origin,
                    message: format!("'{}' is not a valid file name", to),
                });
            }
            names.insert(from.clone(), to);
        }
        Ok(Self { names })
    }

    /// Map a source-relative path, renaming every matching component.
    ///
    /// Returns the mapped path and whether its final component was renamed.
    pub fn map(&self, relative: &Path) -> (PathBuf, bool) {
        let mut mapped = PathBuf::new();
        let mut changed = false;
        for component in relative.components() {
            match component {
                Component::Normal(name) => match name.to_str().and_then(|n| self.names.get(n)) {
                    Some(to) => {
                        mapped.push(to);
                        changed = true;
                    }
                    None => {
                        mapped.push(name);
                        changed = false;
                    }
                },
                other => {
                    mapped.push(other.as_os_str());
                    changed = false;
                }
            }
        }
        (mapped, changed)
    }
}
