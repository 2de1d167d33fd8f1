//! Error types for boilerplate operations.
//!
//! This module defines [`BoilerplateError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Registry and discovery failures are hard errors here; callers that
//!   assemble the whole catalog downgrade them to warnings
//! - Catalog integrity errors (duplicate or missing ids) are always hard errors
//! - Use `anyhow::Error` (via `BoilerplateError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for boilerplate operations.
#[derive(Debug, Error)]
pub enum BoilerplateError {
    /// Failed to parse the configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// An entry with the same id already exists.
    #[error("{kind} with ID '{id}' already exists")]
    DuplicateId { kind: &'static str, id: String },

    /// No entry with the given id exists.
    #[error("{kind} with ID '{id}' not found")]
    NotFound { kind: &'static str, id: String },

    /// Referenced template is not in the catalog.
    #[error("Template with ID '{id}' not found")]
    UnknownTemplate { id: String },

    /// The registry could not be reached.
    #[error("Failed to fetch registry from {url}: {message}")]
    RegistryFetch { url: String, message: String },

    /// The registry answered with a non-success status.
    #[error("Failed to fetch registry from {url}, status code: {status}")]
    RegistryStatus { url: String, status: u16 },

    /// The registry document is not valid JSON of the expected shape.
    #[error("Failed to decode registry from {url}: {message}")]
    RegistryDecode { url: String, message: String },

    /// The local templates directory could not be walked.
    #[error("Failed to walk local templates directory {path}: {message}")]
    DiscoveryFailed { path: PathBuf, message: String },

    /// Placeholder syntax error in a file or rename pattern.
    #[error("Failed to render {origin}: {message}")]
    TemplateRender { origin: String, message: String },

    /// I/O failure while writing the new project.
    #[error("Failed to materialize {path}: {message}")]
    Materialize { path: PathBuf, message: String },

    /// The template's files are not present on disk.
    #[error("Template '{id}' has no local files at {path}")]
    TemplateSourceMissing { id: String, path: PathBuf },

    /// An interactive prompt could not be answered.
    #[error("Prompt failed: {message}")]
    Prompt { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for boilerplate operations.
pub type Result<T> = std::result::Result<T, BoilerplateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_id_displays_kind_and_id() {
        let err = BoilerplateError::DuplicateId {
            kind: "registry",
            id: "official".into(),
        };
        assert_eq!(err.to_string(), "registry with ID 'official' already exists");
    }

    #[test]
    fn not_found_displays_kind_and_id() {
        let err = BoilerplateError::NotFound {
            kind: "template",
            id: "flask".into(),
        };
        assert_eq!(err.to_string(), "template with ID 'flask' not found");
    }

    #[test]
    fn registry_status_displays_code() {
        let err = BoilerplateError::RegistryStatus {
            url: "https://example.com/r.json".into(),
            status: 404,
        };
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("https://example.com/r.json"));
    }

    #[test]
    fn template_render_displays_source() {
        let err = BoilerplateError::TemplateRender {
            origin: "src/main.rs".into(),
            message: "unclosed placeholder on line 3".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("src/main.rs"));
        assert!(msg.contains("line 3"));
    }

    #[test]
    fn materialize_displays_path() {
        let err = BoilerplateError::Materialize {
            path: PathBuf::from("/out/app/README.md"),
            message: "permission denied".into(),
        };
        assert!(err.to_string().contains("/out/app/README.md"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: BoilerplateError = io_err.into();
        assert!(matches!(err, BoilerplateError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(BoilerplateError::UnknownTemplate { id: "nope".into() })
        }
        assert!(returns_error().is_err());
    }
}
