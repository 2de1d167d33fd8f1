//! Configuration directory layout and persistence.
//!
//! Layout:
//! - `<root>/config.json` - the configuration record
//! - `<root>/cache/` - created eagerly, reserved for template mirrors
//!
//! The root is `$BOILERPLATES_HOME` when set, otherwise `~/.boilerplates`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{BoilerplateError, Result};

use super::schema::Configuration;

/// Environment variable that overrides the configuration root.
pub const HOME_ENV: &str = "BOILERPLATES_HOME";

const CONFIG_FILE: &str = "config.json";
const CACHE_DIR: &str = "cache";

/// Paths of the configuration directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    root: PathBuf,
}

impl ConfigPaths {
    /// Use an explicit root directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the root from an override, the environment, or the home directory.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(root) = explicit {
            return Ok(Self::new(root));
        }
        if let Some(root) = std::env::var_os(HOME_ENV) {
            return Ok(Self::new(root));
        }
        let home = dirs::home_dir().ok_or_else(|| {
            BoilerplateError::Other(anyhow::anyhow!("failed to get user home directory"))
        })?;
        Ok(Self::new(home.join(".boilerplates")))
    }

    /// The configuration root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The configuration file.
    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    /// The cache directory.
    pub fn cache_dir(&self) -> PathBuf {
        self.root.join(CACHE_DIR)
    }

    /// Load the configuration, or the default one if no file exists.
    ///
    /// Creates the root and cache directories as a side effect.
    pub fn load(&self) -> Result<Configuration> {
        fs::create_dir_all(self.cache_dir())?;

        let path = self.config_file();
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Configuration::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_json::from_str(&content).map_err(|e| BoilerplateError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })
    }

    /// Write the configuration, replacing the file in one rename.
    pub fn save(&self, config: &Configuration) -> Result<()> {
        fs::create_dir_all(&self.root)?;

        let json =
            serde_json::to_string_pretty(config).map_err(|e| BoilerplateError::Other(e.into()))?;
        let path = self.config_file();
        let staging = path.with_extension("json.tmp");

        fs::write(&staging, json)?;
        fs::rename(&staging, &path)?;
        debug!(path = %path.display(), "saved config");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CustomTemplate, Registry};
    use tempfile::TempDir;

    #[test]
    fn paths_under_root() {
        let paths = ConfigPaths::new("/tmp/bp");
        assert_eq!(paths.config_file(), PathBuf::from("/tmp/bp/config.json"));
        assert_eq!(paths.cache_dir(), PathBuf::from("/tmp/bp/cache"));
    }

    #[test]
    fn explicit_root_wins() {
        let paths = ConfigPaths::discover(Some(Path::new("/explicit"))).unwrap();
        assert_eq!(paths.root(), Path::new("/explicit"));
    }

    #[test]
    fn load_missing_file_returns_default_and_creates_cache() {
        let temp = TempDir::new().unwrap();
        let paths = ConfigPaths::new(temp.path().join("home"));

        let config = paths.load().unwrap();

        assert_eq!(config, Configuration::default());
        assert!(paths.cache_dir().is_dir());
        assert!(!paths.config_file().exists());
    }

    #[test]
    fn save_then_load_round_trips() {
        let temp = TempDir::new().unwrap();
        let paths = ConfigPaths::new(temp.path());

        let mut config = Configuration::default();
        config.github_token = "ghp_token".into();
        config
            .add_registry(Registry::new("team", "https://example.com/r.json").with_auth(true))
            .unwrap();
        let mut custom = CustomTemplate::new("api", "https://github.com/acme/api");
        custom.commit = Some("abc123".into());
        config.add_custom_template(custom).unwrap();

        paths.save(&config).unwrap();
        let loaded = paths.load().unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn save_leaves_no_staging_file() {
        let temp = TempDir::new().unwrap();
        let paths = ConfigPaths::new(temp.path());

        paths.save(&Configuration::default()).unwrap();

        assert!(paths.config_file().exists());
        assert!(!temp.path().join("config.json.tmp").exists());
    }

    #[test]
    fn save_writes_pretty_json() {
        let temp = TempDir::new().unwrap();
        let paths = ConfigPaths::new(temp.path());

        paths.save(&Configuration::default()).unwrap();
        let content = fs::read_to_string(paths.config_file()).unwrap();

        assert!(content.contains("\n  \"registries\""));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let paths = ConfigPaths::new(temp.path());
        fs::write(paths.config_file(), "{ not json").unwrap();

        let err = paths.load().unwrap_err();

        assert!(matches!(err, BoilerplateError::ConfigParse { .. }));
        assert!(err.to_string().contains("config.json"));
    }
}
