//! Configuration file discovery and loading.
//!
//! Lookup order: an explicit `--config` path, then `COMPONENTDOC_CONFIG`, then
//! `<config dir>/componentdoc-mcp/config.toml` when it exists. With none of
//! those the defaults apply and the built-in catalog is served.

use crate::catalog::Catalog;
use crate::error::{CatalogError, ConfigError};
use serde::Deserialize;
use std::borrow::Cow;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "COMPONENTDOC_CONFIG";

/// Result count used when a request does not set a limit.
pub const DEFAULT_LIMIT: usize = 25;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Catalog file to serve. Relative paths resolve against the config file.
    pub catalog: Option<PathBuf>,
    /// Maximum number of search results when the caller gives no limit
    pub default_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: None,
            default_limit: DEFAULT_LIMIT,
        }
    }
}

impl Config {
    /// Read and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if config.default_limit == 0 {
            return Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                reason: "default_limit must be at least 1".to_string(),
            });
        }

        if let Some(catalog) = config.catalog.take() {
            let catalog = PathBuf::from(expand_tilde(&catalog.to_string_lossy()).as_ref());
            config.catalog = Some(match path.parent() {
                Some(dir) if catalog.is_relative() => dir.join(catalog),
                _ => catalog,
            });
        }

        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Resolve the config from an explicit path, the environment, or the user
    /// config directory, falling back to defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::resolve_with(explicit, std::env::var_os(CONFIG_ENV_VAR), default_config_path())
    }

    pub(crate) fn resolve_with(
        explicit: Option<&Path>,
        env_value: Option<OsString>,
        user_default: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(&expanded(path));
        }

        if let Some(value) = env_value.filter(|v| !v.is_empty()) {
            return Self::load(&expanded(Path::new(&value)));
        }

        match user_default {
            Some(path) if path.is_file() => Self::load(&path),
            _ => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// The configured catalog, or the built-in one when none is set.
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog {
            Some(path) => Catalog::load(path),
            None => Catalog::builtin(),
        }
    }
}

/// `<config dir>/componentdoc-mcp/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("componentdoc-mcp").join("config.toml"))
}

/// Expands tilde (`~`) in a path to the user's home directory.
///
/// - `~/foo` becomes `/home/user/foo`
/// - `~` becomes `/home/user`
/// - Other paths are returned unchanged
pub fn expand_tilde(path: &str) -> Cow<'_, str> {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Cow::Owned(home.join(stripped).display().to_string());
        }
    } else if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return Cow::Owned(home.display().to_string());
    }
    Cow::Borrowed(path)
}

fn expanded(path: &Path) -> PathBuf {
    PathBuf::from(expand_tilde(&path.to_string_lossy()).as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        check!(config.catalog.is_none());
        check!(config.default_limit == DEFAULT_LIMIT);
    }

    #[test]
    fn test_relative_catalog_resolves_against_config_dir() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "catalog = \"components.toml\"\ndefault_limit = 5\n");

        let_assert!(Ok(config) = Config::load(&path));
        check!(config.catalog == Some(dir.path().join("components.toml")));
        check!(config.default_limit == 5);
    }

    #[test]
    fn test_absolute_catalog_kept() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "catalog = \"/srv/docs/components.json\"\n");

        let_assert!(Ok(config) = Config::load(&path));
        check!(config.catalog == Some(PathBuf::from("/srv/docs/components.json")));
        check!(config.default_limit == DEFAULT_LIMIT);
    }

    #[test]
    fn test_zero_limit_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "default_limit = 0\n");
        let_assert!(Err(ConfigError::Invalid { .. }) = Config::load(&path));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "catalgo = \"typo.toml\"\n");
        let_assert!(Err(ConfigError::Parse { .. }) = Config::load(&path));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        let_assert!(Err(ConfigError::Io { .. }) = Config::resolve_with(Some(&missing), None, None));
    }

    #[test]
    fn test_explicit_beats_env() {
        let dir = TempDir::new().unwrap();
        let explicit = write_config(&dir, "default_limit = 3\n");
        let env = dir.path().join("missing-env.toml");

        let_assert!(
            Ok(config) = Config::resolve_with(Some(&explicit), Some(env.into_os_string()), None)
        );
        check!(config.default_limit == 3);
    }

    #[test]
    fn test_env_beats_user_default() {
        let dir = TempDir::new().unwrap();
        let env = write_config(&dir, "default_limit = 7\n");
        let user_default = dir.path().join("missing-user.toml");

        let_assert!(
            Ok(config) =
                Config::resolve_with(None, Some(env.into_os_string()), Some(user_default))
        );
        check!(config.default_limit == 7);
    }

    #[test]
    fn test_missing_user_default_falls_back() {
        let dir = TempDir::new().unwrap();
        let user_default = dir.path().join("config.toml");

        let_assert!(Ok(config) = Config::resolve_with(None, None, Some(user_default)));
        check!(config == Config::default());
    }

    #[test]
    fn test_load_catalog_defaults_to_builtin() {
        let_assert!(Ok(catalog) = Config::default().load_catalog());
        check!(catalog.get("button").is_some());
    }

    #[test]
    fn test_expand_tilde_leaves_plain_paths() {
        check!(expand_tilde("/etc/componentdoc.toml") == "/etc/componentdoc.toml");
        check!(expand_tilde("docs/~/catalog.toml") == "docs/~/catalog.toml");
    }
}
