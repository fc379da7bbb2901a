//! Configuration for the scaffolder
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `SCAFFOLD_` prefix, `__` for nesting)
//! 2. `<project>/resource-scaffold.toml`
//! 3. `~/.config/resource-scaffold/config.toml` (user config, XDG)
//! 4. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # resource-scaffold.toml
//! [paths]
//! controllers = "app/Http/Controllers"
//! pages = "resources/js/Pages"
//!
//! [namespaces]
//! controllers = "App\\Http\\Controllers"
//!
//! [stubs]
//! published = ["stubs/laravel-resource-scaffold", "stubs/inertia-scaffold"]
//!
//! [defaults]
//! stack = "inertia-react"
//! pages = "Index,Create,Edit,Show"
//! ```

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, ScaffoldError};

/// Project-relative base directories for generated files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    /// Controller classes
    pub controllers: PathBuf,
    /// Model classes
    pub models: PathBuf,
    /// Migrations
    pub migrations: PathBuf,
    /// Inertia pages
    pub pages: PathBuf,
    /// Blade views
    pub views: PathBuf,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            controllers: PathBuf::from("app/Http/Controllers"),
            models: PathBuf::from("app/Models"),
            migrations: PathBuf::from("database/migrations"),
            pages: PathBuf::from("resources/js/Pages"),
            views: PathBuf::from("resources/views"),
        }
    }
}

/// PHP namespaces of generated classes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamespaceSettings {
    /// Base namespace for controllers
    pub controllers: String,
    /// Namespace for models
    pub models: String,
}

impl Default for NamespaceSettings {
    fn default() -> Self {
        Self {
            controllers: "App\\Http\\Controllers".to_string(),
            models: "App\\Models".to_string(),
        }
    }
}

/// Stub lookup settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StubSettings {
    /// Published stub directories, project-relative, highest precedence first
    ///
    /// The bundled defaults are always consulted last.
    pub published: Vec<PathBuf>,
}

impl StubSettings {
    /// Directory that `stubs publish` writes to by default
    pub const PUBLISH_DIR: &'static str = "stubs/laravel-resource-scaffold";

    /// Older publish locations that are still honoured, in precedence order
    pub const LEGACY_DIRS: [&'static str; 2] =
        ["stubs/inertia-scaffold", "stubs/inertia-page-generator"];
}

impl Default for StubSettings {
    fn default() -> Self {
        let mut published = vec![PathBuf::from(Self::PUBLISH_DIR)];
        published.extend(Self::LEGACY_DIRS.iter().map(PathBuf::from));
        Self { published }
    }
}

/// Default option values, parsed at the command-line boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultSettings {
    /// Default `--stack`
    pub stack: String,
    /// Default `--pages`
    pub pages: String,
}

impl Default for DefaultSettings {
    fn default() -> Self {
        Self {
            stack: "inertia-vue".to_string(),
            pages: "Index,Create".to_string(),
        }
    }
}

/// Complete scaffolder configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Output directories
    pub paths: PathSettings,
    /// PHP namespaces
    pub namespaces: NamespaceSettings,
    /// Stub lookup
    pub stubs: StubSettings,
    /// Option defaults
    pub defaults: DefaultSettings,
}

impl ScaffoldConfig {
    /// Name of the per-project configuration file
    pub const PROJECT_FILE: &'static str = "resource-scaffold.toml";

    /// Load configuration for a project
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or parsed, or
    /// if a value has the wrong type.
    pub fn load_for_project(project_root: &Path) -> Result<Self> {
        let mut figment = Figment::new().merge(Toml::string(&defaults_toml()?));

        if let Some(user_config) = Self::user_config_path() {
            if user_config.exists() {
                tracing::debug!(path = %user_config.display(), "loading user config");
                figment = figment.merge(Toml::file(&user_config));
            }
        }

        let project_config = project_root.join(Self::PROJECT_FILE);
        if project_config.exists() {
            tracing::debug!(path = %project_config.display(), "loading project config");
            figment = figment.merge(Toml::file(&project_config));
        }

        figment = figment.merge(Env::prefixed("SCAFFOLD_").split("__").lowercase(true));

        figment.extract().map_err(config_error)
    }

    /// Load configuration from a specific file (plus environment overrides)
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be parsed or a value has the wrong
    /// type.
    pub fn load_from(path: &Path) -> Result<Self> {
        Figment::new()
            .merge(Toml::string(&defaults_toml()?))
            .merge(Toml::file(path))
            .merge(Env::prefixed("SCAFFOLD_").split("__").lowercase(true))
            .extract()
            .map_err(config_error)
    }

    /// User-level configuration file, if a config directory exists
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("resource-scaffold").join("config.toml"))
    }
}

fn defaults_toml() -> Result<String> {
    toml::to_string(&ScaffoldConfig::default())
        .map_err(|e| ScaffoldError::Config(e.to_string()))
}

fn config_error(error: figment::Error) -> ScaffoldError {
    ScaffoldError::Config(error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScaffoldConfig::default();
        assert_eq!(config.paths.controllers, PathBuf::from("app/Http/Controllers"));
        assert_eq!(config.paths.pages, PathBuf::from("resources/js/Pages"));
        assert_eq!(config.namespaces.controllers, "App\\Http\\Controllers");
        assert_eq!(config.defaults.stack, "inertia-vue");
    }

    #[test]
    fn test_stub_precedence_defaults() {
        let stubs = StubSettings::default();
        assert_eq!(
            stubs.published,
            vec![
                PathBuf::from("stubs/laravel-resource-scaffold"),
                PathBuf::from("stubs/inertia-scaffold"),
                PathBuf::from("stubs/inertia-page-generator"),
            ]
        );
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[paths]\npages = \"resources/ts/Pages\"\n\n[defaults]\nstack = \"react\"\n",
        )
        .unwrap();

        let config = ScaffoldConfig::load_from(&path).unwrap();
        assert_eq!(config.paths.pages, PathBuf::from("resources/ts/Pages"));
        assert_eq!(config.paths.models, PathBuf::from("app/Models"));
        assert_eq!(config.defaults.stack, "react");
        assert_eq!(config.defaults.pages, "Index,Create");
    }

    #[test]
    fn test_load_for_project_without_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = ScaffoldConfig::load_for_project(dir.path()).unwrap();
        assert_eq!(config.paths, PathSettings::default());
    }

    #[test]
    fn test_invalid_project_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(ScaffoldConfig::PROJECT_FILE),
            "[stubs]\npublished = 3\n",
        )
        .unwrap();

        assert!(ScaffoldConfig::load_for_project(dir.path()).is_err());
    }
}
