//! addonctl configuration domain models.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{AppError, Capability};

/// Configuration loaded from `addonctl.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Filesystem runtime configuration.
    #[serde(default)]
    pub runtime: RuntimeConfig,
    /// Capabilities granted to the operator.
    #[serde(default)]
    pub authorization: AuthorizationConfig,
    /// Resolver behavior.
    #[serde(default)]
    pub resolver: ResolverConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.runtime.validate()?;
        Ok(())
    }

    /// Make every relative path relative to `base` (the config file's directory).
    pub fn anchor_paths(&mut self, base: &Path) {
        if let Some(path) = self.catalog.path.as_mut() {
            anchor(path, base);
        }
        anchor(&mut self.runtime.packages_dir, base);
        anchor(&mut self.runtime.state_file, base);
    }
}

fn anchor(path: &mut PathBuf, base: &Path) {
    if path.is_relative() {
        *path = base.join(&*path);
    }
}

/// Where the add-on catalog comes from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Catalog file (`.toml`, `.yml` or `.yaml`). The embedded catalog is used when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Filesystem runtime configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuntimeConfig {
    /// Directory holding one subdirectory per installed package.
    #[serde(default = "default_packages_dir")]
    pub packages_dir: PathBuf,
    /// File recording which packages are enabled.
    #[serde(default = "default_state_file")]
    pub state_file: PathBuf,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self { packages_dir: default_packages_dir(), state_file: default_state_file() }
    }
}

impl RuntimeConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.packages_dir.as_os_str().is_empty() {
            return Err(AppError::config_error("runtime.packages_dir must not be empty"));
        }
        if self.state_file.as_os_str().is_empty() {
            return Err(AppError::config_error("runtime.state_file must not be empty"));
        }
        if self.state_file.is_dir() {
            return Err(AppError::config_error(format!(
                "runtime.state_file points at a directory: {}",
                self.state_file.display()
            )));
        }
        Ok(())
    }
}

fn default_packages_dir() -> PathBuf {
    PathBuf::from("addons")
}

fn default_state_file() -> PathBuf {
    PathBuf::from("addons-state.toml")
}

/// Capabilities granted to whoever runs addonctl.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthorizationConfig {
    #[serde(default = "default_capabilities")]
    pub capabilities: Vec<Capability>,
}

impl Default for AuthorizationConfig {
    fn default() -> Self {
        Self { capabilities: default_capabilities() }
    }
}

fn default_capabilities() -> Vec<Capability> {
    Capability::ALL.to_vec()
}

/// Resolver configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolverConfig {
    #[serde(default)]
    pub cycle_policy: CyclePolicy,
}

/// How the resolver treats dependency cycles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CyclePolicy {
    /// Cut the cycle and keep going.
    #[default]
    Tolerant,
    /// Fail resolution with a circular dependency error.
    Strict,
}
