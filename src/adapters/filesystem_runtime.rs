//! Component runtime backed by a packages directory and a state file.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::PackageRef;
use crate::domain::identifiers::validation::validate_identifier;
use crate::ports::{ComponentRuntime, RuntimeError};

/// Enabled packages, persisted as TOML.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RuntimeState {
    #[serde(default)]
    enabled: BTreeSet<String>,
}

/// A package is installed when `<packages_dir>/<package_ref>` is a directory;
/// it is enabled when listed in the state file.
#[derive(Debug, Clone)]
pub struct FilesystemRuntime {
    packages_dir: PathBuf,
    state_file: PathBuf,
}

impl FilesystemRuntime {
    pub fn new(packages_dir: impl Into<PathBuf>, state_file: impl Into<PathBuf>) -> Self {
        Self { packages_dir: packages_dir.into(), state_file: state_file.into() }
    }

    pub fn packages_dir(&self) -> &Path {
        &self.packages_dir
    }

    pub fn state_file(&self) -> &Path {
        &self.state_file
    }

    /// Package directory, or `None` when the locator would escape `packages_dir`.
    fn package_dir(&self, package: &PackageRef) -> Option<PathBuf> {
        validate_identifier(package.as_str(), true)
            .then(|| self.packages_dir.join(package.as_str()))
    }

    fn read_state(&self) -> Result<RuntimeState, RuntimeError> {
        if !self.state_file.exists() {
            return Ok(RuntimeState::default());
        }
        let content = std::fs::read_to_string(&self.state_file).map_err(|e| {
            RuntimeError::new(format!(
                "failed to read state file {}: {}",
                self.state_file.display(),
                e
            ))
        })?;
        toml::from_str(&content).map_err(|e| {
            RuntimeError::new(format!(
                "malformed state file {}: {}",
                self.state_file.display(),
                e
            ))
        })
    }

    fn write_state(&self, state: &RuntimeState) -> Result<(), RuntimeError> {
        if let Some(parent) = self.state_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                RuntimeError::new(format!("failed to create {}: {}", parent.display(), e))
            })?;
        }
        let content = toml::to_string(state)
            .map_err(|e| RuntimeError::new(format!("failed to encode state: {}", e)))?;
        std::fs::write(&self.state_file, content).map_err(|e| {
            RuntimeError::new(format!(
                "failed to write state file {}: {}",
                self.state_file.display(),
                e
            ))
        })
    }
}

impl ComponentRuntime for FilesystemRuntime {
    fn is_package_present(&self, package: &PackageRef) -> bool {
        self.package_dir(package).is_some_and(|dir| dir.is_dir())
    }

    fn is_enabled(&self, package: &PackageRef) -> bool {
        match self.read_state() {
            Ok(state) => state.enabled.contains(package.as_str()),
            Err(err) => {
                warn!(package = %package, error = %err, "Treating package as disabled");
                false
            }
        }
    }

    fn enable(&self, package: &PackageRef) -> Result<(), RuntimeError> {
        if !self.is_package_present(package) {
            return Err(RuntimeError::new(format!(
                "package '{}' not found in {}",
                package,
                self.packages_dir.display()
            )));
        }
        let mut state = self.read_state()?;
        if state.enabled.insert(package.to_string()) {
            self.write_state(&state)?;
        }
        debug!(package = %package, "Package enabled");
        Ok(())
    }

    fn disable(&self, package: &PackageRef) -> Result<(), RuntimeError> {
        let mut state = self.read_state()?;
        if state.enabled.remove(package.as_str()) {
            self.write_state(&state)?;
        }
        debug!(package = %package, "Package disabled");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{TempDir, tempdir};

    fn runtime_in(temp: &TempDir) -> FilesystemRuntime {
        FilesystemRuntime::new(temp.path().join("addons"), temp.path().join("state/enabled.toml"))
    }

    fn install(runtime: &FilesystemRuntime, package: &str) {
        std::fs::create_dir_all(runtime.packages_dir().join(package)).unwrap();
    }

    #[test]
    fn package_presence_follows_directory() {
        let temp = tempdir().unwrap();
        let runtime = runtime_in(&temp);
        let package = PackageRef::new("petcare-clients");

        assert!(!runtime.is_package_present(&package));
        install(&runtime, "petcare-clients");
        assert!(runtime.is_package_present(&package));
    }

    #[test]
    fn traversal_locator_is_never_present() {
        let temp = tempdir().unwrap();
        let runtime = runtime_in(&temp);
        std::fs::create_dir_all(temp.path().join("outside")).unwrap();

        assert!(!runtime.is_package_present(&PackageRef::new("../outside")));
        assert!(!runtime.is_package_present(&PackageRef::new("..")));
    }

    #[test]
    fn enable_and_disable_persist_state() {
        let temp = tempdir().unwrap();
        let runtime = runtime_in(&temp);
        let package = PackageRef::new("petcare-pets");
        install(&runtime, "petcare-pets");

        runtime.enable(&package).unwrap();
        assert!(runtime.is_enabled(&package));
        assert!(runtime_in(&temp).is_enabled(&package));

        runtime.disable(&package).unwrap();
        assert!(!runtime.is_enabled(&package));
    }

    #[test]
    fn enable_fails_for_absent_package() {
        let temp = tempdir().unwrap();
        let runtime = runtime_in(&temp);

        let err = runtime.enable(&PackageRef::new("petcare-ghost")).unwrap_err();

        assert!(err.message().contains("petcare-ghost"));
        assert!(!runtime.state_file().exists());
    }

    #[test]
    fn disable_of_disabled_package_is_noop() {
        let temp = tempdir().unwrap();
        let runtime = runtime_in(&temp);

        runtime.disable(&PackageRef::new("petcare-pets")).unwrap();

        assert!(!runtime.state_file().exists());
    }

    #[test]
    fn malformed_state_reads_as_disabled_and_blocks_mutation() {
        let temp = tempdir().unwrap();
        let runtime = runtime_in(&temp);
        install(&runtime, "petcare-pets");
        std::fs::create_dir_all(temp.path().join("state")).unwrap();
        std::fs::write(runtime.state_file(), "enabled = 42").unwrap();
        let package = PackageRef::new("petcare-pets");

        assert!(!runtime.is_enabled(&package));
        let err = runtime.enable(&package).unwrap_err();
        assert!(err.message().starts_with("malformed state file"));
    }
}
