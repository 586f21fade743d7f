use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;

use crate::domain::PackageRef;
use crate::ports::{ComponentRuntime, RuntimeError};

/// In-memory runtime recording every call it receives.
#[derive(Default)]
pub struct FakeRuntime {
    pub present: Mutex<BTreeSet<String>>,
    pub enabled: Mutex<BTreeSet<String>>,
    pub failures: Mutex<BTreeMap<String, String>>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark packages as present on disk.
    pub fn install(&self, packages: &[&str]) -> &Self {
        self.present.lock().unwrap().extend(packages.iter().map(|p| p.to_string()));
        self
    }

    /// Mark packages as present and enabled.
    pub fn activate(&self, packages: &[&str]) -> &Self {
        self.install(packages);
        self.enabled.lock().unwrap().extend(packages.iter().map(|p| p.to_string()));
        self
    }

    /// Make `enable`/`disable` of `package` fail with `message`.
    pub fn fail_on(&self, package: &str, message: &str) -> &Self {
        self.failures.lock().unwrap().insert(package.to_string(), message.to_string());
        self
    }

    pub fn is_on(&self, package: &str) -> bool {
        self.enabled.lock().unwrap().contains(package)
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Mutating calls only, e.g. `enable:pets`.
    pub fn mutations(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| c.starts_with("enable:") || c.starts_with("disable:"))
            .collect()
    }

    fn record(&self, call: &str, package: &PackageRef) {
        self.calls.lock().unwrap().push(format!("{}:{}", call, package));
    }

    fn failure_for(&self, package: &PackageRef) -> Option<RuntimeError> {
        self.failures.lock().unwrap().get(package.as_str()).map(RuntimeError::new)
    }
}

impl ComponentRuntime for FakeRuntime {
    fn is_package_present(&self, package: &PackageRef) -> bool {
        self.record("present", package);
        self.present.lock().unwrap().contains(package.as_str())
    }

    fn is_enabled(&self, package: &PackageRef) -> bool {
        self.record("enabled", package);
        self.enabled.lock().unwrap().contains(package.as_str())
    }

    fn enable(&self, package: &PackageRef) -> Result<(), RuntimeError> {
        self.record("enable", package);
        if let Some(err) = self.failure_for(package) {
            return Err(err);
        }
        self.enabled.lock().unwrap().insert(package.to_string());
        Ok(())
    }

    fn disable(&self, package: &PackageRef) -> Result<(), RuntimeError> {
        self.record("disable", package);
        if let Some(err) = self.failure_for(package) {
            return Err(err);
        }
        self.enabled.lock().unwrap().remove(package.as_str());
        Ok(())
    }
}
