//! Shared testing harness for `addonctl` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Clinic catalog used by most CLI tests.
pub const CLINIC_CATALOG: &str = r#"
[[addon]]
slug = "clients"
name = "Clients"
priority = 1

[[addon]]
slug = "pets"
name = "Pets"
priority = 2
dependencies = ["clients"]

[[addon]]
slug = "services"
name = "Services"
priority = 3

[[addon]]
slug = "appointments"
name = "Appointments"
priority = 5
dependencies = ["clients", "pets", "services"]

[[addon]]
slug = "reports"
name = "Reports"
priority = 12
dependencies = ["appointments", "billing"]
"#;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with `addonctl.toml` and the clinic catalog.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(work_dir.join("addons")).expect("Failed to create packages directory");

        let ctx = Self { root, work_dir };
        ctx.write_catalog(CLINIC_CATALOG);
        ctx.write_config("");
        ctx
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `addonctl` binary within the workspace.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("addonctl").expect("Failed to locate addonctl binary");
        cmd.current_dir(&self.work_dir).env_remove("ADDONCTL_LOG");
        cmd
    }

    /// Write `addonctl.toml`, pointing it at `catalog.toml` plus `extra` settings.
    pub fn write_config(&self, extra: &str) {
        let content = format!("[catalog]\npath = \"catalog.toml\"\n\n{}", extra);
        fs::write(self.work_dir.join("addonctl.toml"), content).expect("Failed to write config");
    }

    pub fn write_catalog(&self, content: &str) {
        fs::write(self.work_dir.join("catalog.toml"), content).expect("Failed to write catalog");
    }

    /// Create package directories so the add-ons count as installed.
    pub fn install(&self, packages: &[&str]) {
        for package in packages {
            fs::create_dir_all(self.work_dir.join("addons").join(package))
                .expect("Failed to create package directory");
        }
    }

    /// Mark packages as enabled in the runtime state file.
    pub fn enable(&self, packages: &[&str]) {
        self.install(packages);
        let mut enabled = self.enabled();
        enabled.extend(packages.iter().map(|p| p.to_string()));
        enabled.sort();
        enabled.dedup();
        let list = enabled.iter().map(|p| format!("\"{}\"", p)).collect::<Vec<_>>().join(", ");
        fs::write(self.state_file(), format!("enabled = [{}]\n", list))
            .expect("Failed to write state file");
    }

    pub fn state_file(&self) -> PathBuf {
        self.work_dir.join("addons-state.toml")
    }

    /// Packages currently listed as enabled.
    pub fn enabled(&self) -> Vec<String> {
        let Ok(content) = fs::read_to_string(self.state_file()) else {
            return Vec::new();
        };
        let value: toml::Value = toml::from_str(&content).expect("State file should be valid TOML");
        value
            .get("enabled")
            .and_then(|v| v.as_array())
            .map(|items| items.iter().filter_map(|v| v.as_str().map(str::to_string)).collect())
            .unwrap_or_default()
    }
}
