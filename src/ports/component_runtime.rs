//! Component runtime port definition.

use thiserror::Error;

use crate::domain::PackageRef;

/// Failure reported by the runtime while enabling or disabling a package.
///
/// The message is surfaced verbatim in batch results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RuntimeError {
    message: String,
}

impl RuntimeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Port to whatever hosts add-on packages.
///
/// Queries must not fail: an unreadable state is reported as `false`.
pub trait ComponentRuntime {
    /// Whether the backing package is present.
    fn is_package_present(&self, package: &PackageRef) -> bool;

    /// Whether the backing package is currently enabled.
    fn is_enabled(&self, package: &PackageRef) -> bool;

    /// Enable the backing package.
    fn enable(&self, package: &PackageRef) -> Result<(), RuntimeError>;

    /// Disable the backing package.
    fn disable(&self, package: &PackageRef) -> Result<(), RuntimeError>;
}
