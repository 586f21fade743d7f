//! Add-on domain model.

use serde::Serialize;

use crate::domain::AppError;
use crate::impl_validated_id;

/// A validated add-on identifier.
///
/// Guarantees:
/// - Non-empty
/// - Contains only alphanumeric characters, `-`, `_`, or `.`
/// - No path traversal components (/, \\, .., etc.)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AddonSlug(String);

impl_validated_id!(AddonSlug, true, AppError::InvalidAddonSlug);

/// Opaque locator the component runtime uses to find an add-on's backing package.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageRef(String);

impl PackageRef {
    pub fn new(locator: impl Into<String>) -> Self {
        Self(locator.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Priority assigned when a catalog entry does not declare one.
pub const DEFAULT_PRIORITY: i32 = 10;

/// An add-on known to the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddonDescriptor {
    /// Add-on slug (unique identifier).
    pub slug: AddonSlug,
    /// Human-readable label.
    pub display_name: String,
    /// Slugs that must be active for this add-on to work. Order carries no meaning.
    pub dependencies: Vec<AddonSlug>,
    /// Lower values are ordered first when dependencies leave a choice.
    pub priority: i32,
    /// Backing package locator, only interpreted by the runtime.
    pub package_ref: PackageRef,
    /// Short summary of what this add-on provides.
    pub description: String,
}

/// Installation and activation state, read fresh from the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AddonState {
    pub installed: bool,
    pub active: bool,
}

/// Outcome of checking whether an add-on's dependencies are active.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DependencyCheck {
    pub satisfied: bool,
    /// Dependency slugs that are not active, in declaration order.
    pub missing: Vec<String>,
}
