//! Read-only status queries over the component runtime.

use crate::domain::{AddonState, DependencyCheck};
use crate::ports::{AddonCatalog, ComponentRuntime};

/// Answers "is installed" / "is active" for catalog slugs.
///
/// Nothing is cached: every query goes to the runtime. Unknown slugs are
/// reported as neither installed nor active.
pub struct StatusOracle<'a, C: ?Sized, R: ?Sized> {
    catalog: &'a C,
    runtime: &'a R,
}

impl<'a, C, R> StatusOracle<'a, C, R>
where
    C: AddonCatalog + ?Sized,
    R: ComponentRuntime + ?Sized,
{
    pub fn new(catalog: &'a C, runtime: &'a R) -> Self {
        Self { catalog, runtime }
    }

    pub fn is_installed(&self, slug: &str) -> bool {
        self.catalog
            .get(slug)
            .is_some_and(|addon| self.runtime.is_package_present(&addon.package_ref))
    }

    pub fn is_active(&self, slug: &str) -> bool {
        self.catalog.get(slug).is_some_and(|addon| self.runtime.is_enabled(&addon.package_ref))
    }

    pub fn state(&self, slug: &str) -> AddonState {
        AddonState { installed: self.is_installed(slug), active: self.is_active(slug) }
    }

    /// Which of `slug`'s dependencies are not active right now.
    ///
    /// Dependencies missing from the catalog are always reported.
    pub fn dependency_satisfied(&self, slug: &str) -> DependencyCheck {
        let Some(addon) = self.catalog.get(slug) else {
            return DependencyCheck { satisfied: true, missing: Vec::new() };
        };

        let missing: Vec<String> = addon
            .dependencies
            .iter()
            .filter(|dep| !self.is_active(dep.as_str()))
            .map(|dep| dep.to_string())
            .collect();

        DependencyCheck { satisfied: missing.is_empty(), missing }
    }
}
