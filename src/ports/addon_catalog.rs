//! Add-on catalog port definition.

use crate::domain::AddonDescriptor;

/// Trait for read-only access to the add-on catalog.
pub trait AddonCatalog {
    /// Get an add-on by slug.
    fn get(&self, slug: &str) -> Option<&AddonDescriptor>;

    /// List all add-ons in catalog order.
    fn list_all(&self) -> Vec<&AddonDescriptor>;

    /// Get all add-on slugs in catalog order.
    fn slugs(&self) -> Vec<&str> {
        self.list_all().into_iter().map(|addon| addon.slug.as_str()).collect()
    }

    /// Slugs of every add-on that declares `slug` as a dependency.
    fn dependents_of(&self, slug: &str) -> Vec<&str> {
        self.list_all()
            .into_iter()
            .filter(|addon| addon.dependencies.iter().any(|dep| dep.as_str() == slug))
            .map(|addon| addon.slug.as_str())
            .collect()
    }

    /// Display name for `slug`, falling back to the slug itself when unknown.
    fn display_name<'a>(&'a self, slug: &'a str) -> &'a str {
        self.get(slug).map(|addon| addon.display_name.as_str()).unwrap_or(slug)
    }
}
