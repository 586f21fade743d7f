//! Immutable add-on registry.

use std::collections::BTreeMap;

use crate::domain::{AddonDescriptor, AppError};
use crate::ports::AddonCatalog;

/// A dependency slug with no descriptor in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DanglingDependency {
    pub addon: String,
    pub dependency: String,
}

/// The fixed set of add-on descriptors known to this process.
///
/// Descriptors keep the order they were supplied in; that order is what
/// `list_all` and `dependents_of` report.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    addons: Vec<AddonDescriptor>,
    index: BTreeMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate slugs.
    ///
    /// Dependencies on unknown slugs are accepted; they can never be satisfied.
    pub fn new(addons: Vec<AddonDescriptor>) -> Result<Self, AppError> {
        let mut index = BTreeMap::new();
        for (position, addon) in addons.iter().enumerate() {
            if index.insert(addon.slug.to_string(), position).is_some() {
                return Err(AppError::DuplicateAddon(addon.slug.to_string()));
            }
        }
        Ok(Self { addons, index })
    }

    pub fn len(&self) -> usize {
        self.addons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addons.is_empty()
    }

    /// Every dependency edge that points outside the catalog.
    pub fn dangling_dependencies(&self) -> Vec<DanglingDependency> {
        self.addons
            .iter()
            .flat_map(|addon| {
                addon.dependencies.iter().filter(|dep| !self.index.contains_key(dep.as_str())).map(
                    |dep| DanglingDependency {
                        addon: addon.slug.to_string(),
                        dependency: dep.to_string(),
                    },
                )
            })
            .collect()
    }
}

impl AddonCatalog for Catalog {
    fn get(&self, slug: &str) -> Option<&AddonDescriptor> {
        self.index.get(slug).map(|&position| &self.addons[position])
    }

    fn list_all(&self) -> Vec<&AddonDescriptor> {
        self.addons.iter().collect()
    }
}
