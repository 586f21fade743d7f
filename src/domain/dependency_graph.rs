//! Dependency graph domain logic.

use std::collections::BTreeMap;

use crate::domain::{AppError, CyclePolicy};
use crate::ports::AddonCatalog;

/// Domain logic for ordering add-ons so dependencies come first.
pub struct DependencyGraph;

impl DependencyGraph {
    /// Resolve the processing order for `requested`.
    ///
    /// Seeds are visited by ascending priority (unknown slugs last) and each
    /// seed is expanded depth-first, emitting dependencies before dependents.
    /// The result is the transitive closure of the request; slugs not in the
    /// catalog are carried through as leaves.
    ///
    /// Never fails. A cycle is cut at the edge that closes it, so the order
    /// may place an add-on before one of its dependencies.
    pub fn resolve_order<C: AddonCatalog + ?Sized>(
        requested: &[String],
        catalog: &C,
    ) -> Vec<String> {
        let mut traversal = Traversal::new(catalog);
        for slug in Self::seed_order(requested, catalog) {
            traversal.visit(slug);
        }
        traversal.order
    }

    /// Same ordering as [`Self::resolve_order`], but a cycle reachable from the
    /// request is an error.
    pub fn resolve_order_strict<C: AddonCatalog + ?Sized>(
        requested: &[String],
        catalog: &C,
    ) -> Result<Vec<String>, AppError> {
        let mut traversal = Traversal::new(catalog);
        for slug in Self::seed_order(requested, catalog) {
            traversal.visit(slug);
        }

        match traversal.cycles.into_iter().next() {
            Some(cycle) => Err(AppError::CircularDependency(cycle)),
            None => Ok(traversal.order),
        }
    }

    /// Resolve with the given cycle policy.
    pub fn resolve<C: AddonCatalog + ?Sized>(
        requested: &[String],
        catalog: &C,
        policy: CyclePolicy,
    ) -> Result<Vec<String>, AppError> {
        match policy {
            CyclePolicy::Tolerant => Ok(Self::resolve_order(requested, catalog)),
            CyclePolicy::Strict => Self::resolve_order_strict(requested, catalog),
        }
    }

    /// Every cycle in the catalog, rendered as `a -> b -> a`.
    pub fn find_cycles<C: AddonCatalog + ?Sized>(catalog: &C) -> Vec<String> {
        let mut traversal = Traversal::new(catalog);
        for slug in catalog.slugs() {
            traversal.visit(slug);
        }
        traversal.cycles
    }

    fn seed_order<'a, C: AddonCatalog + ?Sized>(
        requested: &'a [String],
        catalog: &C,
    ) -> Vec<&'a str> {
        let mut seeds: Vec<&str> = requested.iter().map(String::as_str).collect();
        // Stable: equal priorities keep request order.
        seeds.sort_by_key(|slug| {
            catalog.get(slug).map_or(i64::MAX, |addon| i64::from(addon.priority))
        });
        seeds
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    InProgress,
    Done,
}

/// Depth-first post-order walk shared by every resolver entry point.
struct Traversal<'a, C: ?Sized> {
    catalog: &'a C,
    marks: BTreeMap<&'a str, Mark>,
    path: Vec<&'a str>,
    order: Vec<String>,
    cycles: Vec<String>,
}

impl<'a, C: AddonCatalog + ?Sized> Traversal<'a, C> {
    fn new(catalog: &'a C) -> Self {
        Self {
            catalog,
            marks: BTreeMap::new(),
            path: Vec::new(),
            order: Vec::new(),
            cycles: Vec::new(),
        }
    }

    fn visit(&mut self, slug: &'a str) {
        match self.marks.get(slug).copied() {
            Some(Mark::Done) => return,
            Some(Mark::InProgress) => {
                let start = self.path.iter().position(|s| *s == slug).unwrap_or(0);
                let mut cycle: Vec<&str> = self.path[start..].to_vec();
                cycle.push(slug);
                self.cycles.push(cycle.join(" -> "));
                return;
            }
            None => {}
        }

        self.marks.insert(slug, Mark::InProgress);
        self.path.push(slug);

        let catalog = self.catalog;
        if let Some(addon) = catalog.get(slug) {
            for dep in &addon.dependencies {
                self.visit(dep.as_str());
            }
        }

        self.path.pop();
        self.marks.insert(slug, Mark::Done);
        self.order.push(slug.to_string());
    }
}
