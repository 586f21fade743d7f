//! addonctl: resolve add-on dependency order and activate add-ons in batches.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::{AppContext, BatchOrchestrator, StatusOracle};
pub use domain::{
    AddonDescriptor, AddonSlug, AddonState, AppError, BatchFailure, BatchResult, Capability,
    Catalog, CyclePolicy, DependencyCheck, DependencyGraph, PackageRef,
};
pub use ports::{AddonCatalog, AllowAll, Authorizer, ComponentRuntime, RuntimeError};

/// Order `requested` and its transitive dependencies, dependencies first.
///
/// Seeds are taken by ascending priority; unknown slugs are carried through.
/// Never fails, even on cyclic catalogs.
pub fn resolve_order<C: AddonCatalog + ?Sized>(requested: &[String], catalog: &C) -> Vec<String> {
    DependencyGraph::resolve_order(requested, catalog)
}
