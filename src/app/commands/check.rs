//! Check command - static validation of the catalog graph.

use serde::Serialize;

use crate::domain::{Catalog, DanglingDependency, DependencyGraph};

/// Problems found in a catalog.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CatalogReport {
    /// Dependency edges pointing at slugs the catalog does not define.
    pub dangling: Vec<DanglingDependency>,
    /// Cycles, each rendered as `a -> b -> a`.
    pub cycles: Vec<String>,
}

impl CatalogReport {
    pub fn is_clean(&self) -> bool {
        self.dangling.is_empty() && self.cycles.is_empty()
    }
}

/// Execute the check command.
pub fn execute(catalog: &Catalog) -> CatalogReport {
    CatalogReport {
        dangling: catalog.dangling_dependencies(),
        cycles: DependencyGraph::find_cycles(catalog),
    }
}
