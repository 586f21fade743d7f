//! Batch activation and deactivation.

use std::collections::BTreeSet;

use tracing::{debug, info, warn};

use crate::app::status_oracle::StatusOracle;
use crate::domain::{
    AddonDescriptor, AppError, BatchFailure, BatchResult, Capability, CyclePolicy, DependencyGraph,
};
use crate::ports::{AddonCatalog, Authorizer, ComponentRuntime};

/// Outcome of processing one add-on in a batch.
enum ItemOutcome {
    Changed,
    Unchanged,
}

/// Drives activate/deactivate batches over a resolved order.
///
/// Batches are best-effort: a failing add-on is recorded and skipped, and the
/// remaining add-ons are still processed. Only a missing capability stops a
/// batch before it starts.
pub struct BatchOrchestrator<'a, C: ?Sized, R: ?Sized, A: ?Sized> {
    catalog: &'a C,
    runtime: &'a R,
    authorizer: &'a A,
    cycle_policy: CyclePolicy,
}

impl<'a, C, R, A> BatchOrchestrator<'a, C, R, A>
where
    C: AddonCatalog + ?Sized,
    R: ComponentRuntime + ?Sized,
    A: Authorizer + ?Sized,
{
    pub fn new(catalog: &'a C, runtime: &'a R, authorizer: &'a A) -> Self {
        Self { catalog, runtime, authorizer, cycle_policy: CyclePolicy::default() }
    }

    pub fn with_cycle_policy(mut self, cycle_policy: CyclePolicy) -> Self {
        self.cycle_policy = cycle_policy;
        self
    }

    /// Order in which `requested` (and everything it depends on) is processed.
    pub fn resolve_order(&self, requested: &[String]) -> Result<Vec<String>, AppError> {
        DependencyGraph::resolve(requested, self.catalog, self.cycle_policy)
    }

    /// Activate `requested` and its transitive dependencies, dependencies first.
    pub fn activate(&self, requested: &[String]) -> BatchResult {
        let order = match self.authorize_and_resolve(Capability::Activate, requested) {
            Ok(order) => order,
            Err(rejected) => return rejected,
        };
        info!(requested = ?requested, order = ?order, "Activating add-ons");

        let oracle = StatusOracle::new(self.catalog, self.runtime);
        let mut result = BatchResult::new();
        for slug in &order {
            match self.activate_one(slug, &oracle) {
                Ok(ItemOutcome::Changed) => {
                    info!(addon = %slug, "Activated");
                    result.record_affected(slug);
                }
                Ok(ItemOutcome::Unchanged) => {
                    debug!(addon = %slug, "Already active");
                    result.record_affected(slug);
                }
                Err(failure) => {
                    warn!(addon = %slug, error = %failure, "Activation skipped");
                    result.record_failure(&failure);
                }
            }
        }
        result
    }

    /// Deactivate `requested` and its transitive dependencies, dependents first.
    ///
    /// An add-on still needed by an active dependent outside the request is left alone.
    pub fn deactivate(&self, requested: &[String]) -> BatchResult {
        let mut order = match self.authorize_and_resolve(Capability::Deactivate, requested) {
            Ok(order) => order,
            Err(rejected) => return rejected,
        };
        order.reverse();
        info!(requested = ?requested, order = ?order, "Deactivating add-ons");

        let requested_set: BTreeSet<&str> = requested.iter().map(String::as_str).collect();
        let oracle = StatusOracle::new(self.catalog, self.runtime);
        let mut result = BatchResult::new();
        for slug in &order {
            match self.deactivate_one(slug, &requested_set, &oracle) {
                Ok(ItemOutcome::Changed) => {
                    info!(addon = %slug, "Deactivated");
                    result.record_affected(slug);
                }
                Ok(ItemOutcome::Unchanged) => {
                    debug!(addon = %slug, "Already inactive");
                    result.record_affected(slug);
                }
                Err(failure) => {
                    warn!(addon = %slug, error = %failure, "Deactivation skipped");
                    result.record_failure(&failure);
                }
            }
        }
        result
    }

    fn authorize_and_resolve(
        &self,
        capability: Capability,
        requested: &[String],
    ) -> Result<Vec<String>, BatchResult> {
        if !self.authorizer.can(capability) {
            warn!(capability = %capability, "Batch rejected: capability not granted");
            return Err(BatchResult::rejected(&BatchFailure::Unauthorized {
                operation: capability,
            }));
        }

        self.resolve_order(requested).map_err(|err| {
            warn!(error = %err, "Batch rejected: order could not be resolved");
            BatchResult::rejected(&BatchFailure::Unresolvable { reason: err.to_string() })
        })
    }

    fn activate_one(
        &self,
        slug: &str,
        oracle: &StatusOracle<'_, C, R>,
    ) -> Result<ItemOutcome, BatchFailure> {
        let addon = self.known(slug)?;

        // Dependencies earlier in the order are already processed, so anything
        // still inactive here either failed or lies outside the catalog.
        let check = oracle.dependency_satisfied(slug);
        if !check.satisfied {
            return Err(BatchFailure::MissingDependencies {
                addon: addon.display_name.clone(),
                missing: self.display_names(&check.missing),
            });
        }

        if !oracle.is_installed(slug) {
            return Err(BatchFailure::NotInstalled { addon: addon.display_name.clone() });
        }

        if oracle.is_active(slug) {
            return Ok(ItemOutcome::Unchanged);
        }

        self.runtime.enable(&addon.package_ref).map_err(|err| BatchFailure::Runtime {
            addon: addon.display_name.clone(),
            message: err.message().to_string(),
        })?;
        Ok(ItemOutcome::Changed)
    }

    fn deactivate_one(
        &self,
        slug: &str,
        requested: &BTreeSet<&str>,
        oracle: &StatusOracle<'_, C, R>,
    ) -> Result<ItemOutcome, BatchFailure> {
        let blocking: Vec<String> = self
            .catalog
            .dependents_of(slug)
            .into_iter()
            .filter(|dependent| !requested.contains(dependent) && oracle.is_active(dependent))
            .map(|dependent| self.catalog.display_name(dependent).to_string())
            .collect();
        if !blocking.is_empty() {
            return Err(BatchFailure::BlockingDependents {
                addon: self.catalog.display_name(slug).to_string(),
                dependents: blocking,
            });
        }

        // Unknown slugs are never installed, so they land here as well.
        if !oracle.is_installed(slug) || !oracle.is_active(slug) {
            return Ok(ItemOutcome::Unchanged);
        }

        let addon = self.known(slug)?;
        self.runtime.disable(&addon.package_ref).map_err(|err| BatchFailure::Runtime {
            addon: addon.display_name.clone(),
            message: err.message().to_string(),
        })?;
        Ok(ItemOutcome::Changed)
    }

    fn known(&self, slug: &str) -> Result<&'a AddonDescriptor, BatchFailure> {
        self.catalog
            .get(slug)
            .ok_or_else(|| BatchFailure::UnknownAddon { slug: slug.to_string() })
    }

    fn display_names(&self, slugs: &[String]) -> Vec<String> {
        slugs.iter().map(|slug| self.catalog.display_name(slug).to_string()).collect()
    }
}
