use crate::app::orchestrator::BatchOrchestrator;
use crate::app::status_oracle::StatusOracle;
use crate::domain::CyclePolicy;
use crate::ports::{AddonCatalog, Authorizer, ComponentRuntime};

/// Application context holding dependencies for command execution.
pub struct AppContext<C: AddonCatalog, R: ComponentRuntime, A: Authorizer> {
    catalog: C,
    runtime: R,
    authorizer: A,
    cycle_policy: CyclePolicy,
}

impl<C: AddonCatalog, R: ComponentRuntime, A: Authorizer> AppContext<C, R, A> {
    /// Create a new application context.
    pub fn new(catalog: C, runtime: R, authorizer: A) -> Self {
        Self { catalog, runtime, authorizer, cycle_policy: CyclePolicy::default() }
    }

    pub fn with_cycle_policy(mut self, cycle_policy: CyclePolicy) -> Self {
        self.cycle_policy = cycle_policy;
        self
    }

    /// Get a reference to the add-on catalog.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Get a reference to the component runtime.
    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    pub fn cycle_policy(&self) -> CyclePolicy {
        self.cycle_policy
    }

    /// Status queries over this context's catalog and runtime.
    pub fn oracle(&self) -> StatusOracle<'_, C, R> {
        StatusOracle::new(&self.catalog, &self.runtime)
    }

    /// Batch orchestrator over this context's collaborators.
    pub fn orchestrator(&self) -> BatchOrchestrator<'_, C, R, A> {
        BatchOrchestrator::new(&self.catalog, &self.runtime, &self.authorizer)
            .with_cycle_policy(self.cycle_policy)
    }
}
