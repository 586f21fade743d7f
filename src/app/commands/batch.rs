//! Activate and deactivate commands.

use crate::app::AppContext;
use crate::domain::BatchResult;
use crate::ports::{AddonCatalog, Authorizer, ComponentRuntime};

/// Activate the requested add-ons and everything they depend on.
pub fn activate<C, R, A>(ctx: &AppContext<C, R, A>, requested: &[String]) -> BatchResult
where
    C: AddonCatalog,
    R: ComponentRuntime,
    A: Authorizer,
{
    ctx.orchestrator().activate(requested)
}

/// Deactivate the requested add-ons, dependents before dependencies.
pub fn deactivate<C, R, A>(ctx: &AppContext<C, R, A>, requested: &[String]) -> BatchResult
where
    C: AddonCatalog,
    R: ComponentRuntime,
    A: Authorizer,
{
    ctx.orchestrator().deactivate(requested)
}
