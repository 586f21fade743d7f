//! Order command - preview the processing order for a request.

use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::{AddonCatalog, Authorizer, ComponentRuntime};

/// Execute the order command.
///
/// Returns the order an activation batch would use. Deactivation processes
/// the same list reversed.
pub fn execute<C, R, A>(
    ctx: &AppContext<C, R, A>,
    requested: &[String],
) -> Result<Vec<String>, AppError>
where
    C: AddonCatalog,
    R: ComponentRuntime,
    A: Authorizer,
{
    ctx.orchestrator().resolve_order(requested)
}
