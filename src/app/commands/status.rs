//! Status command - state and dependency check for one add-on.

use serde::Serialize;

use crate::app::AppContext;
use crate::domain::{AddonState, AppError, DependencyCheck};
use crate::ports::{AddonCatalog, Authorizer, ComponentRuntime};

/// Detailed state for a single add-on.
#[derive(Debug, Clone, Serialize)]
pub struct AddonStatus {
    pub slug: String,
    pub name: String,
    pub state: AddonState,
    pub dependencies: DependencyCheck,
    /// Dependents that are currently active and would block deactivation.
    pub active_dependents: Vec<String>,
}

/// Execute the status command.
pub fn execute<C, R, A>(ctx: &AppContext<C, R, A>, slug: &str) -> Result<AddonStatus, AppError>
where
    C: AddonCatalog,
    R: ComponentRuntime,
    A: Authorizer,
{
    let catalog = ctx.catalog();
    let addon = catalog.get(slug).ok_or_else(|| AppError::AddonNotFound {
        slug: slug.to_string(),
        available: catalog.slugs().join(", "),
    })?;

    let oracle = ctx.oracle();
    let active_dependents = catalog
        .dependents_of(slug)
        .into_iter()
        .filter(|dependent| oracle.is_active(dependent))
        .map(str::to_string)
        .collect();

    Ok(AddonStatus {
        slug: addon.slug.to_string(),
        name: addon.display_name.clone(),
        state: oracle.state(slug),
        dependencies: oracle.dependency_satisfied(slug),
        active_dependents,
    })
}
