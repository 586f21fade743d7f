//! List command - catalog entries with their current state.

use serde::Serialize;

use crate::app::AppContext;
use crate::ports::{AddonCatalog, Authorizer, ComponentRuntime};

/// Summary information for an add-on.
#[derive(Debug, Clone, Serialize)]
pub struct AddonSummary {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub priority: i32,
    pub dependencies: Vec<String>,
    pub installed: bool,
    pub active: bool,
}

/// Execute the list command.
///
/// Returns every catalog entry in catalog order.
pub fn execute<C, R, A>(ctx: &AppContext<C, R, A>) -> Vec<AddonSummary>
where
    C: AddonCatalog,
    R: ComponentRuntime,
    A: Authorizer,
{
    let oracle = ctx.oracle();

    ctx.catalog()
        .list_all()
        .into_iter()
        .map(|addon| {
            let state = oracle.state(&addon.slug);
            AddonSummary {
                slug: addon.slug.to_string(),
                name: addon.display_name.clone(),
                description: addon.description.clone(),
                priority: addon.priority,
                dependencies: addon.dependencies.iter().map(|d| d.to_string()).collect(),
                installed: state.installed,
                active: state.active,
            }
        })
        .collect()
}
