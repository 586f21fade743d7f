mod addon_catalog;
mod authorizer;
mod component_runtime;

pub use addon_catalog::AddonCatalog;
pub use authorizer::{AllowAll, Authorizer};
pub use component_runtime::{ComponentRuntime, RuntimeError};
