pub mod addon;
pub mod batch;
pub mod catalog;
pub mod configuration;
pub mod dependency_graph;
pub mod error;
pub mod identifiers;

pub use addon::{
    AddonDescriptor, AddonSlug, AddonState, DEFAULT_PRIORITY, DependencyCheck, PackageRef,
};
pub use batch::{BatchFailure, BatchResult, Capability};
pub use catalog::{Catalog, DanglingDependency};
pub use configuration::{AppConfig, CyclePolicy};
pub use dependency_graph::DependencyGraph;
pub use error::AppError;
