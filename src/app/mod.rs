pub mod api;
pub mod cli;
pub mod commands;
mod context;
pub mod orchestrator;
pub mod status_oracle;

pub use context::AppContext;
pub use orchestrator::BatchOrchestrator;
pub use status_oracle::StatusOracle;
