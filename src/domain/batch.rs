//! Batch operation results and per-add-on failures.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Permission gating a whole batch operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    Activate,
    Deactivate,
}

impl Capability {
    pub const ALL: [Capability; 2] = [Capability::Activate, Capability::Deactivate];

    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Activate => "activate",
            Capability::Deactivate => "deactivate",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a single add-on (or the whole batch) was not processed.
///
/// The `Display` form is the message reported in [`BatchResult::errors`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchFailure {
    #[error("You do not have permission to {operation} add-ons")]
    Unauthorized { operation: Capability },

    #[error("Cannot determine processing order: {reason}")]
    Unresolvable { reason: String },

    #[error("Unknown add-on '{slug}'")]
    UnknownAddon { slug: String },

    #[error("Cannot activate {addon}: missing dependencies: {}", .missing.join(", "))]
    MissingDependencies { addon: String, missing: Vec<String> },

    #[error("{addon} is not installed")]
    NotInstalled { addon: String },

    #[error("Cannot deactivate {addon}: still required by {}", .dependents.join(", "))]
    BlockingDependents { addon: String, dependents: Vec<String> },

    #[error("{addon}: {message}")]
    Runtime { addon: String, message: String },
}

/// Aggregate outcome of an activate or deactivate batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchResult {
    /// True iff no errors were recorded.
    pub success: bool,
    /// Slugs mutated or already in the desired state, in processing order.
    pub affected: Vec<String>,
    /// One message per failure, in the order encountered.
    pub errors: Vec<String>,
}

impl BatchResult {
    pub fn new() -> Self {
        Self { success: true, affected: Vec::new(), errors: Vec::new() }
    }

    /// A batch that was refused before any add-on was touched.
    pub fn rejected(failure: &BatchFailure) -> Self {
        let mut result = Self::new();
        result.record_failure(failure);
        result
    }

    pub fn record_affected(&mut self, slug: &str) {
        self.affected.push(slug.to_string());
    }

    pub fn record_failure(&mut self, failure: &BatchFailure) {
        self.errors.push(failure.to_string());
        self.success = false;
    }
}

impl Default for BatchResult {
    fn default() -> Self {
        Self::new()
    }
}
