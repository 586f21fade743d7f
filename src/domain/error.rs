use std::io;

use thiserror::Error;

/// Library-wide error type for addonctl operations.
///
/// Per-add-on batch failures are not represented here; they are collected
/// into [`crate::domain::BatchResult`] instead of being propagated.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Config file was requested explicitly but does not exist.
    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    /// Catalog file does not exist.
    #[error("Catalog file not found: {0}")]
    CatalogNotFound(String),

    /// Add-on slug is invalid.
    #[error(
        "Invalid add-on slug '{0}': must be alphanumeric with hyphens, underscores, or periods"
    )]
    InvalidAddonSlug(String),

    /// The same slug is declared twice in one catalog.
    #[error("Add-on '{0}' is declared more than once in the catalog")]
    DuplicateAddon(String),

    /// Add-on metadata could not be turned into a descriptor.
    #[error("Invalid metadata for add-on '{addon}': {reason}")]
    InvalidAddonMetadata { addon: String, reason: String },

    /// Add-on not found in catalog.
    #[error("Add-on '{slug}' not found. Available: {available}")]
    AddonNotFound { slug: String, available: String },

    /// Circular dependency detected by the strict resolver.
    #[error("Circular dependency detected: {0}")]
    CircularDependency(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    YamlParseError(#[from] serde_yaml::Error),

    /// JSON rendering error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
