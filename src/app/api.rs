//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::adapters::{
    FilesystemRuntime, StaticAuthorizer, load_catalog_file, load_embedded_catalog,
};
use crate::app::{
    AppContext,
    commands::{batch, check, list, order, status},
};
use crate::domain::configuration::{discover_config, load_config};
use crate::domain::{AppConfig, Catalog};

pub use crate::app::commands::check::CatalogReport;
pub use crate::app::commands::list::AddonSummary;
pub use crate::app::commands::status::AddonStatus;
pub use crate::domain::{AppError, BatchResult};

/// Context wired with the filesystem runtime and the configured capabilities.
pub type DefaultContext = AppContext<Catalog, FilesystemRuntime, StaticAuthorizer>;

/// Build the default context.
///
/// Configuration comes from `config_path`, else `addonctl.toml` in the
/// current directory, else built-in defaults. The catalog comes from
/// `catalog_path`, else the configured catalog file, else the embedded catalog.
pub fn load_context(
    config_path: Option<&Path>,
    catalog_path: Option<&Path>,
) -> Result<DefaultContext, AppError> {
    let config = resolve_config(config_path)?;

    let catalog_source =
        catalog_path.map(Path::to_path_buf).or_else(|| config.catalog.path.clone());
    let catalog = match catalog_source {
        Some(path) => {
            debug!(path = %path.display(), "Loading catalog file");
            load_catalog_file(&path)?
        }
        None => load_embedded_catalog()?,
    };
    for dangling in catalog.dangling_dependencies() {
        warn!(
            addon = %dangling.addon,
            dependency = %dangling.dependency,
            "Dependency is not in the catalog and can never be satisfied"
        );
    }

    Ok(context_from(catalog, &config))
}

/// Wire a context from an already-loaded catalog and configuration.
pub fn context_from(catalog: Catalog, config: &AppConfig) -> DefaultContext {
    let runtime =
        FilesystemRuntime::new(&config.runtime.packages_dir, &config.runtime.state_file);
    let authorizer = StaticAuthorizer::new(config.authorization.capabilities.iter().copied());
    AppContext::new(catalog, runtime, authorizer).with_cycle_policy(config.resolver.cycle_policy)
}

fn resolve_config(config_path: Option<&Path>) -> Result<AppConfig, AppError> {
    let path: Option<PathBuf> = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(&std::env::current_dir()?),
    };

    match path {
        Some(path) => {
            debug!(path = %path.display(), "Loading configuration");
            load_config(&path)
        }
        None => {
            debug!("No configuration file found, using defaults");
            Ok(AppConfig::default())
        }
    }
}

// =============================================================================
// Command API
// =============================================================================

/// List every add-on in the catalog with its current state.
pub fn list(ctx: &DefaultContext) -> Vec<AddonSummary> {
    list::execute(ctx)
}

/// State and dependency check for one add-on.
pub fn status(ctx: &DefaultContext, slug: &str) -> Result<AddonStatus, AppError> {
    status::execute(ctx, slug)
}

/// Processing order for `requested`.
pub fn order(ctx: &DefaultContext, requested: &[String]) -> Result<Vec<String>, AppError> {
    order::execute(ctx, requested)
}

/// Dangling dependencies and cycles in the loaded catalog.
pub fn check(ctx: &DefaultContext) -> CatalogReport {
    check::execute(ctx.catalog())
}

/// Activate `requested` with its dependencies.
pub fn activate(ctx: &DefaultContext, requested: &[String]) -> BatchResult {
    batch::activate(ctx, requested)
}

/// Deactivate `requested` with its dependencies.
pub fn deactivate(ctx: &DefaultContext, requested: &[String]) -> BatchResult {
    batch::deactivate(ctx, requested)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn load_context_prefers_explicit_catalog() {
        let dir = tempdir().unwrap();
        let catalog_path = dir.path().join("catalog.toml");
        fs::write(&catalog_path, "[[addon]]\nslug = \"solo\"\n").unwrap();
        let config_path = dir.path().join("addonctl.toml");
        fs::write(&config_path, "").unwrap();

        let ctx = load_context(Some(&config_path), Some(&catalog_path)).unwrap();

        assert_eq!(ctx.catalog().len(), 1);
    }

    #[test]
    fn load_context_falls_back_to_embedded_catalog() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("addonctl.toml");
        fs::write(&config_path, "").unwrap();

        let ctx = load_context(Some(&config_path), None).unwrap();

        assert!(ctx.catalog().len() >= 8);
    }

    #[test]
    fn load_context_with_missing_config_fails() {
        let dir = tempdir().unwrap();

        let result = load_context(Some(&dir.path().join("nope.toml")), None);

        assert!(matches!(result, Err(AppError::ConfigNotFound(_))));
    }

    #[test]
    fn context_from_applies_configuration() {
        let dir = tempdir().unwrap();
        let mut config = AppConfig::default();
        config.anchor_paths(dir.path());
        config.authorization.capabilities.clear();

        let ctx = context_from(load_embedded_catalog().unwrap(), &config);
        let result = activate(&ctx, &["clients".to_string()]);

        assert!(!result.success);
        assert_eq!(result.errors, vec!["You do not have permission to activate add-ons"]);
        assert_eq!(ctx.runtime().packages_dir(), dir.path().join("addons"));
    }
}
