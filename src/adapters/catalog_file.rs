//! Catalog loading from TOML or YAML files.

use std::path::Path;

use serde::Deserialize;

use crate::domain::{AddonDescriptor, AddonSlug, AppError, Catalog, DEFAULT_PRIORITY, PackageRef};

/// Add-on metadata as written in catalog files and embedded `meta.toml` files.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct AddonMeta {
    /// Add-on slug (embedded entries default to the directory name).
    #[serde(default)]
    pub slug: Option<String>,
    /// Display name (defaults to the slug).
    #[serde(default)]
    pub name: Option<String>,
    /// Short summary.
    #[serde(default)]
    pub description: String,
    /// Dependency slugs.
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// Ordering priority.
    #[serde(default = "default_priority")]
    pub priority: i32,
    /// Package locator (defaults to the slug).
    #[serde(default)]
    pub package: Option<String>,
}

fn default_priority() -> i32 {
    DEFAULT_PRIORITY
}

impl AddonMeta {
    /// Convert into a descriptor. `label` identifies the entry in error messages.
    pub(crate) fn into_descriptor(
        self,
        label: &str,
        fallback_slug: Option<&str>,
    ) -> Result<AddonDescriptor, AppError> {
        let slug_str = self.slug.as_deref().or(fallback_slug).ok_or_else(|| {
            AppError::InvalidAddonMetadata {
                addon: label.to_string(),
                reason: "missing 'slug'".to_string(),
            }
        })?;
        let slug = AddonSlug::new(slug_str).map_err(|_| AppError::InvalidAddonMetadata {
            addon: label.to_string(),
            reason: format!("Invalid add-on slug '{}'", slug_str),
        })?;

        let mut dependencies = Vec::with_capacity(self.dependencies.len());
        for dep in &self.dependencies {
            let dep_slug = AddonSlug::new(dep).map_err(|_| AppError::InvalidAddonMetadata {
                addon: slug.to_string(),
                reason: format!("Invalid dependency slug '{}'", dep),
            })?;
            if dependencies.contains(&dep_slug) {
                return Err(AppError::InvalidAddonMetadata {
                    addon: slug.to_string(),
                    reason: format!("Dependency '{}' is listed twice", dep),
                });
            }
            dependencies.push(dep_slug);
        }

        let package = self.package.filter(|p| !p.trim().is_empty());
        let package_ref = PackageRef::new(package.unwrap_or_else(|| slug.to_string()));
        let display_name =
            self.name.filter(|n| !n.trim().is_empty()).unwrap_or_else(|| slug.to_string());

        Ok(AddonDescriptor {
            slug,
            display_name,
            dependencies,
            priority: self.priority,
            package_ref,
            description: self.description,
        })
    }
}

/// Top-level layout of a catalog file.
///
/// TOML files use `[[addon]]` tables; YAML files use an `addons:` list.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default, rename = "addon", alias = "addons")]
    addons: Vec<AddonMeta>,
}

/// Catalog file format, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Toml,
    Yaml,
}

impl CatalogFormat {
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(CatalogFormat::Toml),
            Some("yml") | Some("yaml") => Ok(CatalogFormat::Yaml),
            _ => Err(AppError::config_error(format!(
                "Unsupported catalog file '{}': expected .toml, .yml or .yaml",
                path.display()
            ))),
        }
    }
}

/// Load a catalog from a file on disk.
pub fn load_catalog_file(path: &Path) -> Result<Catalog, AppError> {
    if !path.is_file() {
        return Err(AppError::CatalogNotFound(path.display().to_string()));
    }
    let format = CatalogFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;
    parse_catalog(&content, format)
}

/// Parse catalog content in the given format.
pub fn parse_catalog(content: &str, format: CatalogFormat) -> Result<Catalog, AppError> {
    let file: CatalogFile = match format {
        CatalogFormat::Toml => toml::from_str(content)?,
        CatalogFormat::Yaml => serde_yaml::from_str(content)?,
    };

    let mut addons = Vec::with_capacity(file.addons.len());
    for (position, meta) in file.addons.into_iter().enumerate() {
        let label = meta.slug.clone().unwrap_or_else(|| format!("entry #{}", position + 1));
        addons.push(meta.into_descriptor(&label, None)?);
    }
    Catalog::new(addons)
}
