//! Built-in add-on catalog compiled into the binary.

use include_dir::{Dir, include_dir};

use crate::adapters::catalog_file::AddonMeta;
use crate::domain::{AppError, Catalog};

/// Embedded catalog directory: one subdirectory per add-on holding `meta.toml`.
static CATALOG_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/catalog");

/// Load the built-in catalog.
///
/// Entries are ordered by priority, then slug, since directory order is not stable.
pub fn load_embedded_catalog() -> Result<Catalog, AppError> {
    let mut addons = Vec::new();

    for entry in CATALOG_DIR.dirs() {
        let dir_name = entry.path().file_name().and_then(|n| n.to_str()).unwrap_or("");

        let Some(meta_file) = entry.get_file(entry.path().join("meta.toml")) else {
            continue;
        };

        let meta_content =
            meta_file.contents_utf8().ok_or_else(|| AppError::InvalidAddonMetadata {
                addon: dir_name.to_string(),
                reason: "meta.toml is not valid UTF-8".to_string(),
            })?;

        let meta: AddonMeta =
            toml::from_str(meta_content).map_err(|e| AppError::InvalidAddonMetadata {
                addon: dir_name.to_string(),
                reason: e.to_string(),
            })?;

        addons.push(meta.into_descriptor(dir_name, Some(dir_name))?);
    }

    addons.sort_by(|a, b| a.priority.cmp(&b.priority).then_with(|| a.slug.cmp(&b.slug)));
    Catalog::new(addons)
}
