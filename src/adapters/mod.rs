pub mod catalog_embedded;
pub mod catalog_file;
pub mod filesystem_runtime;
pub mod static_authorizer;

pub use catalog_embedded::load_embedded_catalog;
pub use catalog_file::{CatalogFormat, load_catalog_file, parse_catalog};
pub use filesystem_runtime::FilesystemRuntime;
pub use static_authorizer::StaticAuthorizer;
