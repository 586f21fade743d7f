pub mod app_config;
pub mod loader;

pub use app_config::{
    AppConfig, AuthorizationConfig, CatalogConfig, CyclePolicy, ResolverConfig, RuntimeConfig,
};
pub use loader::{CONFIG_FILE_NAME, discover_config, load_config, parse_config_content};
