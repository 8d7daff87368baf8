pub mod config;

pub use self::config::{
    get_version_info, normalize_base_path, AppConfig, FixtureConfig, LoggingConfig, ServerConfig,
    VERSION,
};
