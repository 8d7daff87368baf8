// src/internal/config/config.rs

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

// Version information from build script - using option_env! for safety
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_PORT: u16 = 8079;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_FIXTURE_DIR: &str = "search";
pub const DEFAULT_FIXTURE_COUNT: usize = 5;

/// Legacy variable holding the listening port
pub const PORT_VAR: &str = "PORT";
/// Legacy variable holding the base path of the mock endpoints
pub const DEFAULT_PATH_VAR: &str = "DEFAULT_PATH";

/// Get version information
pub fn get_version_info() -> String {
    let build_timestamp = option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown");
    let build_date = option_env!("VERGEN_BUILD_DATE").unwrap_or("unknown");
    let rustc_semver = option_env!("VERGEN_RUSTC_SEMVER").unwrap_or("unknown");
    let cargo_target_triple = option_env!("VERGEN_CARGO_TARGET_TRIPLE").unwrap_or("unknown");

    format!(
        "mockify version {}\n\
         Built: {} ({})\n\
         Rust: {}\n\
         Target: {}",
        VERSION, build_date, build_timestamp, rustc_semver, cargo_target_triple
    )
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_host")]
    pub host: String,
    /// Prefix for the identifier and search routes. Normalized by
    /// [`AppConfig::validate`].
    #[serde(default)]
    pub base_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            base_path: String::new(),
        }
    }
}

fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureConfig {
    #[serde(default = "default_fixture_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_fixture_count")]
    pub count: usize,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            dir: default_fixture_dir(),
            count: default_fixture_count(),
        }
    }
}

fn default_fixture_dir() -> PathBuf {
    PathBuf::from(DEFAULT_FIXTURE_DIR)
}
fn default_fixture_count() -> usize {
    DEFAULT_FIXTURE_COUNT
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_true")]
    pub color: bool,
    #[serde(default)]
    pub output_path: Option<String>,
    #[serde(default)]
    pub append_to_file: bool,
    #[serde(default)]
    pub disable_console: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            color: true,
            output_path: None,
            append_to_file: false,
            disable_console: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub fixtures: FixtureConfig,
}

impl AppConfig {
    /// Load configuration from defaults, an optional config file and the
    /// process environment. The result is not yet validated.
    pub fn load(config_file: Option<&str>) -> Result<Self, ConfigError> {
        Self::load_with_env(config_file, std::env::vars().collect())
    }

    /// Same as [`AppConfig::load`] but reads variables from `env` instead of
    /// the process environment.
    pub fn load_with_env(
        config_file: Option<&str>,
        env: HashMap<String, String>,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("fixtures.dir", DEFAULT_FIXTURE_DIR)?
            .set_default("fixtures.count", DEFAULT_FIXTURE_COUNT as i64)?
            .set_default("logging.level", "info")?
            .set_default("logging.color", true)?;

        builder = match config_file {
            Some(path) => builder.add_source(File::with_name(path)),
            None => builder.add_source(File::with_name("mockify").required(false)),
        };

        let legacy_port = env
            .get(PORT_VAR)
            .and_then(|raw| raw.trim().parse::<u16>().ok())
            .map(i64::from);
        let legacy_path = env.get(DEFAULT_PATH_VAR).cloned();

        let config = builder
            .add_source(
                Environment::with_prefix("MOCKIFY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(env)),
            )
            .set_override_option("server.port", legacy_port)?
            .set_override_option("server.base_path", legacy_path)?
            .build()?;

        config.try_deserialize()
    }

    /// Check required fields and normalize the base path in place
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        self.server.base_path = normalize_base_path(&self.server.base_path)?;

        if self.fixtures.count == 0 {
            return Err(ConfigError::Message(
                "fixture count must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// Normalize a configured base path: exactly one leading `/`, no trailing
/// `/` unless the path is the root itself.
pub fn normalize_base_path(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Message(format!(
            "base path is required (set {} or --default-path)",
            DEFAULT_PATH_VAR
        )));
    }

    let stripped = trimmed.trim_matches('/');
    let normalized = if stripped.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", stripped)
    };

    let has_pattern = normalized.contains(['{', '}', '*'])
        || normalized.split('/').any(|segment| segment.starts_with(':'));
    if has_pattern {
        return Err(ConfigError::Message(format!(
            "base path must be a literal path: {}",
            raw
        )));
    }

    Ok(normalized)
}
