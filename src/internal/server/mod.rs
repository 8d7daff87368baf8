pub mod handler;
pub mod server;

use config::ConfigError;

use crate::internal::fixtures::FixtureLoadError;

// Re-export main types
pub use server::create_server;
pub use server::Server;

/// Fatal errors raised before the server accepts connections
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Fixtures(#[from] FixtureLoadError),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },
}
