pub mod config;
pub mod fixtures;
pub mod logger;
pub mod server;
