use clap::{Arg, Command};
use std::path::PathBuf;

use crate::internal::config::{AppConfig, VERSION};
use crate::internal::server::StartupError;

pub fn build_cli() -> Command {
    // Leak the version string to get a 'static lifetime
    let long_version: &'static str =
        Box::leak(crate::internal::config::get_version_info().into_boxed_str());

    Command::new("mockify")
        .version(VERSION)
        .long_version(long_version)
        .about("Mock search API serving rotating JSON fixtures")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Path to config file (default: ./mockify.yaml if present)"),
        )
        .arg(
            Arg::new("host")
                .long("host")
                .help("Address to listen on (default: 0.0.0.0)"),
        )
        .arg(
            Arg::new("port")
                .long("port")
                .short('p')
                .value_parser(clap::value_parser!(u16))
                .help("Port to listen on (default: $PORT or 8079)"),
        )
        .arg(
            Arg::new("default-path")
                .long("default-path")
                .short('d')
                .help("Base path of the mock endpoints (default: $DEFAULT_PATH)"),
        )
        .arg(
            Arg::new("fixtures-dir")
                .long("fixtures-dir")
                .help("Directory holding 1.json..N.json (default: ./search)"),
        )
        .arg(
            Arg::new("fixture-count")
                .long("fixture-count")
                .value_parser(clap::value_parser!(usize))
                .help("Number of fixture files to load (default: 5)"),
        )
}

/// Build the validated configuration: config file and environment first,
/// then command line overrides.
pub fn parse_config(matches: &clap::ArgMatches) -> Result<AppConfig, StartupError> {
    let config_file = matches.get_one::<String>("config").map(String::as_str);
    let mut config = AppConfig::load(config_file)?;

    if let Some(host) = matches.get_one::<String>("host") {
        config.server.host = host.clone();
    }

    if let Some(port) = matches.get_one::<u16>("port") {
        config.server.port = *port;
    }

    if let Some(path) = matches.get_one::<String>("default-path") {
        config.server.base_path = path.clone();
    }

    if let Some(dir) = matches.get_one::<String>("fixtures-dir") {
        config.fixtures.dir = PathBuf::from(dir);
    }

    if let Some(count) = matches.get_one::<usize>("fixture-count") {
        config.fixtures.count = *count;
    }

    config.validate()?;
    Ok(config)
}
