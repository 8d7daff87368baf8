use tracing::{error, info};
use mockify::cli::{build_cli, parse_config};
use mockify::internal::server::create_server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up PORT and DEFAULT_PATH from a local .env file, if any
    dotenv::dotenv().ok();

    let matches = build_cli().get_matches();
    let config = match parse_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = mockify::internal::logger::init_logger(&config.logging) {
        eprintln!("Failed to initialize logger: {}", e);
        std::process::exit(1);
    }

    info!("Starting Mockify");
    info!("Version: {}", mockify::internal::config::get_version_info());
    info!(
        "Fixtures: {} from {}",
        config.fixtures.count,
        config.fixtures.dir.display()
    );

    let server = match create_server(config) {
        Ok(server) => server,
        Err(e) => {
            error!("Failed to start server: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.start_with_graceful_shutdown().await {
        error!("Server error: {:#}", e);
        std::process::exit(1);
    }

    info!("Server shutdown complete");
    Ok(())
}
