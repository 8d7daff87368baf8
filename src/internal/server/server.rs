// src/internal/server/server.rs

use std::future::Future;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

use super::handler::Handler;
use super::StartupError;
use crate::internal::config::AppConfig;
use crate::internal::fixtures::{Clock, FixtureLoader, FixtureSet, SystemClock};

/// Server owns the loaded fixtures and the validated configuration.
///
/// It is built only after every fixture loaded, so the listener is never
/// bound with a partial set.
pub struct Server {
    pub config: AppConfig,
    handler: Handler,
    fixture_count: usize,
}

impl Server {
    /// Create a server from an already loaded fixture set
    pub fn new(config: AppConfig, fixtures: FixtureSet, clock: Arc<dyn Clock>) -> Self {
        let fixture_count = fixtures.len();
        let handler = Handler::new(config.server.base_path.clone(), Arc::new(fixtures), clock);

        Self {
            config,
            handler,
            fixture_count,
        }
    }

    pub fn fixture_count(&self) -> usize {
        self.fixture_count
    }

    pub fn router(&self) -> Router {
        self.handler.create_http_router()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.config.server.host, self.config.server.port)
    }

    /// Bind the configured address. No fallback port is tried.
    pub async fn bind(&self) -> Result<TcpListener, StartupError> {
        let addr = self.bind_address();
        TcpListener::bind(&addr)
            .await
            .map_err(|source| StartupError::Bind { addr, source })
    }

    /// Serve requests on `listener` until `shutdown` resolves
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let port = listener
            .local_addr()
            .context("Failed to read listener address")?
            .port();

        info!(
            "Listening on port {} with default path http://localhost:{}{}",
            port,
            port,
            self.handler.base_path()
        );
        info!("Endpoints:");
        info!("  - GET  http://localhost:{}/", port);
        info!("  - GET  http://localhost:{}{}", port, self.handler.base_path());
        info!(
            "  - GET  http://localhost:{}{} ({} rotating results)",
            port,
            self.handler.search_path(),
            self.fixture_count
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .context("HTTP server failed")?;

        Ok(())
    }

    /// Bind and serve until Ctrl+C
    pub async fn start_with_graceful_shutdown(self) -> Result<()> {
        let listener = self.bind().await?;

        let shutdown = async {
            if let Err(e) = signal::ctrl_c().await {
                error!("Failed to install Ctrl+C signal handler: {}", e);
                std::future::pending::<()>().await;
            }
            info!("Received shutdown signal");
        };

        self.serve(listener, shutdown).await
    }
}

/// Load fixtures and build the server against the wall clock
pub fn create_server(config: AppConfig) -> Result<Server, StartupError> {
    let fixtures = FixtureLoader::from_config(&config.fixtures).load()?;
    Ok(Server::new(config, fixtures, Arc::new(SystemClock)))
}
