// src/internal/server/handler/http.rs

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
    routing::get,
    Json, Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tracing::{debug, info};

use crate::internal::fixtures::{rotation_index, Clock, Fixture, FixtureSet};

/// Plaintext body of the root and base path routes
pub const IDENTIFIER: &str = "Mockify";

#[derive(Clone)]
struct ResponderState {
    fixtures: Arc<FixtureSet>,
    clock: Arc<dyn Clock>,
}

/// Handler serves the identifier routes and the rotating search route
pub struct Handler {
    base_path: String,
    state: ResponderState,
}

impl Handler {
    /// Create a new HTTP handler. `base_path` must already be normalized.
    pub fn new(
        base_path: impl Into<String>,
        fixtures: Arc<FixtureSet>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            base_path: base_path.into(),
            state: ResponderState { fixtures, clock },
        }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn search_path(&self) -> String {
        if self.base_path == "/" {
            "/search".to_string()
        } else {
            format!("{}/search", self.base_path)
        }
    }

    /// Create an HTTP router with the request logging and CORS middleware
    pub fn create_http_router(&self) -> Router {
        let mut router: Router<ResponderState> = Router::new().route("/", get(Self::identify));

        if self.base_path != "/" {
            router = router
                .route(&self.base_path, get(Self::identify))
                .route(&format!("{}/", self.base_path), get(Self::identify));
        }

        let search_path = self.search_path();
        let router = router
            .route(&search_path, get(Self::search))
            .route(&format!("{}/", search_path), get(Self::search))
            .with_state(self.state.clone())
            .layer(
                ServiceBuilder::new()
                    .layer(middleware::from_fn(Self::log_requests))
                    .layer(CorsLayer::permissive()),
            );

        info!(
            "HTTP handler created with base path {} and search path {}",
            self.base_path, search_path
        );
        router
    }

    async fn identify() -> &'static str {
        IDENTIFIER
    }

    /// Serve the fixture for the current minute of the hour
    async fn search(State(state): State<ResponderState>) -> Json<Fixture> {
        let minute = state.clock.minute_of_hour();
        let index = rotation_index(minute, state.fixtures.len());
        debug!(minute, index, "Serving mock search result");

        Json(state.fixtures.select(minute).clone())
    }

    /// Middleware to log HTTP requests
    async fn log_requests(request: Request<Body>, next: Next) -> Response {
        let method = request.method().clone();
        let uri = request.uri().clone();
        let version = request.version();

        debug!("→ {} {} {:?}", method, uri, version);

        let response = next.run(request).await;

        debug!("← {} {}", response.status(), uri);
        response
    }
}
