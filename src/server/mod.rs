//! CoastWatch Host Server
//!
//! Serves the built Leptos UI bundle, built with Axum.
//!
//! # Endpoints
//!
//! ## Client routes
//! - `GET /`, `/report`, `/reports`, `/login`, `/signup`, `/dashboard` -
//!   the UI's `index.html` (503 until the bundle is built)
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! Any other path is served from the bundle directory, or 404.
//!
//! # Example
//!
//! ```rust,no_run
//! use coastwatch::config::ServerConfig;
//! use coastwatch::server::{serve, AppState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::default();
//!     serve(AppState::new(config)).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ServerError, ServerResult};
pub use state::AppState;

use axum::{
    handler::HandlerWithoutStateExt,
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use routes::spa::CLIENT_ROUTES;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let mut client_routes = Router::new();
    for route in CLIENT_ROUTES {
        for path in route.served_paths() {
            client_routes = client_routes.route(&path, get(routes::spa::client_route));
        }
    }

    let assets = ServeDir::new(&state.config.dist_dir)
        .not_found_service(routes::spa::not_found.into_service());

    let cors = cors_layer(&state.config.cors_origins);
    let shared_state = Arc::new(state);

    Router::new()
        .merge(client_routes)
        .nest("/health", health_routes)
        .fallback_service(assets)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(shared_state)
}

/// CORS for the configured origins; invalid entries are skipped
fn cors_layer(origins: &[String]) -> CorsLayer {
    let methods = [Method::GET, Method::HEAD];

    if origins.iter().any(|o| o == "*") {
        return CorsLayer::new().allow_origin(AllowOrigin::any()).allow_methods(methods);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(methods)
}

/// Start the server
pub async fn serve(state: AppState) -> Result<(), ServerError> {
    let addr = state.config.addr();
    let dist_dir = state.config.dist_dir.clone();

    if !state.bundle_ready().await {
        tracing::warn!(
            "UI bundle not found in {:?}; client routes return 503 until it is built",
            dist_dir
        );
    }

    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("CoastWatch listening on {} (bundle: {:?})", addr, dist_dir);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("CoastWatch shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use tempfile::{tempdir, TempDir};
    use tower::util::ServiceExt;

    const INDEX_HTML: &str = "<!DOCTYPE html><html><body>coastwatch-test</body></html>";

    fn create_test_app(with_bundle: bool) -> (Router, TempDir) {
        let dir = tempdir().unwrap();
        if with_bundle {
            std::fs::write(dir.path().join("index.html"), INDEX_HTML).unwrap();
            std::fs::write(dir.path().join("app.js"), "console.log('ok');").unwrap();
        }

        let config = ServerConfig {
            dist_dir: dir.path().to_path_buf(),
            ..Default::default()
        };

        (build_router(AppState::new(config)), dir)
    }

    async fn fetch(app: &Router, uri: &str) -> Response {
        app.clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_client_routes_serve_index() {
        let (app, _dir) = create_test_app(true);

        for uri in ["/", "/report", "/reports", "/login", "/signup", "/dashboard"] {
            let response = fetch(&app, uri).await;
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
            assert!(body_string(response).await.contains("coastwatch-test"), "{uri}");
        }
    }

    #[tokio::test]
    async fn test_client_routes_accept_trailing_slash() {
        let (app, _dir) = create_test_app(true);

        let response = fetch(&app, "/reports/").await;

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_assets_served_from_bundle() {
        let (app, _dir) = create_test_app(true);

        let response = fetch(&app, "/app.js").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "console.log('ok');");
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let (app, _dir) = create_test_app(true);

        let response = fetch(&app, "/admin").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_missing_bundle_is_unavailable() {
        let (app, _dir) = create_test_app(false);

        let response = fetch(&app, "/dashboard").await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"]["code"], "SERVICE_UNAVAILABLE");
        assert!(body["request_id"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _dir) = create_test_app(false);

        let response = fetch(&app, "/health/live").await;

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready_tracks_bundle() {
        let (ready, _dir) = create_test_app(true);
        assert_eq!(fetch(&ready, "/health/ready").await.status(), StatusCode::OK);

        let (not_ready, _dir) = create_test_app(false);
        assert_eq!(
            fetch(&not_ready, "/health/ready").await.status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[tokio::test]
    async fn test_health_full() {
        let (app, _dir) = create_test_app(false);

        let response = fetch(&app, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["ui_bundle"], "missing");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_cors_skips_invalid_origins() {
        // Building the layer must not panic on bad input
        let _ = cors_layer(&["http://localhost:8081".to_string(), "bad\norigin".to_string()]);
        let _ = cors_layer(&["*".to_string()]);
    }
}
