//! Client Routes
//!
//! The UI is a single-page app: every client path is answered with the
//! bundle's `index.html` and the router in the browser takes over. Access
//! checks for guarded views happen in the browser, where the session lives.

use axum::{extract::State, http::Uri, response::Html};
use std::io::ErrorKind;
use std::sync::Arc;

use crate::server::error::{ServerError, ServerResult};
use crate::server::state::AppState;

/// A path the UI router handles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientRoute {
    pub path: &'static str,
    pub view: &'static str,
    /// Account role required to render the view, if any
    pub requires: Option<&'static str>,
}

/// Mirrors `AppRoute::ALL` in `coastwatch-ui/src/routes.rs`: same paths in
/// the same order, with `requires` holding the wire name of
/// `AppRoute::required_role`. Both crates pin the shared table in a test
/// (`test_table_matches_ui_routes` here, `test_table_matches_host_routes` there).
pub const CLIENT_ROUTES: [ClientRoute; 6] = [
    ClientRoute { path: "/", view: "Home", requires: None },
    ClientRoute { path: "/report", view: "Report a hazard", requires: None },
    ClientRoute { path: "/reports", view: "Recent reports", requires: None },
    ClientRoute { path: "/login", view: "Sign in", requires: None },
    ClientRoute { path: "/signup", view: "Create account", requires: None },
    ClientRoute { path: "/dashboard", view: "Authority dashboard", requires: Some("authority") },
];

impl ClientRoute {
    /// Paths the server answers for this route, with and without a
    /// trailing slash
    pub fn served_paths(&self) -> Vec<String> {
        if self.path == "/" {
            vec![self.path.to_string()]
        } else {
            vec![self.path.to_string(), format!("{}/", self.path)]
        }
    }
}

/// GET on any client path
pub async fn client_route(
    State(state): State<Arc<AppState>>,
    uri: Uri,
) -> ServerResult<Html<String>> {
    let index = state.index_path();

    match tokio::fs::read_to_string(&index).await {
        Ok(html) => {
            tracing::debug!(path = %uri.path(), "Serving UI entry page");
            Ok(Html(html))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Err(ServerError::ServiceUnavailable(
            format!("UI bundle not built ({} missing)", index.display()),
        )),
        Err(e) => Err(e.into()),
    }
}

/// Fallback for paths that are neither client routes nor bundle files
pub async fn not_found(uri: Uri) -> ServerError {
    ServerError::NotFound(uri.path().to_string())
}
