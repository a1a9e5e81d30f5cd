//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Monotonic start time for uptime tracking
    pub start_time: Instant,
    /// Wall-clock start time, reported by the health endpoint
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            start_time: Instant::now(),
            started_at: Utc::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Path of the UI entry page
    pub fn index_path(&self) -> PathBuf {
        self.config.index_path()
    }

    /// Whether the UI bundle has been built into the dist directory
    pub async fn bundle_ready(&self) -> bool {
        tokio::fs::metadata(self.index_path())
            .await
            .map(|m| m.is_file())
            .unwrap_or(false)
    }
}
