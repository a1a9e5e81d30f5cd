//! Data Transfer Objects
//!
//! Response types serialized to JSON by the host server.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, degraded
    pub status: String,
    /// UI bundle status: ok, missing
    pub ui_bundle: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Server start time
    pub started_at: DateTime<Utc>,
    /// Application version
    pub version: String,
}
