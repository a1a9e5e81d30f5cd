//! # CoastWatch
//!
//! Host server for the CoastWatch ocean hazard reporting prototype.
//!
//! The product itself is a client-side Leptos app (`coastwatch-ui/`): a home
//! page, mock local/authority sign-in kept in browser storage, a hazard
//! report form, a reports list and a role-gated authority dashboard. This
//! crate serves that bundle and answers each of its client routes with the
//! entry page.
//!
//! ## Modules
//!
//! - [`config`]: TOML + environment configuration
//! - [`server`]: Axum router, handlers and error responses
//! - [`telemetry`]: `tracing` subscriber setup

pub mod config;
pub mod server;
pub mod telemetry;

pub use config::{
    Config, ConfigError, ConfigSource, LoadReport, LogFormat, LoggingConfig, ServerConfig,
};
pub use server::{build_router, serve, AppState, ServerError, ServerResult};
