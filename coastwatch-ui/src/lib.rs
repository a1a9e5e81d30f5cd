//! CoastWatch
//!
//! Ocean hazard reporting prototype built with Leptos (WASM).
//!
//! # Features
//!
//! - Home page with hazard highlights
//! - Mock login/signup for local and authority accounts
//! - Hazard report form and recent reports list
//! - Authority dashboard behind a role guard
//!
//! # Architecture
//!
//! A client-side rendered (CSR) Leptos application compiled to WebAssembly.
//! The signed-in user is kept in a single `localStorage` slot; there is no
//! backend API. Session, guard and route logic are plain Rust and test
//! natively.

pub mod app;
pub mod components;
pub mod content;
pub mod guard;
pub mod pages;
pub mod routes;
pub mod session;
pub mod state;

pub use guard::{can_enter, Access};
pub use routes::{landing_for, resolve, AppRoute, Navigation};
pub use session::{BrowserStore, MemoryStore, Role, Session, SessionStore};
