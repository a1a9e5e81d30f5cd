//! State Management
//!
//! Session context and global UI state.

pub mod global;
pub mod session;

pub use global::{provide_global_state, GlobalState};
pub use session::{provide_session_context, SessionContext};
