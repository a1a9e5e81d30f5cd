//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod feature_card;
pub mod guarded;
pub mod metric_card;
pub mod nav;
pub mod role_toggle;
pub mod toast;

pub use feature_card::{FeatureCard, HighlightTile};
pub use guarded::Guarded;
pub use metric_card::MetricCard;
pub use nav::{LogoutButton, Nav};
pub use role_toggle::RoleToggle;
pub use toast::Toast;
