//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod report;
pub mod reports;
pub mod signup;

pub use dashboard::Dashboard;
pub use home::Home;
pub use login::Login;
pub use report::Report;
pub use reports::Reports;
pub use signup::Signup;
