//! Pages
//!
//! Top-level page components for each route.

pub mod analytics;
pub mod customers;
pub mod dashboard;
pub mod settings;

pub use analytics::Analytics;
pub use customers::Customers;
pub use dashboard::Dashboard;
pub use settings::Settings;
