//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod analysis_table;
pub mod chart;
pub mod loading;
pub mod nav;
pub mod notifications;
pub mod score_card;

pub use analysis_table::AnalysisTable;
pub use chart::{EmotionChart, ScoreChart};
pub use loading::{ListSkeleton, Loading, NoData};
pub use nav::Nav;
pub use notifications::Notifications;
pub use score_card::{CountCard, ScoreCard};
