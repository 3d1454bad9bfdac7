/// Rendering for the navigation panel and the three views.
pub mod dashboard;
pub mod data_view;
pub mod insights;
pub mod panels;
pub mod plot;
