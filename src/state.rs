use std::path::Path;

use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::AppConfig;
use crate::data::export::export_file;
use crate::data::filter::{filtered_indices, TableFilter};
use crate::data::insights::{generate_insights, Insight};
use crate::data::model::Gender;
use crate::data::CustomerDataset;

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    Dashboard,
    DataManagement,
    Insights,
}

impl AppView {
    pub const ALL: [AppView; 3] = [AppView::Dashboard, AppView::DataManagement, AppView::Insights];

    /// Label used in the navigation panel.
    pub fn nav_label(self) -> &'static str {
        match self {
            AppView::Dashboard => "Dashboard",
            AppView::DataManagement => "Data Management",
            AppView::Insights => "Insights",
        }
    }

    /// Heading shown in the top bar.
    pub fn title(self) -> &'static str {
        match self {
            AppView::Dashboard => "Analytics Overview",
            AppView::DataManagement => "Data Preprocessing",
            AppView::Insights => "Insight Generation",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Active view in the central panel.
    pub view: AppView,

    /// The single customer dataset for this session.
    pub dataset: CustomerDataset,

    /// Display-only narrowing of the data table.
    pub table_filter: TableFilter,

    /// Indices into the current collection passing `table_filter` (cached).
    pub visible_indices: Vec<usize>,

    /// Insights for the current collection (cached).
    pub insights: Vec<Insight>,

    /// Modal notice after a cleaning pass: number of removed records.
    pub clean_notice: Option<usize>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_dataset(CustomerDataset::generate(config.count, &mut rng))
    }

    pub fn with_dataset(dataset: CustomerDataset) -> Self {
        let mut state = Self {
            view: AppView::Dashboard,
            dataset,
            table_filter: TableFilter::default(),
            visible_indices: Vec::new(),
            insights: Vec::new(),
            clean_notice: None,
            status_message: None,
        };
        state.refresh();
        state
    }

    /// Recompute everything derived from the current collection.
    fn refresh(&mut self) {
        self.refilter();
        self.insights = generate_insights(self.dataset.stats(), self.dataset.breakdown());
    }

    /// Recompute `visible_indices` after a filter or dataset change.
    pub fn refilter(&mut self) {
        self.visible_indices = filtered_indices(self.dataset.current(), &self.table_filter);
    }

    pub fn clean(&mut self) {
        let removed = self.dataset.clean();
        self.clean_notice = Some(removed);
        self.refresh();
    }

    pub fn reset(&mut self) {
        self.dataset.reset();
        self.clean_notice = None;
        self.refresh();
    }

    pub fn toggle_gender(&mut self, gender: Gender) {
        self.table_filter.toggle_gender(gender);
        self.refilter();
    }

    pub fn set_churned_only(&mut self, churned_only: bool) {
        self.table_filter.churned_only = churned_only;
        self.refilter();
    }

    /// Write the current collection to `path`, reporting the outcome in the status line.
    pub fn export_to(&mut self, path: &Path) {
        let result = export_file(path, self.dataset.current())
            .with_context(|| format!("exporting to {}", path.display()));
        match result {
            Ok(()) => {
                log::info!(
                    "Exported {} customers to {}",
                    self.dataset.current().len(),
                    path.display()
                );
                self.status_message = Some(format!(
                    "Exported {} customers to {}",
                    self.dataset.current().len(),
                    path.display()
                ));
            }
            Err(e) => {
                log::error!("Export failed: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(&AppConfig {
            count: 200,
            seed: Some(42),
        })
    }

    #[test]
    fn starts_on_dashboard_with_everything_visible() {
        let s = state();
        assert_eq!(s.view, AppView::Dashboard);
        assert_eq!(s.visible_indices.len(), 200);
        assert!(!s.insights.is_empty());
        assert!(s.clean_notice.is_none());
    }

    #[test]
    fn clean_sets_notice_and_refilters() {
        let mut s = state();
        let before = s.dataset.current().len();
        s.clean();
        let removed = s.clean_notice.unwrap();
        assert_eq!(s.dataset.current().len(), before - removed);
        assert_eq!(s.visible_indices.len(), s.dataset.current().len());
    }

    #[test]
    fn reset_clears_notice() {
        let mut s = state();
        s.clean();
        s.reset();
        assert!(s.clean_notice.is_none());
        assert_eq!(s.dataset.current(), s.dataset.original());
        assert_eq!(s.visible_indices.len(), 200);
    }

    #[test]
    fn table_filter_narrows_visible_rows_only() {
        let mut s = state();
        s.set_churned_only(true);
        let churned = s.dataset.current().iter().filter(|c| c.churn).count();
        assert_eq!(s.visible_indices.len(), churned);
        assert_eq!(s.dataset.current().len(), 200);

        s.toggle_gender(Gender::Male);
        s.toggle_gender(Gender::Female);
        assert!(s.visible_indices.is_empty());
    }

    #[test]
    fn failed_export_reports_status() {
        let mut s = state();
        let dir = tempfile::tempdir().unwrap();
        s.export_to(&dir.path().join("customers.txt"));
        let msg = s.status_message.unwrap();
        assert!(msg.starts_with("Error:"), "{msg}");
    }

    #[test]
    fn successful_export_reports_count() {
        let mut s = state();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("customers.csv");
        s.export_to(&path);
        assert!(path.exists());
        assert!(s.status_message.unwrap().starts_with("Exported 200 customers"));
    }
}
