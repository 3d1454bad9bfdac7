use eframe::egui;

use crate::config::AppConfig;
use crate::state::{AppState, AppView};
use crate::ui::{dashboard, data_view, insights, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CustomerLensApp {
    pub state: AppState,
}

impl CustomerLensApp {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            state: AppState::new(config),
        }
    }
}

impl Default for CustomerLensApp {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

impl eframe::App for CustomerLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title + summary ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: navigation ----
        egui::SidePanel::left("nav_panel")
            .default_width(200.0)
            .resizable(false)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: active view ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.view {
            AppView::Dashboard => dashboard::dashboard(ui, &self.state),
            AppView::DataManagement => data_view::data_view(ui, &mut self.state),
            AppView::Insights => insights::insights_view(ui, &self.state),
        });

        panels::clean_notice(ctx, &mut self.state);
    }
}
