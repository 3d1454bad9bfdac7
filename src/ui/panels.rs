use eframe::egui::{self, Align, Color32, Layout, RichText, SelectableLabel, Ui};

use crate::state::{AppState, AppView};

// ---------------------------------------------------------------------------
// Left side panel – navigation
// ---------------------------------------------------------------------------

/// Render the navigation panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(8.0);
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(RichText::new("Customer Lens").strong());
    });
    ui.add_space(4.0);
    ui.separator();

    for view in AppView::ALL {
        let label = SelectableLabel::new(state.view == view, view.nav_label());
        if ui.add_sized([ui.available_width(), 28.0], label).clicked() {
            state.view = view;
        }
    }

    ui.with_layout(Layout::bottom_up(Align::Min), |ui: &mut Ui| {
        ui.add_space(6.0);
        ui.small("Customer behaviour analysis on mock data");
        ui.separator();
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the view title and dataset summary.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading(state.view.title());
        ui.separator();

        let current = state.dataset.current().len();
        let original = state.dataset.original().len();
        ui.label(format!("{current} customers ({original} original)"));

        if let Some(msg) = &state.status_message {
            ui.separator();
            let color = if msg.starts_with("Error") {
                Color32::RED
            } else {
                ui.visuals().text_color()
            };
            ui.label(RichText::new(msg).color(color));
        }
    });
}

// ---------------------------------------------------------------------------
// Cleaning notice
// ---------------------------------------------------------------------------

/// Modal-style window reporting the last cleaning pass.
pub fn clean_notice(ctx: &egui::Context, state: &mut AppState) {
    let Some(removed) = state.clean_notice else {
        return;
    };

    let mut dismissed = false;
    egui::Window::new("Data Cleaning Processed")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui: &mut Ui| {
            ui.label(format!("Removed {removed} outlier/incomplete records."));
            ui.add_space(6.0);
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });

    if dismissed {
        state.clean_notice = None;
    }
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn save_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export customers")
        .set_file_name("customers.csv")
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .save_file();

    if let Some(path) = file {
        state.export_to(&path);
    }
}
