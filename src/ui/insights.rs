use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::color::{gender_color, severity_color};
use crate::data::model::Gender;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Insights view
// ---------------------------------------------------------------------------

pub fn insights_view(ui: &mut Ui, state: &AppState) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for insight in &state.insights {
                egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
                    ui.set_min_width(ui.available_width());
                    ui.label(
                        RichText::new(&insight.title)
                            .strong()
                            .color(severity_color(insight.severity)),
                    );
                    ui.label(&insight.detail);
                });
                ui.add_space(6.0);
            }

            ui.separator();
            ui.strong("Gender breakdown");
            let breakdown = state.dataset.breakdown();
            egui::Grid::new("gender_breakdown")
                .num_columns(4)
                .striped(true)
                .show(ui, |ui: &mut Ui| {
                    ui.strong("Gender");
                    ui.strong("Customers");
                    ui.strong("Churn rate");
                    ui.strong("Avg score");
                    ui.end_row();

                    for gender in Gender::ALL {
                        let group = breakdown.gender(gender);
                        ui.label(RichText::new(gender.as_str()).color(gender_color(gender)));
                        ui.label(group.count.to_string());
                        ui.label(format!("{:.1}%", group.churn_rate * 100.0));
                        ui.label(format!("{:.1}", group.avg_spending_score));
                        ui.end_row();
                    }
                });
        });
}
