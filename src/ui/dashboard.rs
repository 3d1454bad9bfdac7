use eframe::egui::{self, RichText, Ui};

use crate::state::AppState;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// Dashboard view
// ---------------------------------------------------------------------------

pub fn dashboard(ui: &mut Ui, state: &AppState) {
    let stats = state.dataset.stats();

    let cards = [
        ("Total Customers", stats.total_customers.to_string()),
        ("Avg Age", format!("{:.1}", stats.avg_age)),
        ("Avg Income", format!("${:.1}k", stats.avg_income)),
        ("Avg Spending Score", format!("{:.1}", stats.avg_spending_score)),
        ("Churn Rate", format!("{:.1}%", stats.churn_rate * 100.0)),
    ];

    ui.columns(cards.len(), |cols| {
        for (col, (label, value)) in cols.iter_mut().zip(cards) {
            stat_card(col, label, &value);
        }
    });

    ui.add_space(12.0);

    ui.columns(2, |cols| {
        cols[0].strong("Income vs Spending Score");
        plot::income_score_scatter(&mut cols[0], state);

        cols[1].strong("Churn Rate by Age Group");
        plot::churn_by_age_chart(&mut cols[1], state);
    });
}

fn stat_card(ui: &mut Ui, label: &str, value: &str) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_min_width(ui.available_width());
        ui.small(label);
        ui.label(RichText::new(value).size(22.0).strong());
    });
}
