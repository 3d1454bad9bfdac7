use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Plot, Points};

use crate::color::{churn_color, churn_rate_color};
use crate::data::model::AgeBand;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Income vs spending score scatter
// ---------------------------------------------------------------------------

/// Scatter of annual income against spending score, split by churn.
pub fn income_score_scatter(ui: &mut Ui, state: &AppState) {
    let customers = state.dataset.current();

    let series = |churn: bool| -> Vec<[f64; 2]> {
        customers
            .iter()
            .filter(|c| c.churn == churn)
            .map(|c| [f64::from(c.annual_income), f64::from(c.spending_score)])
            .collect()
    };

    Plot::new("income_score_plot")
        .height(280.0)
        .legend(Legend::default())
        .x_axis_label("Annual income (k)")
        .y_axis_label("Spending score")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for churn in [false, true] {
                let name = if churn { "Churned" } else { "Retained" };
                plot_ui.points(
                    Points::new(series(churn))
                        .name(name)
                        .color(churn_color(churn))
                        .radius(3.0),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Churn rate per age band
// ---------------------------------------------------------------------------

/// Bar chart of churn rate (%) per age band.
pub fn churn_by_age_chart(ui: &mut Ui, state: &AppState) {
    let breakdown = state.dataset.breakdown();

    let bars: Vec<Bar> = AgeBand::ALL
        .into_iter()
        .enumerate()
        .map(|(i, band)| {
            let group = breakdown.age_band(band);
            Bar::new(i as f64, group.churn_rate * 100.0)
                .name(format!("{} ({} customers)", band.label(), group.count))
                .fill(churn_rate_color(group.churn_rate))
                .width(0.6)
        })
        .collect();

    Plot::new("churn_by_age_plot")
        .height(280.0)
        .x_axis_label("Age band")
        .y_axis_label("Churn rate (%)")
        .x_axis_formatter(|mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > f64::EPSILON || idx < 0.0 {
                return String::new();
            }
            AgeBand::ALL
                .get(idx as usize)
                .map(|band| band.label().to_string())
                .unwrap_or_default()
        })
        .include_y(0.0)
        .include_y(100.0)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Churn rate"));
        });
}
