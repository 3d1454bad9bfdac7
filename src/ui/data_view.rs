use eframe::egui::{self, Align, Layout, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::{churn_color, gender_color};
use crate::data::filter::{MIN_ANNUAL_INCOME, MIN_SPENDING_SCORE};
use crate::data::model::Gender;
use crate::state::AppState;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// Data management view
// ---------------------------------------------------------------------------

pub fn data_view(ui: &mut Ui, state: &mut AppState) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_min_width(ui.available_width());
        ui.strong("Preprocessing");
        ui.label(format!(
            "Cleaning removes records with a spending score of {MIN_SPENDING_SCORE} or less \
             or an annual income of {MIN_ANNUAL_INCOME}k or less."
        ));
        ui.horizontal(|ui: &mut Ui| {
            if ui.button("Clean Data").clicked() {
                state.clean();
            }
            let modified = state.dataset.is_modified();
            if ui
                .add_enabled(modified, egui::Button::new("Reset to Original"))
                .clicked()
            {
                state.reset();
            }
            if ui.button("Export…").clicked() {
                panels::save_file_dialog(state);
            }
        });
    });

    ui.add_space(8.0);
    filter_bar(ui, state);
    ui.add_space(4.0);
    customer_table(ui, state);
}

fn filter_bar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Show");
        for gender in Gender::ALL {
            let mut checked = state.table_filter.genders.contains(&gender);
            let text = RichText::new(gender.as_str()).color(gender_color(gender));
            if ui.checkbox(&mut checked, text).changed() {
                state.toggle_gender(gender);
            }
        }
        ui.separator();
        let mut churned_only = state.table_filter.churned_only;
        if ui.checkbox(&mut churned_only, "Churned only").changed() {
            state.set_churned_only(churned_only);
        }
        ui.separator();
        ui.label(format!(
            "{} of {} rows",
            state.visible_indices.len(),
            state.dataset.current().len()
        ));
    });
}

fn customer_table(ui: &mut Ui, state: &AppState) {
    let customers = state.dataset.current();
    let headers = ["ID", "Gender", "Age", "Income (k)", "Score", "Churn", "Segment"];

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .columns(Column::auto().at_least(60.0), headers.len() - 1)
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in headers {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, state.visible_indices.len(), |mut row| {
                let c = &customers[state.visible_indices[row.index()]];
                row.col(|ui: &mut Ui| {
                    ui.label(c.id.to_string());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(RichText::new(c.gender.as_str()).color(gender_color(c.gender)));
                });
                row.col(|ui: &mut Ui| {
                    ui.label(c.age.to_string());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(c.annual_income.to_string());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(c.spending_score.to_string());
                });
                row.col(|ui: &mut Ui| {
                    let text = if c.churn { "Yes" } else { "No" };
                    ui.label(RichText::new(text).color(churn_color(c.churn)));
                });
                row.col(|ui: &mut Ui| {
                    ui.label(c.segment());
                });
            });
        });
}
