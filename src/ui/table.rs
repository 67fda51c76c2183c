use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

/// Render the launches currently in the scatter selection as a table.
pub fn record_table(ui: &mut Ui, state: &AppState) {
    let dataset = &state.dataset;
    let rows = &state.visible_indices;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(50.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in ["Launch Site", "Payload Mass (kg)", "class", "Booster Version Category"] {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, rows.len(), |mut row| {
                let rec = &dataset.records[rows[row.index()]];
                row.col(|ui: &mut Ui| {
                    ui.label(&rec.site);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(format!("{:.1}", rec.payload_mass_kg));
                });
                row.col(|ui: &mut Ui| {
                    ui.label(rec.outcome.class().to_string());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&rec.booster_category);
                });
            });
        });
}
