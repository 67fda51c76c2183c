use eframe::egui::{self, RichText, Ui};

use crate::data::model::Outcome;
use crate::state::{AppState, DashboardEvent};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the site dropdown and payload slider. Changes are pushed to `events`.
pub fn side_panel(ui: &mut Ui, state: &AppState, events: &mut Vec<DashboardEvent>) {
    ui.heading("Filters");
    ui.separator();

    // ---- Launch site dropdown ----
    ui.strong("Launch site");
    let query_id = egui::Id::new("site_dropdown_query");
    egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(state.site.to_string())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            // Search text lives in egui memory so it survives between frames.
            let mut query: String = ui.data_mut(|d| d.get_temp(query_id).unwrap_or_default());
            ui.add(
                egui::TextEdit::singleline(&mut query)
                    .hint_text("Select a Launch Site here"),
            );
            ui.data_mut(|d| d.insert_temp(query_id, query.clone()));

            for option in state.site_options_matching(&query) {
                let label = option.to_string();
                if ui
                    .selectable_label(state.site == option, label)
                    .clicked()
                    && state.site != option
                {
                    events.push(DashboardEvent::SiteSelected(option));
                }
            }
        });
    ui.label(format!(
        "{} successful launches",
        state.summary.count(Outcome::Success)
    ));
    ui.separator();

    // ---- Payload range ----
    ui.strong("Payload range (kg)");
    let bounds = state.slider;
    let range = state.payload_range;
    let mut low = range.low;
    let mut high = range.high;

    let low_changed = ui
        .add(
            egui::Slider::new(&mut low, bounds.min..=bounds.max)
                .step_by(bounds.step)
                .clamping(egui::SliderClamping::Edits)
                .text("min"),
        )
        .changed();
    let high_changed = ui
        .add(
            egui::Slider::new(&mut high, bounds.min..=bounds.max)
                .step_by(bounds.step)
                .clamping(egui::SliderClamping::Edits)
                .text("max"),
        )
        .changed();

    if low_changed {
        events.push(DashboardEvent::PayloadRangeChanged(range.dragged_low(low)));
    } else if high_changed {
        events.push(DashboardEvent::PayloadRangeChanged(range.dragged_high(high)));
    }

    if ui.small_button("Reset range").clicked() {
        events.push(DashboardEvent::PayloadRangeChanged(
            state.default_payload_range(),
        ));
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / status bar.
pub fn top_bar(ui: &mut Ui, state: &AppState, events: &mut Vec<DashboardEvent>) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("View", |ui: &mut Ui| {
            let mut show_table = state.show_table;
            if ui.checkbox(&mut show_table, "Records table").clicked() {
                events.push(DashboardEvent::ToggleRecordTable);
                ui.close_menu();
            }
            if ui.button("Quit").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });

        ui.separator();

        ui.label(RichText::new("SpaceX Launch Records Dashboard").strong());

        ui.separator();

        ui.label(format!(
            "{}: {} launches loaded, {} in selection",
            state.source_name,
            state.dataset.len(),
            state.visible_indices.len()
        ));
    });
}
