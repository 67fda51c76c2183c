use eframe::egui;

use crate::state::AppState;
use crate::ui::{charts, panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchDashApp {
    pub state: AppState,
}

impl LaunchDashApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for LaunchDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events = Vec::new();

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state, &mut events);
        });

        // ---- Left side panel: site + payload filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &self.state, &mut events);
            });

        // ---- Bottom panel: records table ----
        if self.state.show_table {
            egui::TopBottomPanel::bottom("record_table")
                .resizable(true)
                .default_height(220.0)
                .show(ctx, |ui| {
                    table::record_table(ui, &self.state);
                });
        }

        // ---- Central panel: pie above scatter ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let chart_height = ((ui.available_height() - 80.0) / 2.0).max(120.0);
            charts::outcome_pie(ui, &self.state, chart_height);
            ui.separator();
            charts::payload_scatter(ui, &self.state, chart_height);
        });

        if !events.is_empty() {
            for event in events {
                self.state.apply(event);
            }
            ctx.request_repaint();
        }
    }
}
