use eframe::egui;

use crate::state::AppState;
use crate::ui::{charts, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SalaryScopeApp {
    pub state: AppState,
}

impl SalaryScopeApp {
    /// Build the app and load the dataset (memoized; blocks once).
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut state = AppState::default();
        state.load_dataset();
        Self { state }
    }
}

impl eframe::App for SalaryScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // A load failure blocks the whole dashboard; no partial rendering.
        if self.state.load_error.is_some() {
            egui::CentralPanel::default().show(ctx, |ui| {
                error_screen(ui, &mut self.state);
            });
            return;
        }

        // ---- Top panel: title, counts, reload ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: KPIs, charts, raw data ----
        egui::CentralPanel::default().show(ctx, |ui| {
            charts::dashboard(ui, &mut self.state);
        });
    }
}

fn error_screen(ui: &mut egui::Ui, state: &mut AppState) {
    let message = state.load_error.clone().unwrap_or_default();
    ui.vertical_centered(|ui: &mut egui::Ui| {
        ui.add_space(ui.available_height() * 0.3);
        ui.heading("Could not load the salary dataset");
        ui.add_space(8.0);
        ui.label(egui::RichText::new(message).color(egui::Color32::LIGHT_RED));
        ui.add_space(12.0);
        if ui.button("Retry").clicked() {
            state.retry_load();
        }
    });
}
