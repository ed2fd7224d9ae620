use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::state::AppState;
use crate::ui::panels::{self, UiState};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchDashApp {
    pub state: AppState,
    ui_state: UiState,
}

impl LaunchDashApp {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            ui_state: UiState::default(),
        }
    }
}

impl eframe::App for LaunchDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Bottom bar: dataset summary ----
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui: &mut Ui| {
            let ds = &self.state.dataset;
            ui.label(
                RichText::new(format!(
                    "{} launches from {} sites",
                    ds.len(),
                    ds.sites.len()
                ))
                .weak(),
            );
        });

        // ---- Central panel: the dashboard page ----
        egui::CentralPanel::default().show(ctx, |ui: &mut Ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    panels::dashboard(ui, &mut self.state, &mut self.ui_state);
                });
        });
    }
}
