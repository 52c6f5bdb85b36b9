use eframe::egui;

use crate::state::ViewState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ClassPlotApp {
    pub state: ViewState,
}

impl eframe::App for ClassPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: toolbar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: overlay plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::overlay_plot(ui, &self.state);
        });
    }
}

/// Open the interactive viewer window on the given state.
pub fn show(state: ViewState) -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "classplot",
        options,
        Box::new(move |_cc| Ok(Box::new(ClassPlotApp { state }))),
    )
}
