use eframe::egui::{self, RichText, Ui};

use crate::cli::ScaleMode;
use crate::state::ViewState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top toolbar: title, status, scale selector, legend toggle.
pub fn top_bar(ui: &mut Ui, state: &mut ViewState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(RichText::new(&state.title).strong());
        ui.separator();

        ui.label(state.status_line());
        ui.separator();

        ui.strong("Scale");
        egui::ComboBox::from_id_salt("scale_mode")
            .selected_text(state.scale.to_string())
            .show_ui(ui, |ui: &mut Ui| {
                for mode in [ScaleMode::Lin, ScaleMode::LogLog, ScaleMode::LogLin] {
                    if ui
                        .selectable_label(state.scale == mode, mode.to_string())
                        .clicked()
                    {
                        state.set_scale(mode);
                    }
                }
            });
        ui.separator();

        if ui
            .selectable_label(state.show_legend, "Legend")
            .clicked()
        {
            state.toggle_legend();
        }
    });
}
