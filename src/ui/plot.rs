use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::cli::ScaleMode;
use crate::state::ViewState;

// ---------------------------------------------------------------------------
// Overlay plot (central panel)
// ---------------------------------------------------------------------------

/// Render the curve overlay in the central panel.
///
/// egui_plot has no log axes, so log scales plot `log10` of the data and
/// say so in the axis label; non-positive samples are skipped there.
pub fn overlay_plot(ui: &mut Ui, state: &ViewState) {
    if state.curves.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Nothing to plot");
        });
        return;
    }

    let scale = state.scale;
    let mut plot = Plot::new("overlay")
        .x_axis_label(axis_label(&state.x_label, scale.log_x()))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);
    if !state.y_label.is_empty() {
        plot = plot.y_axis_label(axis_label(&state.y_label, scale.log_y()));
    }
    if state.show_legend {
        plot = plot.legend(Legend::default());
    }

    plot.show(ui, |plot_ui| {
        for curve in &state.curves {
            let points: PlotPoints = curve
                .x
                .iter()
                .zip(curve.y.iter())
                .filter_map(|(&x, &y)| scaled_point(x, y, scale))
                .collect();

            let (r, g, b) = curve.color;
            let line = Line::new(points)
                .name(&curve.label)
                .color(Color32::from_rgb(r, g, b))
                .width(1.5);

            plot_ui.line(line);
        }
    });
}

/// Apply the scale transform to one sample; `None` drops samples a log
/// axis cannot show.
fn scaled_point(x: f64, y: f64, scale: ScaleMode) -> Option<[f64; 2]> {
    let x = if scale.log_x() {
        if x <= 0.0 {
            return None;
        }
        x.log10()
    } else {
        x
    };
    let y = if scale.log_y() {
        if y <= 0.0 {
            return None;
        }
        y.log10()
    } else {
        y
    };
    Some([x, y])
}

fn axis_label(base: &str, log: bool) -> String {
    if log {
        format!("log10({base})")
    } else {
        base.to_string()
    }
}
