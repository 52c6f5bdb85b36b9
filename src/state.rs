use crate::cli::ScaleMode;
use crate::data::model::Curve;

// ---------------------------------------------------------------------------
// Viewer state
// ---------------------------------------------------------------------------

/// The full viewer state, independent of rendering.
pub struct ViewState {
    /// Resolved curves, one per (file, field) pair.
    pub curves: Vec<Curve>,

    /// Active axis scaling; switchable from the top bar.
    pub scale: ScaleMode,

    /// Window/top-bar title, built from the file roots.
    pub title: String,

    /// Label of the independent variable (first file, column 0).
    pub x_label: String,

    /// Label of the dependent axis; empty when the curves plot mixed fields.
    pub y_label: String,

    /// Whether the legend is drawn.
    pub show_legend: bool,
}

impl ViewState {
    pub fn new(curves: Vec<Curve>, scale: ScaleMode, title: String, x_label: String) -> Self {
        let y_label = Curve::common_display_name(&curves)
            .unwrap_or_default()
            .to_string();
        Self {
            curves,
            scale,
            title,
            x_label,
            y_label,
            show_legend: true,
        }
    }

    pub fn set_scale(&mut self, scale: ScaleMode) {
        self.scale = scale;
    }

    pub fn toggle_legend(&mut self) {
        self.show_legend = !self.show_legend;
    }

    /// One-line summary shown in the top bar.
    pub fn status_line(&self) -> String {
        format!("{} curves, {} scale", self.curves.len(), self.scale)
    }
}
