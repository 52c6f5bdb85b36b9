use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// ColumnDescriptor – one decoded header entry
// ---------------------------------------------------------------------------

/// One column of a CLASS output file, as decoded from its header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    /// Raw annotated text as it appeared in the header.
    pub long_name: String,
    /// Canonical identifier with scale marker and unit annotation stripped;
    /// the key used for selection lookups.
    pub short_name: String,
    /// Human-readable label: full annotation kept, scale macros expanded.
    pub display_name: String,
}

// ---------------------------------------------------------------------------
// SpectrumFile – one fully loaded input
// ---------------------------------------------------------------------------

/// A loaded output file: its decoded header plus the numeric matrix,
/// stored column-major so a field plots without copying.
///
/// `columns` and `data` are index-aligned and equally long; every data
/// column holds the same number of samples.
#[derive(Debug, Clone)]
pub struct SpectrumFile {
    pub path: PathBuf,
    /// File name up to its first `.`, used in legend labels.
    pub root: String,
    pub columns: Vec<ColumnDescriptor>,
    data: Vec<Vec<f64>>,
}

impl SpectrumFile {
    pub fn new(path: PathBuf, columns: Vec<ColumnDescriptor>, data: Vec<Vec<f64>>) -> Self {
        let root = file_root(&path);
        SpectrumFile {
            path,
            root,
            columns,
            data,
        }
    }

    /// Number of data columns.
    pub fn num_columns(&self) -> usize {
        self.data.len()
    }

    /// Number of samples per column.
    pub fn num_rows(&self) -> usize {
        self.data.first().map_or(0, Vec::len)
    }

    /// Samples of one column.
    pub fn column(&self, index: usize) -> &[f64] {
        &self.data[index]
    }

    /// Ordered short names, for validation messages.
    pub fn short_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.short_name.as_str()).collect()
    }

    /// Column index of a short name, if present.
    pub fn position_of(&self, short_name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.short_name == short_name)
    }
}

/// Base name of a file, everything before the first dot.
fn file_root(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    name.split('.').next().unwrap_or_default().to_string()
}

// ---------------------------------------------------------------------------
// Curve – one line handed to the renderers
// ---------------------------------------------------------------------------

/// One (file, field) pair ready for plotting. Built from a resolved
/// selection and consumed by the window, the PNG backend and the replay
/// script alike.
#[derive(Debug, Clone)]
pub struct Curve {
    /// Legend label, `"{root}: {short_name}"`.
    pub label: String,
    /// Display name of the plotted field, annotation kept.
    pub display_name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub color: (u8, u8, u8),
}

impl Curve {
    /// The display name shared by every curve, if they all plot the same
    /// field; used as the y-axis label of single-quantity figures.
    pub fn common_display_name(curves: &[Curve]) -> Option<&str> {
        let first = curves.first()?;
        curves
            .iter()
            .all(|c| c.display_name == first.display_name)
            .then(|| first.display_name.as_str())
    }
}
