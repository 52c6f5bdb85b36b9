//! Replay-script emission.
//!
//! Every invocation drops a standalone matplotlib script next to the first
//! input, replaying the exact plotting calls with absolute paths, so a
//! figure can be regenerated (and tweaked) without this tool.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::cli::ScaleMode;
use crate::data::model::SpectrumFile;
use crate::data::select::ResolvedSelection;
use crate::error::PlotError;

/// Where the script goes: first input path plus `.py`.
pub fn script_path(first: &Path) -> PathBuf {
    let mut name = first.as_os_str().to_os_string();
    name.push(".py");
    PathBuf::from(name)
}

/// Write the replay script; returns its path.
pub fn write(
    files: &[SpectrumFile],
    resolved: &ResolvedSelection,
    scale: ScaleMode,
) -> Result<PathBuf, PlotError> {
    let path = script_path(&files[0].path);
    std::fs::write(&path, render(files, resolved, scale))?;
    log::info!("replay script written to {}", path.display());
    Ok(path)
}

/// Render the script text.
///
/// List literals are serialized as JSON: a JSON array of strings is a valid
/// Python list, escaping included.
pub fn render(
    files: &[SpectrumFile],
    resolved: &ResolvedSelection,
    scale: ScaleMode,
) -> String {
    let full_paths: Vec<String> = files
        .iter()
        .map(|f| {
            std::fs::canonicalize(&f.path)
                .unwrap_or_else(|_| f.path.clone())
                .to_string_lossy()
                .into_owned()
        })
        .collect();

    // Display names of the selected fields, taken from the first file.
    let tex_names: Vec<&str> = resolved.columns[0]
        .iter()
        .map(|&index| files[0].columns[index].display_name.as_str())
        .collect();

    let plot_call = match scale {
        ScaleMode::Lin => "plot",
        ScaleMode::LogLog => "loglog",
        ScaleMode::LogLin => "semilogx",
    };

    let mut text = String::new();
    text.push_str("import matplotlib.pyplot as plt\n");
    text.push_str("import numpy as np\n\n");
    let _ = writeln!(text, "files = {}", python_list(&full_paths));
    text.push_str("data = []\n");
    text.push_str("for data_file in files:\n");
    text.push_str("    data.append(np.loadtxt(data_file))\n\n");
    let _ = writeln!(text, "selection = {}", python_list(&resolved.selection));
    let _ = writeln!(text, "tex_names = {}", python_list(&tex_names));
    text.push_str("\nfig, ax = plt.subplots()\n");

    for (file_index, (file, indices)) in files.iter().zip(&resolved.columns).enumerate() {
        for (name, &column) in resolved.selection.iter().zip(indices) {
            let label = format!("{}: {}", file.root, name);
            let _ = writeln!(
                text,
                "ax.{plot_call}(data[{file_index}][:, 0], data[{file_index}][:, {column}], \
                 label={})",
                python_str(&label),
            );
        }
    }

    text.push_str("ax.legend(loc='lower right')\n");
    text.push_str("plt.show()\n");
    text
}

fn python_list<S: AsRef<str>>(items: &[S]) -> String {
    let items: Vec<&str> = items.iter().map(AsRef::as_ref).collect();
    serde_json::to_string(&items).unwrap_or_else(|_| "[]".to_string())
}

fn python_str(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}
