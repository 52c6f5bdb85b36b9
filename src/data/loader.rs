use std::path::Path;

use crate::data::header;
use crate::data::model::SpectrumFile;
use crate::error::PlotError;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load one CLASS output file: whitespace-delimited numeric matrix plus a
/// trailing comment-marked header line naming the columns.
///
/// The whole file is read in one pass and the handle released; nothing is
/// streamed.
pub fn load_file(path: &Path) -> Result<SpectrumFile, PlotError> {
    let contents = std::fs::read_to_string(path)?;

    let columns = header::decode(&contents)?;
    let data = parse_matrix(&contents)?;

    if data.len() != columns.len() {
        return Err(PlotError::Format(format!(
            "{}: header names {} columns but data rows have {}",
            path.display(),
            columns.len(),
            data.len(),
        )));
    }

    log::info!(
        "loaded {} ({} columns, {} rows)",
        path.display(),
        columns.len(),
        data.first().map_or(0, Vec::len),
    );

    Ok(SpectrumFile::new(path.to_path_buf(), columns, data))
}

/// Load every input independently; the first failure aborts the lot.
pub fn load_files(paths: &[std::path::PathBuf]) -> Result<Vec<SpectrumFile>, PlotError> {
    paths.iter().map(|p| load_file(p)).collect()
}

// ---------------------------------------------------------------------------
// Numeric matrix parsing
// ---------------------------------------------------------------------------

/// Parse the non-comment lines into column-major storage.
///
/// Blank lines are rejected outright: CLASS never writes them, and a
/// trailing one is the classic way a hand-edited file breaks. Ragged rows
/// are rejected too.
fn parse_matrix(contents: &str) -> Result<Vec<Vec<f64>>, PlotError> {
    let mut columns: Vec<Vec<f64>> = Vec::new();

    for (line_no, line) in contents.lines().enumerate() {
        let line_no = line_no + 1;
        if line.starts_with(header::COMMENT_MARKER) {
            continue;
        }
        if line.trim().is_empty() {
            return Err(PlotError::Format(format!(
                "blank line {line_no}: data files must contain no empty lines"
            )));
        }

        let values = parse_row(line, line_no)?;
        if columns.is_empty() {
            columns = values.iter().map(|&v| vec![v]).collect();
        } else if values.len() == columns.len() {
            for (column, value) in columns.iter_mut().zip(values) {
                column.push(value);
            }
        } else {
            return Err(PlotError::Format(format!(
                "line {line_no}: expected {} fields, found {}",
                columns.len(),
                values.len(),
            )));
        }
    }

    if columns.is_empty() {
        return Err(PlotError::Format("file contains no data rows".to_string()));
    }
    Ok(columns)
}

fn parse_row(line: &str, line_no: usize) -> Result<Vec<f64>, PlotError> {
    line.split_whitespace()
        .map(|token| {
            token.parse::<f64>().map_err(|_| {
                PlotError::Format(format!(
                    "line {line_no}: {token:?} is not a number"
                ))
            })
        })
        .collect()
}
