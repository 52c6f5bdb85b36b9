//! Decoding of the CLASS header convention.
//!
//! The last comment line of an output file names every data column:
//!
//! ```text
//! # 1:z    2:proper time [Gyr]    3:conf. time [Mpc]    4:(.)rho_g
//! ```
//!
//! Each descriptor is introduced by an ordinal tag `N:`; the `:` markers are
//! the only reliable structure, so the decoder records the byte offset of
//! every marker and cuts the line into one span per column.

use crate::data::model::ColumnDescriptor;
use crate::data::names;
use crate::error::PlotError;

/// First character of comment lines in CLASS output.
pub const COMMENT_MARKER: char = '#';

/// The ordinal tag of the *next* column (`NN:`) trails the current column's
/// name, so each span ends this many bytes before the offset just past the
/// next marker. Two digits at most, the widest tag CLASS emits.
const ORDINAL_TAG_BACKOFF: usize = 3;

/// Locate the header line: the last line whose first character is `#`.
pub fn header_line(contents: &str) -> Result<&str, PlotError> {
    contents
        .lines()
        .filter(|line| line.starts_with(COMMENT_MARKER))
        .next_back()
        .ok_or_else(|| {
            PlotError::Format("no comment-marked header line found".to_string())
        })
}

/// Byte offsets just past every `:` marker in the header line.
fn marker_offsets(header: &str) -> Vec<usize> {
    header
        .match_indices(':')
        .map(|(pos, _)| pos + 1)
        .collect()
}

/// Cut the header into one `(start, end)` byte span per column.
///
/// The final column runs to the end of the line; every other span stops
/// short of the next column's ordinal tag.
pub fn column_spans(header: &str) -> Vec<(usize, usize)> {
    let offsets = marker_offsets(header);
    offsets
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = match offsets.get(i + 1) {
                Some(&next) => next.saturating_sub(ORDINAL_TAG_BACKOFF).max(start),
                None => header.len(),
            };
            (start, end)
        })
        .collect()
}

/// Decode the header of a whole file into ordered column descriptors.
pub fn decode(contents: &str) -> Result<Vec<ColumnDescriptor>, PlotError> {
    let header = header_line(contents)?;
    let spans = column_spans(header);
    if spans.is_empty() {
        return Err(PlotError::Format(format!(
            "header line contains no column markers: {header:?}"
        )));
    }

    let long_names: Vec<String> = spans
        .iter()
        .map(|&(start, end)| header[start..end].trim().to_string())
        .collect();
    let (short_names, display_names) = names::normalize(&long_names);

    Ok(long_names
        .into_iter()
        .zip(short_names)
        .zip(display_names)
        .map(|((long_name, short_name), display_name)| ColumnDescriptor {
            long_name,
            short_name,
            display_name,
        })
        .collect())
}
