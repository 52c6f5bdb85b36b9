//! Mapping a requested selection onto the columns of each loaded file.
//!
//! Files are decoded independently and may lay their columns out
//! differently; only the short name has to match across files, so the same
//! field can resolve to a different index in every file.

use crate::color;
use crate::data::model::{Curve, SpectrumFile};
use crate::error::PlotError;

// ---------------------------------------------------------------------------
// ResolvedSelection
// ---------------------------------------------------------------------------

/// The validated selection plus, per file, the column index of every
/// selected field. Computed once per invocation and consumed immediately
/// by the curve builder.
#[derive(Debug, Clone)]
pub struct ResolvedSelection {
    /// Final short names, after any forcing.
    pub selection: Vec<String>,
    /// `columns[f][s]` is the index of `selection[s]` in file `f`.
    pub columns: Vec<Vec<usize>>,
}

/// Validate `requested` against the loaded files and resolve it to column
/// indices.
///
/// A two-column first file is taken as single-quantity and self-describing:
/// the selection is forced to its sole dependent column, whatever the
/// caller asked for.
pub fn resolve(
    files: &[SpectrumFile],
    requested: &[String],
) -> Result<ResolvedSelection, PlotError> {
    let first = files.first().ok_or_else(|| {
        PlotError::NumberOfFiles("at least one file is needed to plot".to_string())
    })?;

    let selection: Vec<String> = match first.num_columns() {
        0 | 1 => {
            return Err(PlotError::Format(format!(
                "{}: fewer than two columns, nothing to plot against the \
                 independent variable",
                first.path.display(),
            )));
        }
        2 => vec![first.columns[1].short_name.clone()],
        _ => {
            for name in requested {
                if first.position_of(name).is_none() {
                    return Err(PlotError::Input(format!(
                        "the selection must contain names of the fields in the \
                         specified files. You asked for {name:?} where I only \
                         found {:?}",
                        first.short_names(),
                    )));
                }
            }
            requested.to_vec()
        }
    };

    let columns = files
        .iter()
        .map(|file| {
            selection
                .iter()
                .map(|name| {
                    file.position_of(name).ok_or_else(|| {
                        PlotError::Input(format!(
                            "field {name:?} is not present in {} (available: {:?})",
                            file.path.display(),
                            file.short_names(),
                        ))
                    })
                })
                .collect::<Result<Vec<usize>, PlotError>>()
        })
        .collect::<Result<Vec<Vec<usize>>, PlotError>>()?;

    Ok(ResolvedSelection { selection, columns })
}

// ---------------------------------------------------------------------------
// Curve building
// ---------------------------------------------------------------------------

/// Flatten (file × selection) into renderable curves, file-major, with one
/// distinct colour per curve. Column 0 is the independent variable.
pub fn build_curves(files: &[SpectrumFile], resolved: &ResolvedSelection) -> Vec<Curve> {
    let palette = color::curve_colors(files.len() * resolved.selection.len());
    let mut colors = palette.into_iter();

    let mut curves = Vec::new();
    for (file, indices) in files.iter().zip(&resolved.columns) {
        for (name, &index) in resolved.selection.iter().zip(indices) {
            curves.push(Curve {
                label: format!("{}: {}", file.root, name),
                display_name: file.columns[index].display_name.clone(),
                x: file.column(0).to_vec(),
                y: file.column(index).to_vec(),
                color: colors.next().unwrap_or((128, 128, 128)),
            });
        }
    }
    curves
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::data::model::ColumnDescriptor;

    fn col(short: &str) -> ColumnDescriptor {
        ColumnDescriptor {
            long_name: short.to_string(),
            short_name: short.to_string(),
            display_name: short.to_string(),
        }
    }

    fn file(name: &str, shorts: &[&str]) -> SpectrumFile {
        let columns = shorts.iter().map(|s| col(s)).collect();
        let data = (0..shorts.len())
            .map(|i| vec![i as f64, i as f64 + 1.0])
            .collect();
        SpectrumFile::new(PathBuf::from(name), columns, data)
    }

    fn selection(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn two_column_file_forces_its_dependent_column() {
        let files = vec![file("small_cl.dat", &["l", "TT"])];
        let resolved = resolve(&files, &selection(&["EE"])).unwrap();
        assert_eq!(resolved.selection, vec!["TT"]);
        assert_eq!(resolved.columns, vec![vec![1]]);
    }

    #[test]
    fn unknown_field_is_an_input_error_naming_it() {
        let files = vec![file("test_pk.dat", &["x", "rho", "P"])];
        let err = resolve(&files, &selection(&["TT"])).unwrap_err();
        match err {
            PlotError::Input(msg) => assert!(msg.contains("\"TT\""), "{msg}"),
            other => panic!("expected Input, got {other:?}"),
        }
    }

    #[test]
    fn field_resolves_to_its_column_index() {
        let files = vec![file("test_pk.dat", &["x", "rho", "P"])];
        let resolved = resolve(&files, &selection(&["rho"])).unwrap();
        assert_eq!(resolved.columns, vec![vec![1]]);
    }

    #[test]
    fn same_field_may_sit_at_different_indices_per_file() {
        let files = vec![
            file("a_pk.dat", &["x", "rho", "P"]),
            file("b_pk.dat", &["x", "P", "theta", "rho"]),
        ];
        let resolved = resolve(&files, &selection(&["rho", "P"])).unwrap();
        assert_eq!(resolved.columns, vec![vec![1, 2], vec![3, 1]]);
    }

    #[test]
    fn field_missing_from_a_later_file_names_field_and_file() {
        let files = vec![
            file("a_pk.dat", &["x", "rho", "P"]),
            file("b_pk.dat", &["x", "P"]),
        ];
        let err = resolve(&files, &selection(&["rho"])).unwrap_err();
        match err {
            PlotError::Input(msg) => {
                assert!(msg.contains("\"rho\""), "{msg}");
                assert!(msg.contains("b_pk.dat"), "{msg}");
            }
            other => panic!("expected Input, got {other:?}"),
        }
    }

    #[test]
    fn one_column_file_cannot_be_plotted() {
        let files = vec![file("odd.dat", &["x"])];
        let err = resolve(&files, &selection(&["x"])).unwrap_err();
        assert!(matches!(err, PlotError::Format(_)));
    }

    #[test]
    fn curves_are_file_major_with_root_labels() {
        let files = vec![
            file("a_pk.dat", &["x", "rho", "P"]),
            file("b_pk.dat", &["x", "rho", "P"]),
        ];
        let resolved = resolve(&files, &selection(&["rho", "P"])).unwrap();
        let curves = build_curves(&files, &resolved);
        let labels: Vec<&str> = curves.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["a_pk: rho", "a_pk: P", "b_pk: rho", "b_pk: P"]
        );
        assert_eq!(curves[0].x, files[0].column(0));
        assert_eq!(curves[1].y, files[0].column(2));
    }
}
