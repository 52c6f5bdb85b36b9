use std::fmt;
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, ValueEnum, ValueHint};

use crate::error::PlotError;

// ---------------------------------------------------------------------------
// Command line surface
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Compare CLASS output spectra: superimpose files or plot their ratio",
    after_help = "A standard usage would be, for instance:\n  \
                  classplot output/test_pk.dat output/test_pk_nl_density.dat\n  \
                  classplot output/wmap_cl.dat output/planck_cl.dat -s TT"
)]
pub struct Cli {
    /// Files to plot
    #[arg(value_hint = ValueHint::FilePath)]
    pub files: Vec<PathBuf>,

    /// Plot the ratio of the spectra, taking the first file as reference
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub ratio: bool,

    /// Fields to plot, named as they appear in the file headers
    #[arg(short, long, num_args = 1..)]
    pub selection: Option<Vec<String>>,

    /// Scale to use for the plot
    #[arg(long, value_enum)]
    pub scale: Option<ScaleMode>,

    /// Write the figure to a .png next to the first file instead of
    /// opening a window
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub print: bool,

    /// Also plot the outputs of other redshifts sharing the first file's
    /// base name (long-only: -r belongs to --ratio)
    #[arg(long, action = ArgAction::SetTrue)]
    pub repeat: bool,
}

/// Axis scaling of the figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScaleMode {
    /// Linear on both axes
    #[value(name = "lin")]
    Lin,
    /// Logarithmic on both axes
    #[value(name = "loglog")]
    LogLog,
    /// Logarithmic x, linear y
    #[value(name = "loglin")]
    LogLin,
}

impl ScaleMode {
    pub fn log_x(self) -> bool {
        !matches!(self, ScaleMode::Lin)
    }

    pub fn log_y(self) -> bool {
        matches!(self, ScaleMode::LogLog)
    }
}

impl fmt::Display for ScaleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScaleMode::Lin => "lin",
            ScaleMode::LogLog => "loglog",
            ScaleMode::LogLin => "loglin",
        };
        write!(f, "{name}")
    }
}

// ---------------------------------------------------------------------------
// Argument policy
// ---------------------------------------------------------------------------

/// The final (selection, scale) pair once defaults and filename inference
/// are applied. An explicit `--scale` always wins; an explicit selection
/// defaults the scale to linear.
pub fn effective_selection(args: &Cli) -> Result<(Vec<String>, ScaleMode), PlotError> {
    match &args.selection {
        Some(selection) => Ok((selection.clone(), args.scale.unwrap_or(ScaleMode::Lin))),
        None => {
            let (selection, inferred) = infer_selection(&args.files[0])?;
            Ok((selection, args.scale.unwrap_or(inferred)))
        }
    }
}

/// Infer what to plot from the first file's name: `cl` files default to the
/// TT spectrum, `pk` files to the power spectrum, both on loglog axes.
fn infer_selection(first: &Path) -> Result<(Vec<String>, ScaleMode), PlotError> {
    let name = first.to_string_lossy();
    if name.contains("cl") {
        Ok((vec!["TT".to_string()], ScaleMode::LogLog))
    } else if name.contains("pk") {
        Ok((vec!["P".to_string()], ScaleMode::LogLog))
    } else {
        Err(PlotError::UnknownType(
            "please specify a field to plot".to_string(),
        ))
    }
}

/// Reject ratio requests: under two files that is a file-count problem,
/// otherwise the mode is simply not implemented yet.
pub fn ratio_guard(args: &Cli) -> Result<(), PlotError> {
    if !args.ratio {
        return Ok(());
    }
    if args.files.len() < 2 {
        return Err(PlotError::NumberOfFiles(
            "if you want me to compute a ratio between two files, I strongly \
             encourage you to give me at least two of them"
                .to_string(),
        ));
    }
    Err(PlotError::Input(
        "sorry, ratio plots are not working yet".to_string(),
    ))
}

// ---------------------------------------------------------------------------
// --repeat expansion
// ---------------------------------------------------------------------------

/// Expand each input with its redshift siblings: files in the same
/// directory whose name differs only in the `z<digits>` index. Files
/// without an index are kept as they are.
pub fn expand_repeat(files: &[PathBuf]) -> Result<Vec<PathBuf>, PlotError> {
    let mut expanded: Vec<PathBuf> = Vec::new();
    let push_unique = |list: &mut Vec<PathBuf>, path: PathBuf| {
        if !list.contains(&path) {
            list.push(path);
        }
    };

    for file in files {
        let Some(name) = file.file_name().and_then(|n| n.to_str()) else {
            push_unique(&mut expanded, file.clone());
            continue;
        };
        let Some((prefix, suffix)) = split_redshift(name) else {
            log::warn!(
                "--repeat: {} has no z<N> redshift index, leaving it alone",
                file.display()
            );
            push_unique(&mut expanded, file.clone());
            continue;
        };

        let dir = match file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut siblings: Vec<(u64, String)> = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let sibling = entry.file_name();
            if let Some(sibling) = sibling.to_str() {
                if let Some(index) = redshift_index(sibling, prefix, suffix) {
                    siblings.push((index, sibling.to_string()));
                }
            }
        }
        siblings.sort();
        for (_, sibling) in siblings {
            push_unique(&mut expanded, file.with_file_name(sibling));
        }
    }
    Ok(expanded)
}

/// Split a file name around its first `z<digits>` run, keeping the `z` in
/// the prefix. `lcdm_z2_pk.dat` → (`lcdm_z`, `_pk.dat`).
fn split_redshift(name: &str) -> Option<(&str, &str)> {
    for (i, _) in name.match_indices('z') {
        let rest = &name[i + 1..];
        let digits = rest.chars().take_while(char::is_ascii_digit).count();
        if digits > 0 {
            return Some((&name[..i + 1], &rest[digits..]));
        }
    }
    None
}

/// The redshift index of `name` if it matches `prefix<digits>suffix`.
fn redshift_index(name: &str, prefix: &str, suffix: &str) -> Option<u64> {
    let rest = name.strip_prefix(prefix)?;
    let digits = rest.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let (index, tail) = rest.split_at(digits);
    if tail != suffix {
        return None;
    }
    index.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_flag_surface_parses() {
        let args = Cli::parse_from([
            "classplot", "a_cl.dat", "b_cl.dat", "-s", "TT", "EE", "--scale", "loglog",
            "-p", "--repeat",
        ]);
        assert_eq!(args.files.len(), 2);
        assert_eq!(
            args.selection,
            Some(vec!["TT".to_string(), "EE".to_string()])
        );
        assert_eq!(args.scale, Some(ScaleMode::LogLog));
        assert!(args.print);
        assert!(args.repeat);
        assert!(!args.ratio);
    }

    #[test]
    fn short_r_means_ratio() {
        let args = Cli::parse_from(["classplot", "a_cl.dat", "b_cl.dat", "-r"]);
        assert!(args.ratio);
    }

    fn bare(files: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("classplot").chain(files.iter().copied()))
    }

    #[test]
    fn cl_files_default_to_tt_on_loglog() {
        let (selection, scale) = effective_selection(&bare(&["output/wmap_cl.dat"])).unwrap();
        assert_eq!(selection, vec!["TT"]);
        assert_eq!(scale, ScaleMode::LogLog);
    }

    #[test]
    fn pk_files_default_to_p_on_loglog() {
        let (selection, scale) = effective_selection(&bare(&["output/test_pk.dat"])).unwrap();
        assert_eq!(selection, vec!["P"]);
        assert_eq!(scale, ScaleMode::LogLog);
    }

    #[test]
    fn unrecognised_file_without_selection_is_a_type_error() {
        let err = effective_selection(&bare(&["background.dat"])).unwrap_err();
        assert!(matches!(err, PlotError::UnknownType(_)));
    }

    #[test]
    fn explicit_selection_defaults_to_linear_scale() {
        let args = Cli::parse_from(["classplot", "background.dat", "-s", "rho_g"]);
        let (selection, scale) = effective_selection(&args).unwrap();
        assert_eq!(selection, vec!["rho_g"]);
        assert_eq!(scale, ScaleMode::Lin);
    }

    #[test]
    fn explicit_scale_beats_inference() {
        let args = Cli::parse_from(["classplot", "test_pk.dat", "--scale", "lin"]);
        let (_, scale) = effective_selection(&args).unwrap();
        assert_eq!(scale, ScaleMode::Lin);
    }

    #[test]
    fn ratio_needs_two_files_before_anything_else() {
        let err = ratio_guard(&Cli::parse_from(["classplot", "a_cl.dat", "-r"])).unwrap_err();
        assert!(matches!(err, PlotError::NumberOfFiles(_)));
    }

    #[test]
    fn ratio_with_enough_files_is_still_unimplemented() {
        let err =
            ratio_guard(&Cli::parse_from(["classplot", "a_cl.dat", "b_cl.dat", "-r"]))
                .unwrap_err();
        assert!(matches!(err, PlotError::Input(_)));
    }

    #[test]
    fn redshift_names_split_around_the_index() {
        assert_eq!(split_redshift("lcdm_z2_pk.dat"), Some(("lcdm_z", "_pk.dat")));
        assert_eq!(split_redshift("lcdm_z12_pk.dat"), Some(("lcdm_z", "_pk.dat")));
        assert_eq!(split_redshift("wmap_cl.dat"), None);
        assert_eq!(redshift_index("lcdm_z3_pk.dat", "lcdm_z", "_pk.dat"), Some(3));
        assert_eq!(redshift_index("lcdm_z3_cl.dat", "lcdm_z", "_pk.dat"), None);
    }

    #[test]
    fn repeat_collects_sorted_siblings() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["lcdm_z2_pk.dat", "lcdm_z1_pk.dat", "lcdm_z10_pk.dat", "other.dat"] {
            std::fs::write(dir.path().join(name), "# 1:x 2:P\n1.0 2.0\n").unwrap();
        }
        let expanded = expand_repeat(&[dir.path().join("lcdm_z2_pk.dat")]).unwrap();
        let names: Vec<String> = expanded
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["lcdm_z1_pk.dat", "lcdm_z2_pk.dat", "lcdm_z10_pk.dat"]);
    }
}
