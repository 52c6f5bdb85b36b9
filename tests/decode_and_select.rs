//! End-to-end checks: file on disk → decoded header → resolved selection →
//! curves and replay script.

use std::fs;
use std::path::PathBuf;

use classplot::cli::ScaleMode;
use classplot::data::{loader, select};
use classplot::script;

fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn three_column_file_resolves_rho_to_column_one() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        &dir,
        "test_background.dat",
        "# 1:x  2:(.)rho  3:P [Mpc^-3]\n\
         1.0 2.0 3.0\n\
         2.0 4.0 9.0\n",
    );

    let files = loader::load_files(&[path]).unwrap();
    assert_eq!(files[0].short_names(), vec!["x", "rho", "P"]);
    assert_eq!(
        files[0].columns[1].display_name,
        "(8\\pi G/3)rho".to_string()
    );

    let resolved = select::resolve(&files, &["rho".to_string()]).unwrap();
    assert_eq!(resolved.columns, vec![vec![1]]);

    let curves = select::build_curves(&files, &resolved);
    assert_eq!(curves.len(), 1);
    assert_eq!(curves[0].label, "test_background: rho");
    assert_eq!(curves[0].x, vec![1.0, 2.0]);
    assert_eq!(curves[0].y, vec![2.0, 4.0]);
}

#[test]
fn overlay_resolves_per_file_layouts_and_replays() {
    let dir = tempfile::tempdir().unwrap();
    let first = write_file(
        &dir,
        "lcdm_pk.dat",
        "# 1:k (h/Mpc)  2:P (Mpc/h)^3  3:sigma\n\
         0.1 10.0 0.5\n\
         0.2 20.0 0.6\n",
    );
    let second = write_file(
        &dir,
        "lncdm_pk.dat",
        "# 1:k (h/Mpc)  2:sigma  3:P (Mpc/h)^3\n\
         0.1 0.5 11.0\n\
         0.2 0.6 21.0\n",
    );

    let files = loader::load_files(&[first.clone(), second]).unwrap();
    let resolved = select::resolve(&files, &["P".to_string()]).unwrap();
    assert_eq!(resolved.columns, vec![vec![1], vec![2]]);

    let curves = select::build_curves(&files, &resolved);
    let labels: Vec<&str> = curves.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, vec!["lcdm_pk: P", "lncdm_pk: P"]);
    assert_eq!(curves[1].y, vec![11.0, 21.0]);

    let script_path = script::write(&files, &resolved, ScaleMode::LogLog).unwrap();
    assert_eq!(script_path, first.with_file_name("lcdm_pk.dat.py"));
    let text = fs::read_to_string(script_path).unwrap();
    assert!(text.contains("np.loadtxt"));
    assert!(text.contains("ax.loglog(data[1][:, 0], data[1][:, 2], label=\"lncdm_pk: P\")"));
}

#[test]
fn two_column_file_ignores_the_caller_selection() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        &dir,
        "small_cl.dat",
        "# 1:l  2:TT\n\
         2.0 1.0e-10\n\
         3.0 1.1e-10\n",
    );

    let files = loader::load_files(&[path]).unwrap();
    let resolved = select::resolve(&files, &["EE".to_string()]).unwrap();
    assert_eq!(resolved.selection, vec!["TT"]);

    let curves = select::build_curves(&files, &resolved);
    assert_eq!(curves[0].label, "small_cl: TT");
}
