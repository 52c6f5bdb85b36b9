//! Writes a set of CLASS-style output files under `demo/` so the viewer can
//! be tried without running CLASS:
//!
//! ```text
//! classplot demo/lcdm_cl.dat demo/planck_cl.dat
//! classplot demo/lcdm_z1_pk.dat --repeat
//! classplot demo/background.dat -s rho_g
//! ```

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::Result;

fn gaussian(x: f64, mu: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
}

fn write_table(path: &Path, header: &str, rows: &[Vec<f64>]) -> Result<()> {
    let mut text = String::new();
    text.push_str(header);
    for row in rows {
        for value in row {
            let _ = write!(text, " {value:>14.6e}");
        }
        text.push('\n');
    }
    fs::write(path, text)?;
    Ok(())
}

fn write_background(path: &Path) -> Result<()> {
    let header = "# Table of selected background quantities\n\
                  # 1:z    2:proper time [Gyr]    3:conf. time [Mpc]    \
                  4:(.)rho_g    5:(.)rho_b\n";
    let rows: Vec<Vec<f64>> = (0..200)
        .map(|i| {
            let z = 0.25 * f64::from(i);
            let a = 1.0 / (1.0 + z);
            vec![
                z,
                13.8 * a.powf(1.5),
                1.4e4 * a.sqrt(),
                4.2e-5 * (1.0 + z).powi(4),
                2.1e-3 * (1.0 + z).powi(3),
            ]
        })
        .collect();
    write_table(path, header, &rows)
}

fn write_cl(path: &Path, amplitude: f64, tilt: f64) -> Result<()> {
    let header = "# dimensionless [l(l+1)/2pi] C_l's\n\
                  # 1:l    2:TT    3:EE\n";
    let rows: Vec<Vec<f64>> = (2..2500)
        .step_by(5)
        .map(|l| {
            let l = f64::from(l);
            // A smooth sub-horizon tail with two acoustic bumps.
            let envelope = amplitude * (l / 220.0).powf(tilt) * (-l / 1600.0).exp();
            let peaks = gaussian(l.ln(), 220.0f64.ln(), 0.35, 4.0)
                + gaussian(l.ln(), 540.0f64.ln(), 0.25, 1.6);
            let tt = envelope * (1.0 + peaks);
            vec![l, tt, 0.04 * tt * (l / 400.0).min(1.5)]
        })
        .collect();
    write_table(path, header, &rows)
}

fn write_pk(path: &Path, growth: f64) -> Result<()> {
    let header = "# 1:k (h/Mpc)    2:P (Mpc/h)^3\n";
    let rows: Vec<Vec<f64>> = (0..160)
        .map(|i| {
            let k = 1.0e-4 * 10.0f64.powf(f64::from(i) / 40.0);
            let p = growth * 2.0e5 * k / (1.0 + (k / 0.02).powi(2)).powf(1.7);
            vec![k, p]
        })
        .collect();
    write_table(path, header, &rows)
}

fn main() -> Result<()> {
    let out_dir = Path::new("demo");
    fs::create_dir_all(out_dir)?;

    write_background(&out_dir.join("background.dat"))?;
    write_cl(&out_dir.join("lcdm_cl.dat"), 1.0e-10, 0.96)?;
    write_cl(&out_dir.join("planck_cl.dat"), 1.1e-10, 0.965)?;
    write_pk(&out_dir.join("lcdm_z1_pk.dat"), 0.62)?;
    write_pk(&out_dir.join("lcdm_z2_pk.dat"), 0.40)?;

    println!("Sample CLASS output written to {}", out_dir.display());
    Ok(())
}
