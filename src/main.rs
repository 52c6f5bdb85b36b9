use anyhow::Result;
use clap::{CommandFactory, Parser};

use classplot::cli::{self, Cli};
use classplot::data::{loader, select};
use classplot::state::ViewState;
use classplot::{app, figure, script};

fn main() -> Result<()> {
    env_logger::init();

    let args = Cli::parse();
    if args.files.is_empty() {
        Cli::command().print_help()?;
        return Ok(());
    }
    run(args)
}

fn run(mut args: Cli) -> Result<()> {
    cli::ratio_guard(&args)?;
    let (selection, scale) = cli::effective_selection(&args)?;
    if args.repeat {
        args.files = cli::expand_repeat(&args.files)?;
    }

    let files = loader::load_files(&args.files)?;
    let resolved = select::resolve(&files, &selection)?;
    let curves = select::build_curves(&files, &resolved);

    script::write(&files, &resolved, scale)?;

    let x_label = files[0].columns[0].display_name.clone();
    let title = files
        .iter()
        .map(|f| f.root.as_str())
        .collect::<Vec<_>>()
        .join(" vs ");

    if args.print {
        let out = figure::png_path(&args.files[0]);
        figure::save_png(&curves, scale, &x_label, &out)?;
        println!("figure written to {}", out.display());
        Ok(())
    } else {
        let state = ViewState::new(curves, scale, title, x_label);
        app::show(state).map_err(|e| anyhow::anyhow!("viewer error: {e}"))
    }
}
