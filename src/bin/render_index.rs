// src/bin/render_index.rs
use color_eyre::eyre::{Result, eyre};

use proj_prep::{cli, log, runner};

fn main() -> Result<()> {
    color_eyre::install()?;
    log::init_log_file("render_index.log".into());

    let params = cli::render_params().map_err(|e| eyre!(e.to_string()))?;
    let summary = runner::run_render(&params).map_err(|e| eyre!(e.to_string()))?;

    println!("✓ Converted {} projects from {}", summary.rows, params.input.display());
    println!("✓ Output written to: {}", summary.path.display());
    Ok(())
}
