// src/bin/assign_codes.rs
use color_eyre::eyre::{Result, eyre};

use proj_prep::{cli, log, runner};

fn main() -> Result<()> {
    color_eyre::install()?;
    log::init_log_file("assign_codes.log".into());

    let params = cli::assign_params().map_err(|e| eyre!(e.to_string()))?;
    let summary = runner::run_assign(&params).map_err(|e| eyre!(e.to_string()))?;

    println!("✓ Assigned codes to {} projects", summary.rows);
    println!("✓ Table written to: {}", summary.path.display());
    Ok(())
}
