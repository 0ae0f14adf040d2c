// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use crate::csv::Delim;
use crate::params::Params;

/// Parameters for the code-assignment job. With no `-o` the table is
/// rewritten in place, which is the normal mode of operation.
pub fn assign_params() -> Result<Params, Box<dyn Error>> {
    let mut params = Params::for_assign();
    let out_given = parse_cli(&mut params, include_str!("assign_help.txt"))?;
    if !out_given {
        params.out = params.input.clone();
    }
    Ok(params)
}

/// Parameters for the page-render job.
pub fn render_params() -> Result<Params, Box<dyn Error>> {
    let mut params = Params::for_render();
    parse_cli(&mut params, include_str!("render_help.txt"))?;
    Ok(params)
}

/// Returns whether `-o` was given explicitly.
fn parse_cli(params: &mut Params, help: &str) -> Result<bool, Box<dyn Error>> {
    let mut out_given = false;
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-i" | "--input" => {
                params.input = PathBuf::from(args.next().ok_or("Missing input path")?);
            }
            "-o" | "--out" => {
                params.out = PathBuf::from(args.next().ok_or("Missing output path")?);
                out_given = true;
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => Delim::Csv,
                    "tsv" => Delim::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "-h" | "--help" => {
                eprintln!("{}", help);
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(out_given)
}
