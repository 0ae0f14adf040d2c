// src/runner.rs
use std::error::Error;
use std::path::PathBuf;

use crate::codes::{self, CodeSpec};
use crate::file;
use crate::params::Params;
use crate::render;
use crate::table::Table;

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub rows: usize,
    pub path: PathBuf,
}

/// Code-assignment job: load → dedup → assign → sanitize → validate → save.
///
/// The save step is last on purpose. Every failure above it aborts with
/// the input file untouched, so a bad table never half-overwrites itself.
pub fn run_assign(params: &Params) -> Result<RunSummary, Box<dyn Error>> {
    let mut table = Table::load(&params.input, params.format)?;
    logf!("loaded {} rows from {}", table.len(), params.input.display());

    let dropped = codes::dedup_rows(&mut table);
    if dropped > 0 {
        logf!("dropped {} exact-duplicate row(s)", dropped);
    }

    codes::assign_codes(&mut table, &CodeSpec::default())?;
    codes::sanitize_descriptions(&mut table)?;
    codes::validate_distinct_descriptions(&table)?;

    table.save(&params.out, params.format)?;
    logf!("wrote {} coded rows to {}", table.len(), params.out.display());

    Ok(RunSummary { rows: table.len(), path: params.out.clone() })
}

/// Page-render job: load → render → write.
pub fn run_render(params: &Params) -> Result<RunSummary, Box<dyn Error>> {
    let table = Table::load(&params.input, params.format)?;
    logf!("loaded {} rows from {}", table.len(), params.input.display());

    let page = render::render_index(&table);
    file::write_text(&params.out, &page)?;
    logf!("rendered {} project card(s) to {}", table.len(), params.out.display());

    Ok(RunSummary { rows: table.len(), path: params.out.clone() })
}
