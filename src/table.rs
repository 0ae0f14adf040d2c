// src/table.rs
//
// Owned, ordered table of named-column rows.
//
// One Table is loaded per run, mutated in place by the assign pipeline,
// then serialized back out. Nothing here outlives the run.

use std::error::Error;
use std::path::Path;

use crate::csv::{self, Delim};
use crate::file;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Parse a whole document. The first row is always the header row
    /// for this dataset (a form export carries its column names).
    ///
    /// Duplicate header names are rejected: with dict-style row access a
    /// repeated column silently shadows the earlier one, which is how
    /// columns go missing without anyone noticing.
    pub fn parse(text: &str, delim: Delim) -> Result<Table, Box<dyn Error>> {
        let mut parsed = csv::parse_rows(text, delim);
        if parsed.is_empty() {
            return Err("empty table: no header row".into());
        }
        let headers = parsed.remove(0);

        for (i, h) in headers.iter().enumerate() {
            if headers[..i].contains(h) {
                return Err(format!("duplicate column name in header: {:?}", h).into());
            }
        }

        // Pad/truncate every row to header width so column indexing
        // downstream can never run off the end.
        let width = headers.len();
        for row in &mut parsed {
            row.resize(width, s!());
        }

        Ok(Table { headers, rows: parsed })
    }

    pub fn load(path: &Path, delim: Delim) -> Result<Table, Box<dyn Error>> {
        let text = file::read_text(path)?;
        Table::parse(&text, delim)
    }

    pub fn save(&self, path: &Path, delim: Delim) -> Result<(), Box<dyn Error>> {
        file::write_text(path, &self.to_delimited(delim))
    }

    pub fn to_delimited(&self, delim: Delim) -> String {
        csv::rows_to_string(&self.headers, &self.rows, delim)
    }

    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Column index by exact header name.
    pub fn col(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Column index tolerant of trailing whitespace in the header cell.
    /// Form exports sometimes carry a stray newline inside the header
    /// (e.g. a question label ending in "\n"), so match on the trimmed
    /// name when the exact one misses.
    pub fn col_trimmed(&self, name: &str) -> Option<usize> {
        self.col(name)
            .or_else(|| self.headers.iter().position(|h| h.trim_end() == name.trim_end()))
    }

    /// Borrow one field by row index and header name.
    pub fn field(&self, row_ix: usize, name: &str) -> Option<&str> {
        let c = self.col_trimmed(name)?;
        self.rows.get(row_ix).map(|r| r[c].as_str())
    }

    /// Add a column, or overwrite it if a previous run already added one.
    /// `values` must be one per row.
    pub fn set_col(&mut self, name: &str, values: Vec<String>) {
        debug_assert_eq!(values.len(), self.rows.len());

        if let Some(c) = self.col(name) {
            for (row, v) in self.rows.iter_mut().zip(values) {
                row[c] = v;
            }
        } else {
            self.headers.push(s!(name));
            for (row, v) in self.rows.iter_mut().zip(values) {
                row.push(v);
            }
        }
    }
}
