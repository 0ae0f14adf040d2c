// src/codes.rs
//
// Code assignment and the data-quality checks around it.
//
// Pipeline order matters: dedup first (codes are positional), then assign,
// then sanitize the description column, then validate. Validation failing
// means the caller must not write anything.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::params::{CODE_PREFIX, CODE_WIDTH, COL_ASSIGNED_CODE, COL_DESCRIPTION};
use crate::table::Table;

/// Characters stripped from descriptions before they hit the markdown page.
const MARKUP_CHARS: [char; 4] = ['_', '*', '`', '#'];

/* ---------------- Errors ---------------- */

#[derive(Debug, PartialEq, Eq)]
pub enum AssignError {
    /// More rows than the fixed-width code space can name.
    CapacityExceeded { rows: usize, capacity: usize },
    /// Two rows ended up with the same description after sanitization.
    /// Row numbers are 1-based data-row positions (header not counted).
    DuplicateDescription { value: String, first_row: usize, second_row: usize },
    /// The table is missing a column the pipeline needs.
    MissingColumn(String),
}

impl fmt::Display for AssignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignError::CapacityExceeded { rows, capacity } => write!(
                f,
                "{} rows exceed the code space of {}; refusing to assign colliding codes",
                rows, capacity
            ),
            AssignError::DuplicateDescription { value, first_row, second_row } => write!(
                f,
                "duplicate project description after cleaning (rows {} and {}): {:?}",
                first_row, second_row, value
            ),
            AssignError::MissingColumn(name) => {
                write!(f, "table has no {:?} column", name)
            }
        }
    }
}

impl std::error::Error for AssignError {}

/* ---------------- Code spec ---------------- */

#[derive(Clone, Copy, Debug)]
pub struct CodeSpec {
    pub prefix: &'static str,
    pub width: usize,
}

impl CodeSpec {
    pub fn capacity(&self) -> usize {
        10usize.pow(self.width as u32)
    }

    pub fn code_for(&self, position: usize) -> String {
        format!("{}{:0width$}", self.prefix, position, width = self.width)
    }
}

impl Default for CodeSpec {
    fn default() -> Self {
        Self { prefix: CODE_PREFIX, width: CODE_WIDTH }
    }
}

/* ---------------- Pipeline steps ---------------- */

/// Remove rows that are exact duplicates (every cell equal) of an earlier
/// row. First occurrences keep their relative order. Returns the number of
/// rows dropped. Idempotent.
pub fn dedup_rows(table: &mut Table) -> usize {
    let before = table.rows.len();
    let mut seen: HashSet<Vec<String>> = HashSet::with_capacity(before);
    table.rows.retain(|row| seen.insert(row.clone()));
    before - table.rows.len()
}

/// Assign `prefix + zero-padded position` to every row, writing the
/// Assigned_Code column (replacing it on a re-run). Codes are purely
/// positional: same deduplicated ordering, same codes.
pub fn assign_codes(table: &mut Table, spec: &CodeSpec) -> Result<(), AssignError> {
    let rows = table.rows.len();
    let capacity = spec.capacity();
    if rows > capacity {
        return Err(AssignError::CapacityExceeded { rows, capacity });
    }

    let codes = (0..rows).map(|i| spec.code_for(i)).collect();
    table.set_col(COL_ASSIGNED_CODE, codes);
    Ok(())
}

/// Strip the markup control set from one description value.
/// Empty or missing input is just the empty string.
pub fn sanitize_description(value: &str) -> String {
    value.chars().filter(|c| !MARKUP_CHARS.contains(c)).collect()
}

/// Sanitize the description column in place.
pub fn sanitize_descriptions(table: &mut Table) -> Result<(), AssignError> {
    let c = table
        .col_trimmed(COL_DESCRIPTION)
        .ok_or_else(|| AssignError::MissingColumn(s!(COL_DESCRIPTION)))?;

    for row in &mut table.rows {
        row[c] = sanitize_description(&row[c]);
    }
    Ok(())
}

/// Check that no two rows share an identical post-sanitization description.
/// Empty descriptions count: two blank rows collide like any other pair.
pub fn validate_distinct_descriptions(table: &Table) -> Result<(), AssignError> {
    let c = table
        .col_trimmed(COL_DESCRIPTION)
        .ok_or_else(|| AssignError::MissingColumn(s!(COL_DESCRIPTION)))?;

    let mut first_seen: HashMap<&str, usize> = HashMap::with_capacity(table.rows.len());
    for (i, row) in table.rows.iter().enumerate() {
        if let Some(&first) = first_seen.get(row[c].as_str()) {
            return Err(AssignError::DuplicateDescription {
                value: row[c].clone(),
                first_row: first + 1,
                second_row: i + 1,
            });
        }
        first_seen.insert(row[c].as_str(), i);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv::Delim;

    fn table_with_descs(descs: &[&str]) -> Table {
        let mut text = s!("Project title\tProject description\n");
        for (i, d) in descs.iter().enumerate() {
            text.push_str(&format!("Title {}\t{}\n", i, d));
        }
        Table::parse(&text, Delim::Tsv).unwrap()
    }

    #[test]
    fn sanitize_removes_exactly_the_markup_set() {
        assert_eq!(sanitize_description("A_*B#C`D"), "ABCD");
        assert_eq!(sanitize_description(""), "");
        // nothing else is touched
        assert_eq!(sanitize_description("100% [sic] <b>&"), "100% [sic] <b>&");
    }

    #[test]
    fn dedup_keeps_first_occurrence_and_is_idempotent() {
        let mut t = table_with_descs(&["Study of X", "Study of Y", "Study of X"]);
        // rows 0 and 2 are identical except the title; make them exact dups
        t.rows[2] = t.rows[0].clone();

        assert_eq!(dedup_rows(&mut t), 1);
        assert_eq!(t.len(), 2);
        assert_eq!(t.field(0, "Project description"), Some("Study of X"));

        assert_eq!(dedup_rows(&mut t), 0);
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn codes_are_positional_and_deterministic() {
        let mut a = table_with_descs(&["one", "two", "three"]);
        let mut b = a.clone();
        assign_codes(&mut a, &CodeSpec::default()).unwrap();
        assign_codes(&mut b, &CodeSpec::default()).unwrap();

        assert_eq!(a.field(0, COL_ASSIGNED_CODE), Some("B2000"));
        assert_eq!(a.field(2, COL_ASSIGNED_CODE), Some("B2002"));
        assert_eq!(a, b);
    }

    #[test]
    fn reassignment_overwrites_rather_than_duplicating_the_column() {
        let mut t = table_with_descs(&["one", "two"]);
        assign_codes(&mut t, &CodeSpec::default()).unwrap();
        let width = t.headers.len();
        assign_codes(&mut t, &CodeSpec::default()).unwrap();
        assert_eq!(t.headers.len(), width);
    }

    #[test]
    fn full_capacity_fits_and_one_more_fails() {
        let descs: Vec<String> = (0..1000).map(|i| format!("desc {}", i)).collect();
        let refs: Vec<&str> = descs.iter().map(|s| s.as_str()).collect();
        let mut t = table_with_descs(&refs);
        assign_codes(&mut t, &CodeSpec::default()).unwrap();
        assert_eq!(t.field(0, COL_ASSIGNED_CODE), Some("B2000"));
        assert_eq!(t.field(999, COL_ASSIGNED_CODE), Some("B2999"));

        let descs: Vec<String> = (0..1001).map(|i| format!("desc {}", i)).collect();
        let refs: Vec<&str> = descs.iter().map(|s| s.as_str()).collect();
        let mut t = table_with_descs(&refs);
        let err = assign_codes(&mut t, &CodeSpec::default()).unwrap_err();
        assert_eq!(err, AssignError::CapacityExceeded { rows: 1001, capacity: 1000 });
    }

    #[test]
    fn sanitization_can_create_the_duplicate_that_fails_validation() {
        let mut t = table_with_descs(&["A_Study", "A*Study"]);
        sanitize_descriptions(&mut t).unwrap();
        let err = validate_distinct_descriptions(&t).unwrap_err();
        match err {
            AssignError::DuplicateDescription { value, first_row, second_row } => {
                assert_eq!(value, "AStudy");
                assert_eq!((first_row, second_row), (1, 2));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn two_empty_descriptions_are_a_duplicate_pair() {
        let t = table_with_descs(&["", ""]);
        assert!(validate_distinct_descriptions(&t).is_err());
    }

    #[test]
    fn missing_description_column_is_named() {
        let mut t = Table::parse("Only col\nv\n", Delim::Tsv).unwrap();
        let err = sanitize_descriptions(&mut t).unwrap_err();
        assert_eq!(err, AssignError::MissingColumn(s!("Project description")));
    }
}
