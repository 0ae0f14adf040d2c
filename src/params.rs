// src/params.rs
use std::path::PathBuf;
use crate::csv::Delim;

/* ---------------- File defaults ---------------- */

pub const DEFAULT_DATA_FILE: &str = "docs/data/Projects.tsv";
pub const DEFAULT_PAGE_FILE: &str = "docs/index.md";

/* ---------------- Code assignment ---------------- */

// B2 + 3 digits: 1000 distinct codes, B2000..B2999.
pub const CODE_PREFIX: &str = "B2";
pub const CODE_WIDTH: usize = 3;

/* ---------------- Column names (form-export schema) ---------------- */

pub const COL_ASSIGNED_CODE: &str = "Assigned_Code";
pub const COL_DESCRIPTION: &str = "Project description";
pub const COL_TITLE: &str = "Project title";
pub const COL_SUPERVISOR: &str = "Full name";
pub const COL_SUPERVISOR_EMAIL: &str = "Email address";
pub const COL_SCHOOL: &str = "School/Institute";
pub const COL_URL: &str = "URL of research lab or profile page";
pub const COL_COSUP_OPTIN: &str = "Would you like to specify a co-supervisor at this point?";
pub const COL_COSUP_NAME: &str = "Co-supervisor's full name";
pub const COL_COSUP_EMAIL: &str = "Co-supervisor's email address";
pub const COL_PROGRAMMES: &str = "Tick which programme(s) the project is suitable for:";
pub const COL_MAX_STUDENTS: &str =
    "What is the maximum number of students you could take under this project title?";
pub const COL_PART_TIME: &str = "Would this project be suitable for a part time student?";

/* ---------------- Per-run parameters ---------------- */

#[derive(Clone, Debug)]
pub struct Params {
    pub input: PathBuf,       // table to read
    pub out: PathBuf,         // file to write (assign: same as input by default)
    pub format: Delim,        // table file format
}

impl Params {
    /// Defaults for the code-assignment job: rewrite the table in place.
    pub fn for_assign() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_DATA_FILE),
            out: PathBuf::from(DEFAULT_DATA_FILE),
            format: Delim::Tsv,
        }
    }

    /// Defaults for the page-render job: table in, markdown page out.
    pub fn for_render() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_DATA_FILE),
            out: PathBuf::from(DEFAULT_PAGE_FILE),
            format: Delim::Tsv,
        }
    }
}
