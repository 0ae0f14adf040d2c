// tests/assign_pipeline.rs
use std::fs;
use std::path::{Path, PathBuf};

use proj_prep::csv::Delim;
use proj_prep::params::Params;
use proj_prep::runner;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("proj_prep_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn write_tsv(dir: &Path, contents: &str) -> PathBuf {
    let p = dir.join("Projects.tsv");
    fs::write(&p, contents).unwrap();
    p
}

fn in_place_params(input: PathBuf) -> Params {
    Params { out: input.clone(), input, format: Delim::Tsv }
}

#[test]
fn assigns_codes_dedups_and_cleans_in_place() {
    let dir = tmp_dir("assign_basic");
    let input = write_tsv(
        &dir,
        "Project title\tProject description\n\
         Genomes\tStudy of X\n\
         Genomes\tStudy of X\n\
         Proteins\tA _marked_ *description* with `code` and #tags\n",
    );

    let summary = runner::run_assign(&in_place_params(input.clone())).unwrap();
    assert_eq!(summary.rows, 2); // exact duplicate collapsed
    assert_eq!(summary.path, input);

    let text = fs::read_to_string(&input).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Project title\tProject description\tAssigned_Code");
    assert_eq!(lines[1], "Genomes\tStudy of X\tB2000");
    assert_eq!(
        lines[2],
        "Proteins\tA marked description with code and tags\tB2001"
    );
}

#[test]
fn duplicate_descriptions_abort_without_touching_the_file() {
    let dir = tmp_dir("assign_dup_desc");
    // Distinct before cleaning, identical after.
    let original = "Project title\tProject description\n\
                    One\tA_Study\n\
                    Two\tA*Study\n";
    let input = write_tsv(&dir, original);

    let err = runner::run_assign(&in_place_params(input.clone())).unwrap_err();
    assert!(err.to_string().contains("duplicate project description"), "{err}");

    // No partial write: file is byte-for-byte what we started with.
    assert_eq!(fs::read_to_string(&input).unwrap(), original);
}

#[test]
fn rerunning_over_own_output_is_stable() {
    let dir = tmp_dir("assign_rerun");
    let input = write_tsv(
        &dir,
        "Project title\tProject description\n\
         One\tfirst study\n\
         Two\tsecond study\n",
    );
    let params = in_place_params(input.clone());

    runner::run_assign(&params).unwrap();
    let first = fs::read_to_string(&input).unwrap();

    runner::run_assign(&params).unwrap();
    let second = fs::read_to_string(&input).unwrap();

    assert_eq!(first, second);
}

#[test]
fn over_capacity_aborts_without_touching_the_file() {
    let dir = tmp_dir("assign_capacity");
    let mut contents = String::from("Project title\tProject description\n");
    for i in 0..1001 {
        contents.push_str(&format!("Title {i}\tdescription {i}\n"));
    }
    let input = write_tsv(&dir, &contents);

    let err = runner::run_assign(&in_place_params(input.clone())).unwrap_err();
    assert!(err.to_string().contains("exceed the code space"), "{err}");
    assert_eq!(fs::read_to_string(&input).unwrap(), contents);
}

#[test]
fn exactly_one_thousand_rows_span_the_full_code_range() {
    let dir = tmp_dir("assign_full_range");
    let mut contents = String::from("Project title\tProject description\n");
    for i in 0..1000 {
        contents.push_str(&format!("Title {i}\tdescription {i}\n"));
    }
    let input = write_tsv(&dir, &contents);

    runner::run_assign(&in_place_params(input.clone())).unwrap();
    let text = fs::read_to_string(&input).unwrap();
    assert!(text.contains("\tB2000\n"));
    assert!(text.contains("\tB2999\n"));
    assert!(!text.contains("\tB21000"));
}

#[test]
fn missing_input_file_is_named_in_the_error() {
    let dir = tmp_dir("assign_missing");
    let params = in_place_params(dir.join("nope.tsv"));
    let err = runner::run_assign(&params).unwrap_err();
    assert!(err.to_string().contains("nope.tsv"), "{err}");
}

#[test]
fn out_flag_redirects_instead_of_overwriting() {
    let dir = tmp_dir("assign_redirect");
    let original = "Project title\tProject description\nOne\tonly study\n";
    let input = write_tsv(&dir, original);
    let out = dir.join("coded.tsv");

    let params = Params { input: input.clone(), out: out.clone(), format: Delim::Tsv };
    runner::run_assign(&params).unwrap();

    assert_eq!(fs::read_to_string(&input).unwrap(), original);
    assert!(fs::read_to_string(&out).unwrap().contains("B2000"));
}
