// src/file.rs

use std::{
    error::Error,
    fs,
    path::Path,
};

/// Read a whole text file, naming the path in the error.
/// A missing input table is an authoring problem, so say which file.
pub fn read_text(path: &Path) -> Result<String, Box<dyn Error>> {
    if !path.exists() {
        return Err(format!("input file not found: {}", path.display()).into());
    }
    Ok(fs::read_to_string(path)?)
}

/// Write a whole text file, creating parent directories as needed.
pub fn write_text(path: &Path, contents: &str) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents)?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
