//! Directory-level conversion.
//!
//! Lists a source directory, converts every file with the theme extension
//! and writes `<Identity>.yaml` into the destination directory. Files are
//! processed in file-name order; the first failure stops the batch and
//! files already written are left in place.
//!
//! Two inputs deriving the same identity write the same output file. The
//! later one wins; the collision is logged and reported, not rejected.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{ConvertError, Result};
use crate::parser::parse_file;
use crate::serialize::write_yaml;

/// Default source directory.
pub const DEFAULT_SOURCE_DIR: &str = "src";
/// Default destination directory.
pub const DEFAULT_DEST_DIR: &str = "themes";
/// Default input file extension.
pub const THEME_EXTENSION: &str = ".vstheme";

/// Where to read themes from and where to write them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    pub source_dir: PathBuf,
    pub dest_dir: PathBuf,
    /// Suffix matched against file names, including the dot.
    pub extension: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            dest_dir: PathBuf::from(DEFAULT_DEST_DIR),
            extension: THEME_EXTENSION.to_string(),
        }
    }
}

/// One converted file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converted {
    pub input: PathBuf,
    pub output: PathBuf,
    pub identity: String,
}

/// An output written by more than one input in the same run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub output: PathBuf,
    /// Input whose output was overwritten.
    pub previous: PathBuf,
    /// Input that wrote the surviving output.
    pub current: PathBuf,
}

/// Result of a successful batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub converted: Vec<Converted>,
    pub collisions: Vec<Collision>,
}

impl BatchReport {
    /// Number of distinct output files.
    pub fn outputs(&self) -> usize {
        self.converted.len() - self.collisions.len()
    }
}

/// Lists files in `dir` whose name ends with `extension`, sorted by name.
///
/// Only regular files are returned; subdirectories are not entered.
pub fn theme_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let list_err = |source: std::io::Error| ConvertError::ListDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(list_err)? {
        let path = entry.map_err(list_err)?.path();
        let matches = path
            .file_name()
            .map(|name| name.to_string_lossy().ends_with(extension))
            .unwrap_or(false);
        if matches && path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Converts a single file into `dest_dir`, returning the output path.
pub fn convert_file(input: &Path, dest_dir: &Path) -> Result<Converted> {
    let record = parse_file(input)?;
    let output = dest_dir.join(record.file_name());
    write_yaml(&record, &output)?;

    info!(input = %input.display(), output = %output.display(), "converted theme");
    Ok(Converted {
        input: input.to_path_buf(),
        output,
        identity: record.identity,
    })
}

/// Converts every theme file in the configured source directory.
pub fn convert_dir(config: &BatchConfig) -> Result<BatchReport> {
    let files = theme_files(&config.source_dir, &config.extension)?;
    info!(
        count = files.len(),
        source = %config.source_dir.display(),
        "found theme files"
    );

    let mut report = BatchReport::default();
    let mut written: HashMap<PathBuf, PathBuf> = HashMap::new();

    for input in &files {
        let converted = convert_file(input, &config.dest_dir)?;

        if let Some(previous) = written.insert(converted.output.clone(), input.clone()) {
            warn!(
                output = %converted.output.display(),
                previous = %previous.display(),
                current = %input.display(),
                "identity collision; earlier output overwritten"
            );
            report.collisions.push(Collision {
                output: converted.output.clone(),
                previous,
                current: input.clone(),
            });
        }
        report.converted.push(converted);
    }

    Ok(report)
}
