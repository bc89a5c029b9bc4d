//! Adds a column of unique phone numbers to a table and writes it out

use crate::error::{Error, Result};
use crate::generator::PhoneGenerator;
use crate::parser::parse_csv;
use crate::table::Table;
use crate::writer::write_csv;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Default name of the generated column
pub const DEFAULT_COLUMN: &str = "phone";
/// Default suffix inserted before the output file's extension
pub const DEFAULT_SUFFIX: &str = "_with_phone";
/// How many generated numbers the report keeps as a sample
pub const SAMPLE_SIZE: usize = 5;

/// Knobs for a single augmentation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AugmentOptions {
    /// Column to create or overwrite
    pub column: String,
    /// Inserted between the file stem and its extension
    pub suffix: String,
    /// Fixed RNG seed; OS entropy when unset
    pub seed: Option<u64>,
}

impl Default for AugmentOptions {
    fn default() -> Self {
        Self {
            column: DEFAULT_COLUMN.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
            seed: None,
        }
    }
}

impl AugmentOptions {
    fn generator(&self) -> PhoneGenerator {
        match self.seed {
            Some(seed) => PhoneGenerator::seeded(seed),
            None => PhoneGenerator::from_entropy(),
        }
    }
}

/// Summary of a completed augmentation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AugmentReport {
    /// File that was read
    pub input_path: PathBuf,
    /// File that was written (same as `input_path` for in-memory runs)
    pub output_path: PathBuf,
    /// Name of the generated column
    pub column: String,
    /// Columns present before augmentation
    pub original_columns: Vec<String>,
    /// `(rows, columns)` before augmentation
    pub original_shape: (usize, usize),
    /// `(rows, columns)` after augmentation
    pub new_shape: (usize, usize),
    /// Whether an existing column with the same name was overwritten
    pub replaced_existing: bool,
    /// First few generated numbers
    pub sample: Vec<String>,
}

/// Fill `options.column` with one unique phone number per row, in row order.
pub fn augment_table<R: Rng>(
    table: &mut Table,
    options: &AugmentOptions,
    generator: &mut PhoneGenerator<R>,
) -> Result<AugmentReport> {
    let original_columns: Vec<String> = table.column_names().into_iter().map(String::from).collect();
    let original_shape = table.shape();

    if table.find_column(&options.column).is_some() {
        warn!(
            column = %options.column,
            "column already exists, replacing with new unique numbers"
        );
    }

    let phones: Vec<String> = generator
        .generate(table.row_count())?
        .iter()
        .map(ToString::to_string)
        .collect();
    let sample = phones.iter().take(SAMPLE_SIZE).cloned().collect();

    let replaced_existing = table.set_column(&options.column, phones)?;

    Ok(AugmentReport {
        input_path: table.source_path.clone(),
        output_path: table.source_path.clone(),
        column: options.column.clone(),
        original_columns,
        original_shape,
        new_shape: table.shape(),
        replaced_existing,
        sample,
    })
}

/// Load `path`, add the phone column, and write the result next to it.
///
/// The input file is never modified. Nothing is written when the suffix is
/// rejected or when loading or generation fails.
pub fn augment_file<P: AsRef<Path>>(path: P, options: &AugmentOptions) -> Result<AugmentReport> {
    let path = path.as_ref();

    validate_suffix(&options.suffix)?;
    let output_path = derive_output_path(path, &options.suffix);
    if output_path == path {
        return Err(Error::InvalidSuffix(options.suffix.clone()));
    }

    let mut table = parse_csv(path)?;
    info!(
        path = %path.display(),
        rows = table.row_count(),
        columns = ?table.column_names(),
        "loaded table"
    );

    let mut generator = options.generator();
    let mut report = augment_table(&mut table, options, &mut generator)?;

    write_csv(&table, &output_path)?;
    info!(
        path = %output_path.display(),
        rows = report.new_shape.0,
        "wrote augmented table"
    );

    report.output_path = output_path;
    Ok(report)
}

/// Output path for an augmented copy of `input`.
///
/// `name.csv` becomes `name<suffix>.csv`. For any other extension (or none)
/// the suffix still goes before the extension, so the result never equals
/// the input path as long as `suffix` is non-empty.
pub fn derive_output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default();

    let mut file_name = OsString::from(stem);
    file_name.push(suffix);
    if let Some(ext) = input.extension() {
        file_name.push(".");
        file_name.push(ext);
    }

    input.with_file_name(file_name)
}

/// Reject suffixes that would keep the input file name or move the output
/// into another directory.
pub fn validate_suffix(suffix: &str) -> Result<()> {
    let has_separator = suffix
        .chars()
        .any(|c| c == '/' || c == '\\' || std::path::is_separator(c));
    if suffix.is_empty() || has_separator {
        return Err(Error::InvalidSuffix(suffix.to_string()));
    }
    Ok(())
}

/// True when the path has a `.csv` extension (any case)
pub fn is_csv_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
}
