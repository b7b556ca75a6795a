//! CSV output for flattened worksheets.
//!
//! [`flatten_file`] is the file-in/file-out entry point: it reads a long
//! worksheet, reshapes it and writes the wide result, producing no output
//! file unless every step succeeds.

pub mod writer;

use std::path::{Path, PathBuf};

use tracing::info;

use wsf_ingest::read_csv_table;
use wsf_model::{FlattenOptions, Result};
use wsf_transform::{ReshapeSummary, reshape_table};

pub use writer::{write_csv, write_csv_file};

/// Result of a successful [`flatten_file`] run.
#[derive(Debug, Clone)]
pub struct FlattenOutcome {
    pub output_path: PathBuf,
    pub summary: ReshapeSummary,
}

/// `flattened-<file name>` next to the input, with `.csv` appended when the
/// name does not already end in it.
pub fn default_output_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "worksheet".to_string());
    let mut output_name = format!("flattened-{name}");
    let has_csv_extension = Path::new(&name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if !has_csv_extension {
        output_name.push_str(".csv");
    }
    input.with_file_name(output_name)
}

/// Flattens the worksheet at `input` into `output`.
pub fn flatten_file(input: &Path, output: &Path, options: &FlattenOptions) -> Result<FlattenOutcome> {
    options.validate()?;
    let table = read_csv_table(input)?;
    info!(
        input = %input.display(),
        row_count = table.rows.len(),
        column_count = table.headers.len(),
        "loaded worksheet"
    );
    let reshaped = reshape_table(&table, options)?;
    write_csv_file(output, &reshaped.header, &reshaped.rows)?;
    info!(output = %output.display(), row_count = reshaped.rows.len(), "wrote flattened worksheet");
    Ok(FlattenOutcome {
        output_path: output.to_path_buf(),
        summary: reshaped.summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_name() {
        assert_eq!(
            default_output_path(Path::new("/data/worksheet.csv")),
            PathBuf::from("/data/flattened-worksheet.csv")
        );
        assert_eq!(
            default_output_path(Path::new("export.CSV")),
            PathBuf::from("flattened-export.CSV")
        );
        assert_eq!(
            default_output_path(Path::new("/data/export.txt")),
            PathBuf::from("/data/flattened-export.txt.csv")
        );
    }
}
