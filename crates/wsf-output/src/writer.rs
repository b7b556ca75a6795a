use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use tempfile::NamedTempFile;
use tracing::debug;

use wsf_model::{Result, WorksheetError};

fn csv_error(error: &csv::Error) -> WorksheetError {
    WorksheetError::Csv(error.to_string())
}

/// Writes the header and rows as CSV, quoting only where needed.
pub fn write_csv<W: Write>(writer: W, header: &[String], rows: &[Vec<String>]) -> Result<()> {
    let mut writer = WriterBuilder::new().from_writer(writer);
    writer
        .write_record(header)
        .map_err(|error| csv_error(&error))?;
    for row in rows {
        writer.write_record(row).map_err(|error| csv_error(&error))?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes CSV to `path` atomically.
///
/// Rows go to a temporary file in the destination directory which replaces
/// `path` only once everything has been written; on failure `path` is left
/// untouched.
pub fn write_csv_file(path: &Path, header: &[String], rows: &[Vec<String>]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir)?;
    write_csv(temp.as_file_mut(), header, rows)?;
    temp.persist(path).map_err(|error| error.error)?;
    debug!(path = %path.display(), row_count = rows.len(), "wrote csv");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_only_special_fields() {
        let header = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let rows = vec![vec![
            "plain".to_string(),
            "with,comma".to_string(),
            "say \"hi\"\nthere".to_string(),
        ]];
        let mut out = Vec::new();
        write_csv(&mut out, &header, &rows).expect("write csv");
        let text = String::from_utf8(out).expect("utf8");
        assert_eq!(text, "a,b,c\nplain,\"with,comma\",\"say \"\"hi\"\"\nthere\"\n");
    }

    #[test]
    fn empty_cells_stay_empty() {
        let header = vec!["a".to_string(), "b".to_string()];
        let rows = vec![vec![String::new(), "1".to_string()]];
        let mut out = Vec::new();
        write_csv(&mut out, &header, &rows).expect("write csv");
        assert_eq!(String::from_utf8(out).expect("utf8"), "a,b\n,1\n");
    }
}
