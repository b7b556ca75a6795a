use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use indexmap::IndexMap;

use wsf_model::{Result, WorksheetError};

/// A raw data row keyed by header name.
pub type RawRow = IndexMap<String, String>;

/// Header and data rows of a CSV file, cells kept as text.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Position of a header, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Converts each data row into a header-keyed map.
    ///
    /// Cells beyond the header width are dropped; short rows simply lack
    /// the trailing keys.
    pub fn raw_rows(&self) -> Vec<RawRow> {
        self.rows
            .iter()
            .map(|row| {
                self.headers
                    .iter()
                    .zip(row.iter())
                    .map(|(header, value)| (header.clone(), value.clone()))
                    .collect()
            })
            .collect()
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

fn csv_error(error: &csv::Error) -> WorksheetError {
    WorksheetError::Csv(error.to_string())
}

pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let file = File::open(path)?;
    read_csv_from(file)
}

/// Reads a CSV document whose first record is the header row.
///
/// Blank lines are skipped. Data cells are kept verbatim.
pub fn read_csv_from<R: Read>(reader: R) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers: Vec<String> = reader
        .headers()
        .map_err(|error| csv_error(&error))?
        .iter()
        .map(normalize_header)
        .collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| csv_error(&error))?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(CsvTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_bom_and_whitespace_from_headers() {
        let table = read_csv_from("\u{feff}a , b\n1,2\n".as_bytes()).expect("read csv");
        assert_eq!(table.headers, vec!["a", "b"]);
        assert_eq!(table.rows, vec![vec!["1", "2"]]);
    }

    #[test]
    fn keeps_quoted_cells_verbatim() {
        let table =
            read_csv_from("a,b\n\" padded \",\"x,y\"\n".as_bytes()).expect("read csv");
        assert_eq!(table.rows[0], vec![" padded ", "x,y"]);
    }

    #[test]
    fn raw_rows_key_by_header() {
        let table = read_csv_from("a,b,c\n1,2\n".as_bytes()).expect("read csv");
        let rows = table.raw_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("a").map(String::as_str), Some("1"));
        assert_eq!(rows[0].get("b").map(String::as_str), Some("2"));
        assert!(rows[0].get("c").is_none());
    }

    #[test]
    fn header_only_has_no_rows() {
        let table = read_csv_from("a,b\n".as_bytes()).expect("read csv");
        assert_eq!(table.headers.len(), 2);
        assert!(table.rows.is_empty());
    }
}
