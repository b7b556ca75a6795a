//! Worksheet ingestion: CSV loading and typed response decoding.

pub mod csv_table;
pub mod parser;

pub use csv_table::{CsvTable, RawRow, read_csv_from, read_csv_table};
pub use parser::{FieldLookup, decode_record, parse_bool, parse_records, parse_table};
