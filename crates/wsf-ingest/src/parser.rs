//! Typed decoding of raw worksheet rows into [`ResponseRecord`]s.
//!
//! Decoding is all-or-nothing: the first missing or unconvertible cell
//! aborts the batch and no records are returned.

use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

use tracing::{debug, info};

use wsf_model::{FieldKind, RESPONSE_FIELDS, ResponseRecord, Result, WorksheetError};

use crate::csv_table::{CsvTable, RawRow};

/// Anything that can hand out a row's cell by column name.
pub trait FieldLookup {
    fn field(&self, name: &str) -> Option<&str>;
}

impl FieldLookup for RawRow {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl FieldLookup for BTreeMap<String, String> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl FieldLookup for HashMap<String, String> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// A table row viewed through a precomputed header index.
struct TableRow<'a> {
    cells: &'a [String],
    index: &'a HashMap<&'static str, usize>,
}

impl FieldLookup for TableRow<'_> {
    fn field(&self, name: &str) -> Option<&str> {
        let idx = *self.index.get(name)?;
        self.cells.get(idx).map(String::as_str)
    }
}

struct RowDecoder<'a, L: FieldLookup + ?Sized> {
    row: usize,
    source: &'a L,
}

impl<L: FieldLookup + ?Sized> RowDecoder<'_, L> {
    fn raw(&self, field: &'static str) -> Result<&str> {
        self.source
            .field(field)
            .ok_or(WorksheetError::MissingValue {
                row: self.row,
                field,
            })
    }

    fn invalid(&self, field: &'static str, value: &str, expected: FieldKind) -> WorksheetError {
        WorksheetError::InvalidValue {
            row: self.row,
            field,
            value: value.to_string(),
            expected,
        }
    }

    fn text(&self, field: &'static str) -> Result<String> {
        self.raw(field).map(str::to_string)
    }

    fn integer(&self, field: &'static str) -> Result<i64> {
        let value = self.raw(field)?;
        value
            .trim()
            .parse::<i64>()
            .map_err(|_| self.invalid(field, value, FieldKind::Integer))
    }

    fn boolean(&self, field: &'static str) -> Result<bool> {
        let value = self.raw(field)?;
        parse_bool(value).ok_or_else(|| self.invalid(field, value, FieldKind::Boolean))
    }
}

/// Parses the boolean spellings found in worksheet exports.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "on" | "1" => Some(true),
        "false" | "f" | "no" | "n" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Decodes one row. `row` is the 1-based data row number used in errors.
pub fn decode_record<L: FieldLookup + ?Sized>(row: usize, source: &L) -> Result<ResponseRecord> {
    let d = RowDecoder { row, source };
    Ok(ResponseRecord {
        student_guid: d.text("student_guid")?,
        session_id: d.text("session_id")?,
        assessment_guid: d.text("assessment_guid")?,
        response_id: d.text("response_id")?,
        question_id: d.text("question_id")?,
        item_reference_id: d.text("item_reference_id")?,
        subject: d.text("subject")?,
        test_date: d.text("test_date")?,
        form_name: d.text("form_name")?,
        total_time_spent_on_test: d.integer("total_time_spent_on_test")?,
        number_of_items: d.integer("number_of_items")?,
        number_of_operational_items: d.integer("number_of_operational_items")?,
        calculated_raw_score: d.integer("calculated_raw_score")?,
        calculated_operational_score: d.integer("calculated_operational_score")?,
        max_operational_score: d.integer("max_operational_score")?,
        scaled_score_based_on_calculated: d.integer("scaled_score_based_on_calculated")?,
        attempted: d.boolean("attempted")?,
        is_operational_question: d.boolean("is_operational_question")?,
        question_type: d.text("question_type")?,
        time_spent_on_item: d.integer("time_spent_on_item")?,
        response_value: d.integer("response_value")?,
        response_raw_score: d.integer("response_raw_score")?,
        response_max_score: d.integer("response_max_score")?,
        question_domain: d.text("question_domain")?,
        domain_raw_score: d.integer("domain_raw_score")?,
        domain_max_score: d.integer("domain_max_score")?,
        dt_score_updated: d.text("dt_score_updated")?,
        dt_saved: d.text("dt_saved")?,
    })
}

/// Decodes header-keyed rows in order.
pub fn parse_records<L: FieldLookup>(rows: &[L]) -> Result<Vec<ResponseRecord>> {
    let start = Instant::now();
    let records = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| decode_record(idx + 1, row))
        .collect::<Result<Vec<_>>>()?;
    info!(
        record_count = records.len(),
        duration_ms = start.elapsed().as_millis(),
        "parsed response records"
    );
    Ok(records)
}

/// Decodes a whole table, checking the header for every declared column
/// before touching any data row.
pub fn parse_table(table: &CsvTable) -> Result<Vec<ResponseRecord>> {
    let mut index = HashMap::with_capacity(RESPONSE_FIELDS.len());
    for (field, _) in RESPONSE_FIELDS {
        let idx = table
            .column_index(field)
            .ok_or_else(|| WorksheetError::MissingColumn {
                column: field.to_string(),
            })?;
        index.insert(field, idx);
    }
    let ignored = table.headers.len().saturating_sub(index.len());
    if ignored > 0 {
        debug!(ignored_columns = ignored, "ignoring undeclared columns");
    }
    let start = Instant::now();
    let records = table
        .rows
        .iter()
        .enumerate()
        .map(|(idx, cells)| {
            let row = TableRow {
                cells,
                index: &index,
            };
            decode_record(idx + 1, &row)
        })
        .collect::<Result<Vec<_>>>()?;
    info!(
        record_count = records.len(),
        duration_ms = start.elapsed().as_millis(),
        "parsed response records"
    );
    Ok(records)
}
