#![allow(dead_code)]

use wsf_ingest::RawRow;
use wsf_model::RESPONSE_FIELDS;

/// A valid raw row with the given identity and domain; every other cell
/// gets a plausible default.
pub fn raw_row(session: &str, student: &str, assessment: &str, domain: &str) -> RawRow {
    RESPONSE_FIELDS
        .iter()
        .map(|(field, _)| {
            let value = match *field {
                "session_id" => session.to_string(),
                "student_guid" => student.to_string(),
                "assessment_guid" => assessment.to_string(),
                "question_domain" => domain.to_string(),
                "subject" => "Math".to_string(),
                "test_date" => "2023-05-01".to_string(),
                "attempted" | "is_operational_question" => "True".to_string(),
                "question_type" | "form_name" | "response_id" | "question_id"
                | "item_reference_id" | "dt_score_updated" | "dt_saved" => "x".to_string(),
                _ => "1".to_string(),
            };
            ((*field).to_string(), value)
        })
        .collect()
}

pub fn with(mut row: RawRow, field: &str, value: impl ToString) -> RawRow {
    row.insert(field.to_string(), value.to_string());
    row
}
