//! Typed form of a single input worksheet row.

use serde::{Deserialize, Serialize};

use crate::error::FieldKind;

/// Every column the input header must declare, with its expected type.
///
/// Order follows the upstream export; the reader looks columns up by name,
/// so the physical column order of an input file does not matter.
pub const RESPONSE_FIELDS: [(&str, FieldKind); 28] = [
    ("student_guid", FieldKind::Text),
    ("subject", FieldKind::Text),
    ("session_id", FieldKind::Text),
    ("response_id", FieldKind::Text),
    ("question_id", FieldKind::Text),
    ("item_reference_id", FieldKind::Text),
    ("assessment_guid", FieldKind::Text),
    ("test_date", FieldKind::Text),
    ("form_name", FieldKind::Text),
    ("total_time_spent_on_test", FieldKind::Integer),
    ("number_of_items", FieldKind::Integer),
    ("number_of_operational_items", FieldKind::Integer),
    ("attempted", FieldKind::Boolean),
    ("is_operational_question", FieldKind::Boolean),
    ("question_type", FieldKind::Text),
    ("time_spent_on_item", FieldKind::Integer),
    ("response_value", FieldKind::Integer),
    ("response_raw_score", FieldKind::Integer),
    ("response_max_score", FieldKind::Integer),
    ("calculated_raw_score", FieldKind::Integer),
    ("calculated_operational_score", FieldKind::Integer),
    ("max_operational_score", FieldKind::Integer),
    ("scaled_score_based_on_calculated", FieldKind::Integer),
    ("question_domain", FieldKind::Text),
    ("domain_raw_score", FieldKind::Integer),
    ("domain_max_score", FieldKind::Integer),
    ("dt_score_updated", FieldKind::Text),
    ("dt_saved", FieldKind::Text),
];

/// One student's response to one question, as exported.
///
/// Assessment-level and domain-level values are repeated on every row they
/// apply to; downstream grouping takes them from the first row it sees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRecord {
    // Identity
    pub student_guid: String,
    pub session_id: String,
    pub assessment_guid: String,
    pub response_id: String,
    pub question_id: String,
    pub item_reference_id: String,

    // Assessment-level
    pub subject: String,
    pub test_date: String,
    pub form_name: String,
    pub total_time_spent_on_test: i64,
    pub number_of_items: i64,
    pub number_of_operational_items: i64,
    pub calculated_raw_score: i64,
    pub calculated_operational_score: i64,
    pub max_operational_score: i64,
    pub scaled_score_based_on_calculated: i64,

    // Response-level
    pub attempted: bool,
    pub is_operational_question: bool,
    pub question_type: String,
    pub time_spent_on_item: i64,
    pub response_value: i64,
    pub response_raw_score: i64,
    pub response_max_score: i64,

    // Domain-level
    pub question_domain: String,
    pub domain_raw_score: i64,
    pub domain_max_score: i64,

    pub dt_score_updated: String,
    pub dt_saved: String,
}

impl ResponseRecord {
    /// Assessment-level scalar values keyed by field name, in declaration order.
    ///
    /// Used to compare rows that are expected to agree on these values.
    pub fn assessment_scalars(&self) -> [(&'static str, String); 10] {
        [
            ("subject", self.subject.clone()),
            ("test_date", self.test_date.clone()),
            ("form_name", self.form_name.clone()),
            (
                "total_time_spent_on_test",
                self.total_time_spent_on_test.to_string(),
            ),
            ("number_of_items", self.number_of_items.to_string()),
            (
                "number_of_operational_items",
                self.number_of_operational_items.to_string(),
            ),
            ("calculated_raw_score", self.calculated_raw_score.to_string()),
            (
                "calculated_operational_score",
                self.calculated_operational_score.to_string(),
            ),
            ("max_operational_score", self.max_operational_score.to_string()),
            (
                "scaled_score_based_on_calculated",
                self.scaled_score_based_on_calculated.to_string(),
            ),
        ]
    }
}
