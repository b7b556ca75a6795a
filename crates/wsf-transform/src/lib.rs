//! Long-to-wide reshaping of assessment worksheets.
//!
//! The pipeline is a single synchronous pass:
//!
//! 1. decode raw rows into [`ResponseRecord`]s ([`wsf_ingest`])
//! 2. audit repeated values ([`audit`])
//! 3. group into sessions ([`hierarchy`])
//! 4. lay out the header ([`layout`]) and project every session ([`projector`])

pub mod audit;
pub mod hierarchy;
pub mod layout;
pub mod projector;

use std::time::Instant;

use serde::Serialize;
use tracing::{info, info_span, warn};

use wsf_ingest::{CsvTable, FieldLookup, parse_records, parse_table};
use wsf_model::{FlattenOptions, ResponseRecord, Result, WorksheetError};

pub use audit::{ConsistencyIssue, IssueScope, audit_records};
pub use hierarchy::build_sessions;
pub use layout::ColumnLayout;
pub use projector::{ProjectedSession, SessionTruncation, project_session};

/// Counts describing one reshape run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReshapeSummary {
    pub record_count: usize,
    pub session_count: usize,
    pub student_count: usize,
    pub row_count: usize,
    pub column_count: usize,
    /// Most distinct domains in any one session.
    pub largest_domain_count: usize,
    /// Most responses in any one assessment.
    pub largest_question_count: usize,
    /// Sessions that lost domains or responses to the maxima.
    pub truncations: Vec<SessionTruncation>,
    pub consistency_issues: Vec<ConsistencyIssue>,
}

impl ReshapeSummary {
    pub fn is_truncated(&self) -> bool {
        !self.truncations.is_empty()
    }
}

/// Wide output: header plus one row per (session, student, assessment).
#[derive(Debug, Clone, Default)]
pub struct Reshaped {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub summary: ReshapeSummary,
}

impl Reshaped {
    /// Header followed by the data rows.
    pub fn into_rows(self) -> Vec<Vec<String>> {
        let mut rows = Vec::with_capacity(self.rows.len() + 1);
        rows.push(self.header);
        rows.extend(self.rows);
        rows
    }
}

/// Reshapes header-keyed raw rows.
pub fn reshape<L: FieldLookup>(raw_rows: &[L], options: &FlattenOptions) -> Result<Reshaped> {
    options.validate()?;
    let records = parse_records(raw_rows)?;
    reshape_records(records, options)
}

/// Reshapes a loaded CSV table, rejecting headers that lack a declared column.
pub fn reshape_table(table: &CsvTable, options: &FlattenOptions) -> Result<Reshaped> {
    options.validate()?;
    let records = parse_table(table)?;
    reshape_records(records, options)
}

/// Reshapes already decoded records.
pub fn reshape_records(records: Vec<ResponseRecord>, options: &FlattenOptions) -> Result<Reshaped> {
    options.validate()?;
    let span = info_span!(
        "reshape",
        max_domain_count = options.max_domain_count,
        max_question_count = options.max_question_count
    );
    let _guard = span.enter();
    let start = Instant::now();

    let record_count = records.len();
    let consistency_issues = audit_records(&records);
    if let Some(first) = consistency_issues.first() {
        if options.strict {
            return Err(WorksheetError::InconsistentData {
                count: consistency_issues.len(),
                first: first.to_string(),
            });
        }
        for issue in &consistency_issues {
            warn!(
                scope = %issue.scope,
                key = %issue.key,
                field = issue.field,
                row = issue.row,
                "repeated value disagrees with first row; keeping first"
            );
        }
    }

    let sessions = build_sessions(records);
    let layout = ColumnLayout::from_options(options);
    let header = layout.header();

    let mut summary = ReshapeSummary {
        record_count,
        session_count: sessions.len(),
        column_count: header.len(),
        consistency_issues,
        ..ReshapeSummary::default()
    };
    let mut rows = Vec::new();
    for session in &sessions {
        let projected = project_session(session, &layout);
        summary.student_count += session.students.len();
        summary.largest_domain_count = summary
            .largest_domain_count
            .max(projected.truncation.domain_count);
        summary.largest_question_count = summary
            .largest_question_count
            .max(projected.truncation.max_responses);
        if projected.truncation.is_truncated() {
            summary.truncations.push(projected.truncation);
        }
        rows.extend(projected.rows);
    }
    summary.row_count = rows.len();

    info!(
        record_count,
        session_count = summary.session_count,
        row_count = summary.row_count,
        column_count = summary.column_count,
        duration_ms = start.elapsed().as_millis(),
        "reshape complete"
    );
    Ok(Reshaped {
        header,
        rows,
        summary,
    })
}
