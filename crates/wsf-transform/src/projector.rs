//! Projection of a session hierarchy into wide rows.
//!
//! Domains are ordered by name and then cut to `max_domain_count`; responses
//! keep their question order and are cut to `max_question_count`. Short
//! groups are padded with empty cells so every row has the layout's width.

use serde::Serialize;
use tracing::warn;

use wsf_model::{Assessment, Domain, OutputColumn, Response, Session, Student};

use crate::layout::ColumnLayout;

/// What a session lost to the configured maxima.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionTruncation {
    pub session_id: String,
    /// Distinct domains in the session.
    pub domain_count: usize,
    /// Domains that did not fit, in name order.
    pub dropped_domains: Vec<String>,
    /// Largest number of responses in any one assessment.
    pub max_responses: usize,
    /// Assessments with more responses than question slots.
    pub truncated_assessments: usize,
}

impl SessionTruncation {
    pub fn is_truncated(&self) -> bool {
        !self.dropped_domains.is_empty() || self.truncated_assessments > 0
    }
}

/// Rows for one session plus its truncation details.
#[derive(Debug, Clone, Default)]
pub struct ProjectedSession {
    pub rows: Vec<Vec<String>>,
    pub truncation: SessionTruncation,
}

fn push_padded<I>(row: &mut Vec<String>, values: I, slots: usize)
where
    I: IntoIterator<Item = String>,
{
    let start = row.len();
    row.extend(values.into_iter().take(slots));
    let filled = row.len() - start;
    row.extend(std::iter::repeat_n(String::new(), slots - filled));
}

fn response_cells<F>(assessment: &Assessment, slots: usize, value: F) -> Vec<String>
where
    F: Fn(&Response) -> i64,
{
    assessment
        .responses
        .iter()
        .take(slots)
        .map(|response| value(response).to_string())
        .collect()
}

fn project_row(
    session: &Session,
    student: &Student,
    assessment: &Assessment,
    domains: &[&Domain],
    layout: &ColumnLayout,
) -> Vec<String> {
    let mut row = Vec::with_capacity(layout.width());
    for column in OutputColumn::ALL {
        let slots = layout.slots(column);
        match column {
            OutputColumn::SessionId => row.push(session.session_id.clone()),
            OutputColumn::TestDate => row.push(assessment.test_date.clone()),
            OutputColumn::StudentGuid => row.push(student.student_guid.clone()),
            OutputColumn::Subject => row.push(assessment.subject.clone()),
            OutputColumn::AssessmentGuid => row.push(assessment.assessment_guid.clone()),
            OutputColumn::CalculatedRawScore => {
                row.push(assessment.calculated_raw_score.to_string());
            }
            OutputColumn::ScaledScoreBasedOnCalculated => {
                row.push(assessment.scaled_score_based_on_calculated.to_string());
            }
            OutputColumn::QuestionDomain => push_padded(
                &mut row,
                domains.iter().map(|domain| domain.question_domain.clone()),
                slots,
            ),
            OutputColumn::DomainRawScore => push_padded(
                &mut row,
                domains.iter().map(|domain| {
                    domain
                        .domain_students
                        .get(&student.student_guid)
                        .map(|entry| entry.domain_raw_score.to_string())
                        .unwrap_or_default()
                }),
                slots,
            ),
            OutputColumn::TotalTimeSpentOnTest => {
                row.push(assessment.total_time_spent_on_test.to_string());
            }
            OutputColumn::TimeSpentOnItem => push_padded(
                &mut row,
                response_cells(assessment, slots, |r| r.record.time_spent_on_item),
                slots,
            ),
            OutputColumn::ResponseValue => push_padded(
                &mut row,
                response_cells(assessment, slots, |r| r.record.response_value),
                slots,
            ),
            OutputColumn::ResponseRawScore => push_padded(
                &mut row,
                response_cells(assessment, slots, |r| r.record.response_raw_score),
                slots,
            ),
        }
    }
    debug_assert_eq!(row.len(), layout.width());
    row
}

/// Produces one row per (student, assessment) in the session, in student
/// then assessment order.
pub fn project_session(session: &Session, layout: &ColumnLayout) -> ProjectedSession {
    let sorted = session.sorted_domains();
    let kept = sorted.len().min(layout.max_domain_count);
    let mut truncation = SessionTruncation {
        session_id: session.session_id.clone(),
        domain_count: sorted.len(),
        dropped_domains: sorted[kept..]
            .iter()
            .map(|domain| domain.question_domain.clone())
            .collect(),
        ..SessionTruncation::default()
    };
    let domains = &sorted[..kept];

    let mut rows = Vec::with_capacity(session.attempt_count());
    for student in &session.students {
        for assessment in &student.assessments {
            let responses = assessment.responses.len();
            truncation.max_responses = truncation.max_responses.max(responses);
            if responses > layout.max_question_count {
                truncation.truncated_assessments += 1;
            }
            rows.push(project_row(session, student, assessment, domains, layout));
        }
    }

    if truncation.is_truncated() {
        warn!(
            session_id = %session.session_id,
            dropped_domains = truncation.dropped_domains.len(),
            truncated_assessments = truncation.truncated_assessments,
            "session exceeds configured column maxima; extra values dropped"
        );
    }
    ProjectedSession { rows, truncation }
}
