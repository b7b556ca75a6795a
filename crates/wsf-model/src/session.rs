//! Session hierarchy reconstructed from flat response records.
//!
//! Ownership runs strictly downward: a [`Session`] owns its [`Student`]s,
//! each student owns its [`Assessment`]s, each assessment owns its
//! [`Response`]s. The session's [`Domain`] map refers to students only by
//! `student_guid`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::record::ResponseRecord;

/// A response record with its 1-based position inside its assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    #[serde(flatten)]
    pub record: ResponseRecord,
    pub question_counter: usize,
}

/// One student's attempt at one assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub assessment_guid: String,
    pub subject: String,
    pub test_date: String,
    pub total_time_spent_on_test: i64,
    pub calculated_raw_score: i64,
    pub scaled_score_based_on_calculated: i64,
    /// Responses in encounter order; `question_counter` is 1, 2, 3, ...
    pub responses: Vec<Response>,
}

impl Assessment {
    /// Builds an assessment from its rows, numbering responses in the
    /// order given. Scalar fields come from the first row.
    ///
    /// Returns `None` for an empty group.
    pub fn from_records(records: Vec<ResponseRecord>) -> Option<Self> {
        let first = records.first()?;
        let mut assessment = Self {
            assessment_guid: first.assessment_guid.clone(),
            subject: first.subject.clone(),
            test_date: first.test_date.clone(),
            total_time_spent_on_test: first.total_time_spent_on_test,
            calculated_raw_score: first.calculated_raw_score,
            scaled_score_based_on_calculated: first.scaled_score_based_on_calculated,
            responses: Vec::with_capacity(records.len()),
        };
        for (idx, record) in records.into_iter().enumerate() {
            assessment.responses.push(Response {
                record,
                question_counter: idx + 1,
            });
        }
        Some(assessment)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub student_guid: String,
    pub assessments: Vec<Assessment>,
}

/// A student's score within one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainStudent {
    pub student_guid: String,
    pub domain_raw_score: i64,
    pub domain_max_score: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub question_domain: String,
    /// Keyed by `student_guid`.
    pub domain_students: IndexMap<String, DomainStudent>,
}

impl Domain {
    pub fn new(question_domain: impl Into<String>) -> Self {
        Self {
            question_domain: question_domain.into(),
            domain_students: IndexMap::new(),
        }
    }
}

/// A testing event and every attempt recorded under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub session_id: String,
    pub students: Vec<Student>,
    /// Keyed by `question_domain`, in first-seen order.
    pub domains: IndexMap<String, Domain>,
}

impl Session {
    pub fn new(session_id: impl Into<String>, students: Vec<Student>) -> Self {
        Self {
            session_id: session_id.into(),
            students,
            domains: IndexMap::new(),
        }
    }

    /// Registers every domain and per-student domain score seen in the
    /// session's responses.
    ///
    /// Scores for a (domain, student) pair are taken from the first response
    /// encountered in student, assessment, response order; later responses
    /// for the same pair are ignored.
    pub fn populate_domains(&mut self) {
        for student in &self.students {
            for assessment in &student.assessments {
                for response in &assessment.responses {
                    let record = &response.record;
                    let domain = self
                        .domains
                        .entry(record.question_domain.clone())
                        .or_insert_with(|| Domain::new(record.question_domain.clone()));
                    domain
                        .domain_students
                        .entry(student.student_guid.clone())
                        .or_insert_with(|| DomainStudent {
                            student_guid: student.student_guid.clone(),
                            domain_raw_score: record.domain_raw_score,
                            domain_max_score: record.domain_max_score,
                        });
                }
            }
        }
    }

    /// Domains ordered by name, the order used for output columns.
    pub fn sorted_domains(&self) -> Vec<&Domain> {
        let mut domains: Vec<&Domain> = self.domains.values().collect();
        domains.sort_by(|a, b| a.question_domain.cmp(&b.question_domain));
        domains
    }

    /// Number of (student, assessment) attempts, i.e. output rows.
    pub fn attempt_count(&self) -> usize {
        self.students
            .iter()
            .map(|student| student.assessments.len())
            .sum()
    }

    pub fn response_count(&self) -> usize {
        self.students
            .iter()
            .flat_map(|student| &student.assessments)
            .map(|assessment| assessment.responses.len())
            .sum()
    }
}
