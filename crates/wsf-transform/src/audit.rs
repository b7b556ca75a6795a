//! Consistency checks for values the export repeats across rows.
//!
//! Grouping trusts the first row of each assessment and the first response
//! of each (student, domain) pair. This audit reports rows that disagree
//! with those first values so callers can warn or refuse the input.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use wsf_model::ResponseRecord;

/// Which repeated block a finding belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueScope {
    Assessment,
    Domain,
}

impl fmt::Display for IssueScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assessment => f.write_str("assessment"),
            Self::Domain => f.write_str("domain"),
        }
    }
}

/// A row whose repeated value differs from the first row of its group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsistencyIssue {
    pub scope: IssueScope,
    pub session_id: String,
    pub student_guid: String,
    /// `assessment_guid` or `question_domain`, depending on scope.
    pub key: String,
    pub field: &'static str,
    /// Value from the first row of the group (the one that is kept).
    pub expected: String,
    pub found: String,
    /// 1-based data row number of the disagreeing row.
    pub row: usize,
}

impl fmt::Display for ConsistencyIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row {}: {} '{}' differs from '{}' for {} '{}' in session '{}'",
            self.row,
            self.field,
            self.found,
            self.expected,
            self.scope,
            self.key,
            self.session_id
        )
    }
}

type GroupKey = (String, String, String);

/// Scans records in input order and reports every disagreement.
pub fn audit_records(records: &[ResponseRecord]) -> Vec<ConsistencyIssue> {
    let mut assessments: HashMap<GroupKey, [(&'static str, String); 10]> = HashMap::new();
    let mut domains: HashMap<GroupKey, (i64, i64)> = HashMap::new();
    let mut issues = Vec::new();

    for (idx, record) in records.iter().enumerate() {
        let row = idx + 1;
        let issue = |scope: IssueScope,
                     key: &str,
                     field: &'static str,
                     expected: String,
                     found: String| ConsistencyIssue {
            scope,
            session_id: record.session_id.clone(),
            student_guid: record.student_guid.clone(),
            key: key.to_string(),
            field,
            expected,
            found,
            row,
        };

        let assessment_key = (
            record.session_id.clone(),
            record.student_guid.clone(),
            record.assessment_guid.clone(),
        );
        let scalars = record.assessment_scalars();
        if let Some(first) = assessments.get(&assessment_key) {
            for ((field, expected), (_, found)) in first.iter().zip(scalars.iter()) {
                if expected != found {
                    issues.push(issue(
                        IssueScope::Assessment,
                        &record.assessment_guid,
                        *field,
                        expected.clone(),
                        found.clone(),
                    ));
                }
            }
        } else {
            assessments.insert(assessment_key, scalars);
        }

        let domain_key = (
            record.session_id.clone(),
            record.student_guid.clone(),
            record.question_domain.clone(),
        );
        let scores = (record.domain_raw_score, record.domain_max_score);
        match domains.get(&domain_key) {
            Some(&(raw, max)) => {
                if raw != scores.0 {
                    issues.push(issue(
                        IssueScope::Domain,
                        &record.question_domain,
                        "domain_raw_score",
                        raw.to_string(),
                        scores.0.to_string(),
                    ));
                }
                if max != scores.1 {
                    issues.push(issue(
                        IssueScope::Domain,
                        &record.question_domain,
                        "domain_max_score",
                        max.to_string(),
                        scores.1.to_string(),
                    ));
                }
            }
            None => {
                domains.insert(domain_key, scores);
            }
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{record, record_with};

    #[test]
    fn consistent_input_has_no_issues() {
        let records = vec![
            record("S1", "stu-1", "A1", "Math"),
            record("S1", "stu-1", "A1", "Math"),
            record("S1", "stu-2", "A1", "Math"),
        ];
        assert!(audit_records(&records).is_empty());
    }

    #[test]
    fn reports_assessment_scalar_drift() {
        let records = vec![
            record("S1", "stu-1", "A1", "Math"),
            record_with("S1", "stu-1", "A1", "Math", |r| r.calculated_raw_score = 99),
        ];
        let issues = audit_records(&records);
        assert_eq!(issues.len(), 1);
        let issue = &issues[0];
        assert_eq!(issue.scope, IssueScope::Assessment);
        assert_eq!(issue.field, "calculated_raw_score");
        assert_eq!(issue.found, "99");
        assert_eq!(issue.row, 2);
        assert!(issue.to_string().starts_with("row 2: calculated_raw_score '99'"));
    }

    #[test]
    fn reports_domain_score_drift_per_student() {
        let records = vec![
            record_with("S1", "stu-1", "A1", "Math", |r| r.domain_raw_score = 3),
            record_with("S1", "stu-2", "A1", "Math", |r| r.domain_raw_score = 5),
            record_with("S1", "stu-1", "A2", "Math", |r| r.domain_raw_score = 4),
        ];
        let issues = audit_records(&records);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].scope, IssueScope::Domain);
        assert_eq!(issues[0].expected, "3");
        assert_eq!(issues[0].found, "4");
        assert_eq!(issues[0].row, 3);
    }
}
