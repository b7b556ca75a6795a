//! Output column kinds.
//!
//! Header generation and row projection both match on [`OutputColumn`], so a
//! new kind cannot be added to one without the other.

use serde::{Deserialize, Serialize};

/// How many physical columns a kind expands to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRepeat {
    /// Exactly one column.
    Single,
    /// One column per domain slot.
    PerDomain,
    /// One column per question slot.
    PerQuestion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputColumn {
    SessionId,
    TestDate,
    StudentGuid,
    Subject,
    AssessmentGuid,
    CalculatedRawScore,
    ScaledScoreBasedOnCalculated,
    QuestionDomain,
    DomainRawScore,
    TotalTimeSpentOnTest,
    TimeSpentOnItem,
    ResponseValue,
    ResponseRawScore,
}

impl OutputColumn {
    /// Every kind, in output order.
    pub const ALL: [OutputColumn; 13] = [
        Self::SessionId,
        Self::TestDate,
        Self::StudentGuid,
        Self::Subject,
        Self::AssessmentGuid,
        Self::CalculatedRawScore,
        Self::ScaledScoreBasedOnCalculated,
        Self::QuestionDomain,
        Self::DomainRawScore,
        Self::TotalTimeSpentOnTest,
        Self::TimeSpentOnItem,
        Self::ResponseValue,
        Self::ResponseRawScore,
    ];

    /// Input field name this kind is sourced from.
    pub fn field_name(self) -> &'static str {
        match self {
            Self::SessionId => "session_id",
            Self::TestDate => "test_date",
            Self::StudentGuid => "student_guid",
            Self::Subject => "subject",
            Self::AssessmentGuid => "assessment_guid",
            Self::CalculatedRawScore => "calculated_raw_score",
            Self::ScaledScoreBasedOnCalculated => "scaled_score_based_on_calculated",
            Self::QuestionDomain => "question_domain",
            Self::DomainRawScore => "domain_raw_score",
            Self::TotalTimeSpentOnTest => "total_time_spent_on_test",
            Self::TimeSpentOnItem => "time_spent_on_item",
            Self::ResponseValue => "response_value",
            Self::ResponseRawScore => "response_raw_score",
        }
    }

    pub fn repeat(self) -> ColumnRepeat {
        match self {
            Self::QuestionDomain | Self::DomainRawScore => ColumnRepeat::PerDomain,
            Self::TimeSpentOnItem | Self::ResponseValue | Self::ResponseRawScore => {
                ColumnRepeat::PerQuestion
            }
            Self::SessionId
            | Self::TestDate
            | Self::StudentGuid
            | Self::Subject
            | Self::AssessmentGuid
            | Self::CalculatedRawScore
            | Self::ScaledScoreBasedOnCalculated
            | Self::TotalTimeSpentOnTest => ColumnRepeat::Single,
        }
    }

    /// Header label for slot `counter` (1-based). Single columns ignore the
    /// counter and use the field name.
    pub fn label(self, counter: usize) -> String {
        match self {
            Self::QuestionDomain => format!("Question Domain {counter} Name"),
            Self::DomainRawScore => format!("Question Domain {counter} Raw Score"),
            Self::TimeSpentOnItem => format!("Time Spent on Question {counter}"),
            Self::ResponseValue => format!("Response Value for Question {counter}"),
            Self::ResponseRawScore => format!("Response Raw Score for Question {counter}"),
            Self::SessionId
            | Self::TestDate
            | Self::StudentGuid
            | Self::Subject
            | Self::AssessmentGuid
            | Self::CalculatedRawScore
            | Self::ScaledScoreBasedOnCalculated
            | Self::TotalTimeSpentOnTest => self.field_name().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_labels() {
        assert_eq!(OutputColumn::QuestionDomain.label(1), "Question Domain 1 Name");
        assert_eq!(
            OutputColumn::DomainRawScore.label(4),
            "Question Domain 4 Raw Score"
        );
        assert_eq!(
            OutputColumn::ResponseRawScore.label(12),
            "Response Raw Score for Question 12"
        );
        assert_eq!(OutputColumn::SessionId.label(7), "session_id");
    }

    #[test]
    fn repeated_groups() {
        let per_domain = OutputColumn::ALL
            .iter()
            .filter(|column| column.repeat() == ColumnRepeat::PerDomain)
            .count();
        let per_question = OutputColumn::ALL
            .iter()
            .filter(|column| column.repeat() == ColumnRepeat::PerQuestion)
            .count();
        assert_eq!(per_domain, 2);
        assert_eq!(per_question, 3);
    }
}
