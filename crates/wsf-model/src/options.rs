//! Configuration options for flattening.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WorksheetError};

pub const DEFAULT_MAX_DOMAIN_COUNT: usize = 10;
pub const DEFAULT_MAX_QUESTION_COUNT: usize = 100;

/// Output sizing and validation behavior.
///
/// The two maxima only decide how many numbered columns the output has;
/// they never filter which attempts appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlattenOptions {
    /// Number of domain name/score column pairs per row.
    pub max_domain_count: usize,
    /// Number of per-question column triples per row.
    pub max_question_count: usize,
    /// Fail on inconsistent duplicated values instead of warning.
    pub strict: bool,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self {
            max_domain_count: DEFAULT_MAX_DOMAIN_COUNT,
            max_question_count: DEFAULT_MAX_QUESTION_COUNT,
            strict: false,
        }
    }
}

impl FlattenOptions {
    pub fn new(max_domain_count: usize, max_question_count: usize) -> Self {
        Self {
            max_domain_count,
            max_question_count,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_max_domain_count(mut self, count: usize) -> Self {
        self.max_domain_count = count;
        self
    }

    #[must_use]
    pub fn with_max_question_count(mut self, count: usize) -> Self {
        self.max_question_count = count;
        self
    }

    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Rejects maxima below 1.
    pub fn validate(&self) -> Result<()> {
        if self.max_domain_count < 1 {
            return Err(WorksheetError::InvalidOption {
                name: "max_domain_count",
                value: self.max_domain_count,
            });
        }
        if self.max_question_count < 1 {
            return Err(WorksheetError::InvalidOption {
                name: "max_question_count",
                value: self.max_question_count,
            });
        }
        Ok(())
    }
}
