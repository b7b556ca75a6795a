//! Output header layout.

use wsf_model::{ColumnRepeat, FlattenOptions, OutputColumn};

/// Fixed column layout shared by every session in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub max_domain_count: usize,
    pub max_question_count: usize,
}

impl ColumnLayout {
    pub fn new(max_domain_count: usize, max_question_count: usize) -> Self {
        Self {
            max_domain_count,
            max_question_count,
        }
    }

    pub fn from_options(options: &FlattenOptions) -> Self {
        Self::new(options.max_domain_count, options.max_question_count)
    }

    /// Number of physical columns a kind occupies.
    pub fn slots(&self, column: OutputColumn) -> usize {
        match column.repeat() {
            ColumnRepeat::Single => 1,
            ColumnRepeat::PerDomain => self.max_domain_count,
            ColumnRepeat::PerQuestion => self.max_question_count,
        }
    }

    /// Total number of output columns.
    pub fn width(&self) -> usize {
        OutputColumn::ALL
            .iter()
            .map(|column| self.slots(*column))
            .sum()
    }

    /// Header labels, one per output column, numbered from 1 within each
    /// repeated group.
    pub fn header(&self) -> Vec<String> {
        let mut header = Vec::with_capacity(self.width());
        for column in OutputColumn::ALL {
            match column.repeat() {
                ColumnRepeat::Single => header.push(column.label(1)),
                ColumnRepeat::PerDomain | ColumnRepeat::PerQuestion => {
                    header.extend((1..=self.slots(column)).map(|counter| column.label(counter)));
                }
            }
        }
        header
    }
}
