mod common;

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;

use common::{raw_row, with};
use wsf_ingest::RawRow;
use wsf_model::FlattenOptions;
use wsf_transform::reshape;

const SCALAR_PREFIX: usize = 7;

#[derive(Debug, Clone)]
struct Input {
    /// (session, student, assessment, domain) indices per row.
    rows: Vec<(u8, u8, u8, u8)>,
    max_domains: usize,
    max_questions: usize,
}

fn input_strategy() -> impl Strategy<Value = Input> {
    (
        prop::collection::vec((0u8..3, 0u8..3, 0u8..3, 0u8..6), 0..40),
        1usize..6,
        1usize..5,
    )
        .prop_map(|(rows, max_domains, max_questions)| Input {
            rows,
            max_domains,
            max_questions,
        })
}

fn to_raw(input: &Input) -> Vec<RawRow> {
    input
        .rows
        .iter()
        .enumerate()
        .map(|(idx, (session, student, assessment, domain))| {
            let row = raw_row(
                &format!("S{session}"),
                &format!("stu-{student}"),
                &format!("A{assessment}"),
                &format!("D{domain}"),
            );
            // input position doubles as a per-response marker
            with(row, "time_spent_on_item", idx)
        })
        .collect()
}

fn triple(row: &(u8, u8, u8, u8)) -> (String, String, String) {
    (
        format!("S{}", row.0),
        format!("stu-{}", row.1),
        format!("A{}", row.2),
    )
}

/// Distinct attempts ordered by first appearance of session, then of
/// student within session, then of assessment within student.
fn expected_order(rows: &[(u8, u8, u8, u8)]) -> Vec<(String, String, String)> {
    let mut session_first: HashMap<u8, usize> = HashMap::new();
    let mut student_first: HashMap<(u8, u8), usize> = HashMap::new();
    let mut attempt_first: HashMap<(u8, u8, u8), usize> = HashMap::new();
    for (idx, row) in rows.iter().enumerate() {
        session_first.entry(row.0).or_insert(idx);
        student_first.entry((row.0, row.1)).or_insert(idx);
        attempt_first.entry((row.0, row.1, row.2)).or_insert(idx);
    }
    let mut attempts: Vec<(u8, u8, u8)> = attempt_first.keys().copied().collect();
    attempts.sort_by_key(|key| {
        (
            session_first[&key.0],
            student_first[&(key.0, key.1)],
            attempt_first[key],
        )
    });
    attempts
        .into_iter()
        .map(|(s, st, a)| (format!("S{s}"), format!("stu-{st}"), format!("A{a}")))
        .collect()
}

proptest! {
    #[test]
    fn one_row_per_attempt_in_first_seen_order(input in input_strategy()) {
        let options = FlattenOptions::new(input.max_domains, input.max_questions);
        let reshaped = reshape(&to_raw(&input), &options).expect("reshape");

        let distinct: HashSet<_> = input.rows.iter().map(triple).collect();
        prop_assert_eq!(reshaped.rows.len(), distinct.len());

        let actual: Vec<(String, String, String)> = reshaped
            .rows
            .iter()
            .map(|row| (row[0].clone(), row[2].clone(), row[4].clone()))
            .collect();
        prop_assert_eq!(actual, expected_order(&input.rows));
    }

    #[test]
    fn domain_columns_sorted_padded_and_truncated(input in input_strategy()) {
        let options = FlattenOptions::new(input.max_domains, input.max_questions);
        let reshaped = reshape(&to_raw(&input), &options).expect("reshape");

        let mut session_domains: HashMap<String, HashSet<String>> = HashMap::new();
        for row in &input.rows {
            session_domains
                .entry(format!("S{}", row.0))
                .or_default()
                .insert(format!("D{}", row.3));
        }

        for row in &reshaped.rows {
            prop_assert_eq!(row.len(), reshaped.header.len());
            let mut expected: Vec<String> = session_domains[&row[0]].iter().cloned().collect();
            expected.sort();
            expected.truncate(input.max_domains);
            let pad = input.max_domains - expected.len();

            let names = &row[SCALAR_PREFIX..SCALAR_PREFIX + input.max_domains];
            prop_assert_eq!(&names[..expected.len()], expected.as_slice());
            prop_assert!(names[expected.len()..].iter().all(String::is_empty));

            let scores_start = SCALAR_PREFIX + input.max_domains;
            let scores = &row[scores_start..scores_start + input.max_domains];
            prop_assert!(scores[expected.len()..].iter().all(String::is_empty));
            prop_assert_eq!(names.iter().filter(|cell| cell.is_empty()).count(), pad);
        }
    }

    #[test]
    fn responses_keep_encounter_order(input in input_strategy()) {
        let options = FlattenOptions::new(input.max_domains, input.max_questions);
        let reshaped = reshape(&to_raw(&input), &options).expect("reshape");

        let mut per_attempt: HashMap<(String, String, String), Vec<String>> = HashMap::new();
        for (idx, row) in input.rows.iter().enumerate() {
            per_attempt.entry(triple(row)).or_default().push(idx.to_string());
        }

        let time_start = reshaped
            .header
            .iter()
            .position(|label| label == "Time Spent on Question 1")
            .expect("time column");
        for row in &reshaped.rows {
            let key = (row[0].clone(), row[2].clone(), row[4].clone());
            let mut expected = per_attempt[&key].clone();
            expected.truncate(input.max_questions);
            expected.resize(input.max_questions, String::new());
            prop_assert_eq!(
                &row[time_start..time_start + input.max_questions],
                expected.as_slice()
            );
        }
    }
}
