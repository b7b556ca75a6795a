use std::fs;

use tempfile::TempDir;

use wsf_model::{FlattenOptions, RESPONSE_FIELDS, WorksheetError};
use wsf_output::{default_output_path, flatten_file};

fn worksheet(rows: &[[&str; 4]]) -> String {
    let header: Vec<&str> = RESPONSE_FIELDS.iter().map(|(name, _)| *name).collect();
    let mut out = header.join(",");
    out.push('\n');
    for [session, student, domain, response_value] in rows {
        let cells: Vec<String> = header
            .iter()
            .map(|field| match *field {
                "session_id" => (*session).to_string(),
                "student_guid" => (*student).to_string(),
                "assessment_guid" => "A1".to_string(),
                "question_domain" => (*domain).to_string(),
                "response_value" => (*response_value).to_string(),
                "subject" => "Reading, Grade 3".to_string(),
                "attempted" | "is_operational_question" => "True".to_string(),
                "test_date" | "form_name" | "question_type" | "response_id" | "question_id"
                | "item_reference_id" | "dt_score_updated" | "dt_saved" => "x".to_string(),
                _ => "2".to_string(),
            })
            .map(|cell| {
                if cell.contains(',') {
                    format!("\"{cell}\"")
                } else {
                    cell
                }
            })
            .collect();
        out.push_str(&cells.join(","));
        out.push('\n');
    }
    out
}

#[test]
fn flattens_file_to_default_location() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("worksheet.csv");
    fs::write(
        &input,
        worksheet(&[
            ["S1", "stu-1", "Vocab", "4"],
            ["S1", "stu-1", "Comprehension", "5"],
            ["S1", "stu-2", "Vocab", "6"],
        ]),
    )
    .expect("write input");
    let output = default_output_path(&input);

    let outcome = flatten_file(&input, &output, &FlattenOptions::new(3, 2)).expect("flatten");

    assert_eq!(outcome.output_path, dir.path().join("flattened-worksheet.csv"));
    assert_eq!(outcome.summary.row_count, 2);
    assert_eq!(outcome.summary.session_count, 1);
    assert_eq!(outcome.summary.student_count, 2);

    let mut reader = csv::Reader::from_path(&output).expect("open output");
    let header = reader.headers().expect("header").clone();
    assert_eq!(header.len(), 8 + 3 * 2 + 2 * 3);
    let rows: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .expect("records");
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][3], "Reading, Grade 3");
    assert_eq!(&rows[0][7], "Comprehension");
    assert_eq!(&rows[0][8], "Vocab");
    assert_eq!(&rows[1][2], "stu-2");
    // stu-2 never answered a Comprehension item
    assert_eq!(&rows[1][10], "");
    assert_eq!(&rows[1][11], "2");
}

#[test]
fn failure_leaves_no_output_file() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("worksheet.csv");
    fs::write(&input, worksheet(&[["S1", "stu-1", "Vocab", "abc"]])).expect("write input");
    let output = dir.path().join("out.csv");

    let err = flatten_file(&input, &output, &FlattenOptions::default()).unwrap_err();

    assert!(matches!(
        err,
        WorksheetError::InvalidValue { field: "response_value", .. }
    ));
    assert!(!output.exists());
    let leftovers = fs::read_dir(dir.path()).expect("read dir").count();
    assert_eq!(leftovers, 1);
}

#[test]
fn header_only_input_writes_header_only() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("empty.csv");
    fs::write(&input, worksheet(&[])).expect("write input");
    let output = dir.path().join("out.csv");

    let outcome = flatten_file(&input, &output, &FlattenOptions::new(1, 1)).expect("flatten");

    assert_eq!(outcome.summary.row_count, 0);
    let text = fs::read_to_string(&output).expect("read output");
    assert_eq!(text.lines().count(), 1);
    assert!(text.starts_with("session_id,test_date,student_guid"));
}
