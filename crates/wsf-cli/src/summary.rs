use anyhow::{Context, Result};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::FlattenResult;

pub fn print_summary(result: &FlattenResult) {
    println!("Input: {}", result.input.display());
    println!("Output: {}", result.output.display());

    let summary = &result.summary;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let counts = [
        ("Response rows", summary.record_count),
        ("Sessions", summary.session_count),
        ("Students", summary.student_count),
        ("Output rows", summary.row_count),
        ("Output columns", summary.column_count),
        ("Most domains in a session", summary.largest_domain_count),
        ("Most questions in an assessment", summary.largest_question_count),
    ];
    for (label, value) in counts {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    table.add_row(vec![
        Cell::new("Inconsistent values"),
        count_cell(summary.consistency_issues.len(), Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Truncated sessions"),
        count_cell(summary.truncations.len(), Color::Red),
    ]);
    println!("{table}");
    print_truncation_table(result);
}

fn print_truncation_table(result: &FlattenResult) {
    let summary = &result.summary;
    if !summary.is_truncated() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Session"),
        header_cell("Domains"),
        header_cell("Dropped domains"),
        header_cell("Assessments cut"),
        header_cell("Most questions"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for truncation in &summary.truncations {
        let dropped = if truncation.dropped_domains.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(truncation.dropped_domains.join(", ")).fg(Color::Red)
        };
        table.add_row(vec![
            Cell::new(&truncation.session_id),
            Cell::new(truncation.domain_count),
            dropped,
            count_cell(truncation.truncated_assessments, Color::Red),
            Cell::new(truncation.max_responses),
        ]);
    }
    println!();
    println!("Truncated:");
    println!("{table}");
    eprintln!(
        "hint: rerun with --max-domains {} --max-questions {} to keep every value",
        summary
            .largest_domain_count
            .max(result.options.max_domain_count),
        summary
            .largest_question_count
            .max(result.options.max_question_count),
    );
}

pub fn print_summary_json(result: &FlattenResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result).context("serialize summary")?;
    println!("{json}");
    Ok(())
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
