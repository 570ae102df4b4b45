//! Terminal, JSON and CSV renderings of review output.

use anyhow::{Context, Result};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use intake_core::SubmitDecision;
use intake_model::{ReviewModel, ReviewRow, ReviewStatus};
use intake_validate::{RuleId, RuleKind, StandardFormats};

use crate::run::FormReport;

pub fn review_table(model: &ReviewModel) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Section"),
        header_cell("Field"),
        header_cell("Value"),
        header_cell("Status"),
        header_cell("Reason"),
    ]);
    apply_review_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Center);

    let mut previous_section = None;
    for row in &model.rows {
        let section_cell = if previous_section == Some(row.section) {
            dim_cell("")
        } else {
            Cell::new(row.section.title())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold)
        };
        previous_section = Some(row.section);
        table.add_row(vec![
            section_cell,
            Cell::new(&row.label),
            Cell::new(&row.display_value),
            status_cell(row.status),
            reason_cell(row),
        ]);
    }
    table
}

pub fn rules_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Field"),
        header_cell("Kind"),
        header_cell("Constraint"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, rule) in RuleId::ALL.iter().enumerate() {
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(rule.field().label()),
            Cell::new(rule.kind().label()),
            Cell::new(rule_constraint(*rule)),
        ]);
    }
    table
}

/// Short human description of what `rule` enforces.
pub fn rule_constraint(rule: RuleId) -> String {
    match rule.kind() {
        RuleKind::Format => StandardFormats::format_for(rule.field()).map_or_else(
            || "-".to_string(),
            |format| {
                let length = if format.min_len == format.max_len {
                    format!("{} chars", format.min_len)
                } else {
                    format!("{}-{} chars", format.min_len, format.max_len)
                };
                let optional = if format.optional { ", optional" } else { "" };
                format!("{length}{optional}; {}", format.description)
            },
        ),
        RuleKind::DateOfBirth => {
            "valid MM/DD/YYYY date, not in the future, at most 120 years ago".to_string()
        }
        RuleKind::Zip => "5 leading digits; extra characters are dropped".to_string(),
        RuleKind::Choice => "one option must be selected".to_string(),
        RuleKind::PasswordPair => {
            "8-30 chars, upper, lower, digit and special; no quotes or identity; must match"
                .to_string()
        }
    }
}

/// Pretty JSON of a full report.
pub fn report_json(report: &FormReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("serialize report")
}

/// One CSV record per review row.
pub fn review_csv(model: &ReviewModel) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in &model.rows {
        writer.serialize(row).context("write review row")?;
    }
    let bytes = writer.into_inner().context("flush review csv")?;
    String::from_utf8(bytes).context("review csv is not UTF-8")
}

pub fn print_report(report: &FormReport) {
    println!("{}", report.header_date);
    println!("{}", review_table(&report.review));
    let errors = report.review.error_count();
    if errors == 0 {
        println!("All {} entries look good.", report.review.rows.len());
    } else {
        println!("{errors} of {} entries need attention.", report.review.rows.len());
    }
    match report.decision {
        Some(SubmitDecision::Proceed) => println!("Submission: proceed"),
        Some(SubmitDecision::Blocked) => println!("Submission: blocked"),
        None => {}
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_review_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(16)),
            ColumnConstraint::UpperBoundary(Width::Fixed(18)),
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::UpperBoundary(Width::Percentage(35)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(status: ReviewStatus) -> Cell {
    match status {
        ReviewStatus::Pass => Cell::new(status.label()).fg(Color::Green),
        ReviewStatus::Error => Cell::new(status.label())
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn reason_cell(row: &ReviewRow) -> Cell {
    match &row.reason {
        Some(reason) => Cell::new(reason).fg(Color::Red),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
