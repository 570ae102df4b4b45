//! Integration tests for running session events against form documents.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde_json::Value;
use tempfile::TempDir;

use intake_cli::render::{report_json, review_csv};
use intake_cli::run::run_form;
use intake_core::{FormEvent, FormState, SessionOptions, SubmitDecision};
use intake_ingest::{FormDocument, controls};
use intake_model::FieldName;

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/complete_form.json")
}

fn options() -> SessionOptions {
    SessionOptions::new().with_as_of(NaiveDate::from_ymd_opt(2026, 10, 16))
}

/// Copy of the fixture with `edit` applied, in a temp dir.
fn edited_fixture(dir: &TempDir, edit: impl FnOnce(FormDocument) -> FormDocument) -> PathBuf {
    let document = FormDocument::from_path(&fixture()).unwrap();
    let path = dir.path().join("form.json");
    edit(document).save(&path).unwrap();
    path
}

#[test]
fn complete_fixture_reviews_clean() {
    let report = run_form(&fixture(), FormEvent::ReviewRequested, &options()).unwrap();

    assert!(report.passed());
    assert_eq!(report.decision, None);
    assert!(report.field_errors.is_empty());
    assert_eq!(report.header_date, "Friday, October 16, 2026");
    assert_eq!(report.review.rows.len(), 14);
}

#[test]
fn review_normalizes_zip_in_memory_only() {
    let report = run_form(&fixture(), FormEvent::ReviewRequested, &options()).unwrap();

    assert_eq!(
        report.document.text.get(controls::ZIP).map(String::as_str),
        Some("77002")
    );
    let on_disk = FormDocument::from_path(&fixture()).unwrap();
    assert_eq!(
        on_disk.text.get(controls::ZIP).map(String::as_str),
        Some("77002-1234")
    );
}

#[test]
fn submit_with_missing_insurance_is_blocked() {
    let dir = TempDir::new().unwrap();
    let path = edited_fixture(&dir, |document| {
        document.with_choice(controls::INSURANCE, None)
    });

    let report = run_form(&path, FormEvent::SubmitAttempted, &options()).unwrap();

    assert_eq!(report.decision, Some(SubmitDecision::Blocked));
    assert_eq!(
        report.state,
        FormState::Reviewed {
            overall_passed: false
        }
    );
    assert_eq!(
        report.field_errors.get(&FieldName::Insurance).map(String::as_str),
        Some("choose one")
    );
}

#[test]
fn future_birth_date_depends_on_reference_date() {
    let dir = TempDir::new().unwrap();
    let path = edited_fixture(&dir, |document| {
        document.with_text(controls::DOB_YEAR, "2027")
    });

    let today = run_form(&path, FormEvent::SubmitAttempted, &options()).unwrap();
    assert_eq!(today.decision, Some(SubmitDecision::Blocked));
    assert_eq!(
        today.field_errors.get(&FieldName::DateOfBirth).map(String::as_str),
        Some("cannot be in the future")
    );

    let later = options().with_as_of(NaiveDate::from_ymd_opt(2030, 1, 1));
    let report = run_form(&path, FormEvent::SubmitAttempted, &later).unwrap();
    assert_eq!(report.decision, Some(SubmitDecision::Proceed));
}

#[test]
fn missing_document_is_an_error() {
    let dir = TempDir::new().unwrap();
    let error = run_form(
        &dir.path().join("absent.json"),
        FormEvent::ReviewRequested,
        &options(),
    )
    .unwrap_err();
    assert!(format!("{error:#}").contains("load form document"));
}

#[test]
fn malformed_document_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{\"text\": [").unwrap();
    assert!(run_form(&path, FormEvent::ReviewRequested, &options()).is_err());
}

#[test]
fn json_report_carries_state_and_errors() {
    let dir = TempDir::new().unwrap();
    let path = edited_fixture(&dir, |document| document.with_text(controls::PHONE, "555"));
    let report = run_form(&path, FormEvent::SubmitAttempted, &options()).unwrap();

    let json: Value = serde_json::from_str(&report_json(&report).unwrap()).unwrap();
    assert_eq!(json["state"], "reviewed");
    assert_eq!(json["overall_passed"], false);
    assert_eq!(json["decision"], "blocked");
    assert_eq!(json["field_errors"]["phone"], "must be exactly 12 characters");
    assert_eq!(json["review"]["rows"].as_array().map(Vec::len), Some(14));
    assert!(json.get("document").is_none());
}

#[test]
fn csv_has_one_record_per_row() {
    let report = run_form(&fixture(), FormEvent::ReviewRequested, &options()).unwrap();
    let csv = review_csv(&report.review).unwrap();
    let mut lines = csv.lines();

    assert_eq!(
        lines.next(),
        Some("section,label,display_value,status,reason")
    );
    assert_eq!(lines.next(), Some("identity,Name,Maria L. Garcia,pass,"));
    assert_eq!(csv.lines().count(), 15);
    assert!(csv.contains("Mild &lt;cough&gt; since Monday"));
}
