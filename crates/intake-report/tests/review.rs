//! Integration tests for the review builder.

use chrono::NaiveDate;

use intake_ingest::{FormDocument, FormSnapshot, controls, extract};
use intake_model::{ReviewSection, ReviewStatus, ValidationResult};
use intake_report::{ReviewBuilder, ReviewOptions, build_review, labels};
use intake_validate::{ValidationContext, validate_all};

fn ctx() -> ValidationContext {
    ValidationContext::with_today(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap())
}

fn valid_form() -> FormDocument {
    FormDocument::new()
        .with_text(controls::FIRST_NAME, "Maria")
        .with_text(controls::MIDDLE_INITIAL, "L")
        .with_text(controls::LAST_NAME, "Garcia")
        .with_text(controls::DOB_MONTH, "10")
        .with_text(controls::DOB_DAY, "16")
        .with_text(controls::DOB_YEAR, "1996")
        .with_text(controls::ID_NUMBER, "987654321")
        .with_text(controls::EMAIL, "maria.garcia@example.org")
        .with_text(controls::PHONE, "832-555-0147")
        .with_text(controls::ADDRESS1, "4500 Main St")
        .with_text(controls::ADDRESS2, "")
        .with_text(controls::CITY, "Houston")
        .with_text(controls::STATE, "TX")
        .with_text(controls::ZIP, "77002-1234")
        .with_choice(controls::HOUSING, Some("rent"))
        .with_choice(controls::VACCINATION, Some("yes"))
        .with_choice(controls::INSURANCE, Some("yes"))
        .with_checked(controls::MEDICAL_HISTORY, &["asthma", "high blood pressure"])
        .with_text(controls::SYMPTOMS, "")
        .with_number(controls::SALARY, 65000.0)
        .with_text(controls::USER_ID, "mgarcia96")
        .with_text(controls::PASSWORD, "Abcd123!")
        .with_text(controls::PASSWORD_CONFIRM, "Abcd123!")
}

fn validated(form: &FormDocument) -> (FormSnapshot, ValidationResult) {
    let mut snapshot = extract(form);
    let result = validate_all(&mut snapshot, &ctx());
    (snapshot, result)
}

#[test]
fn valid_form_reviews_all_pass() {
    let (snapshot, result) = validated(&valid_form());
    let model = build_review(&snapshot, &result, &ctx());

    assert!(result.overall_passed);
    assert!(model.all_pass());
    assert_eq!(model.rows.len(), 14);
    for row in &model.rows {
        assert_eq!(row.status, ReviewStatus::Pass, "row {}", row.label);
        assert_eq!(row.reason, None);
    }
}

#[test]
fn rows_are_grouped_in_section_order() {
    let (snapshot, result) = validated(&valid_form());
    let model = build_review(&snapshot, &result, &ctx());

    let sections: Vec<ReviewSection> = model.rows.iter().map(|row| row.section).collect();
    let mut sorted = sections.clone();
    sorted.sort();
    assert_eq!(sections, sorted);
    assert_eq!(sections.first(), Some(&ReviewSection::Identity));
    assert_eq!(sections.last(), Some(&ReviewSection::Account));
    assert_eq!(model.rows_in(ReviewSection::RequestedInfo).count(), 6);
}

#[test]
fn display_values_are_formatted() {
    let (snapshot, result) = validated(&valid_form());
    let model = build_review(&snapshot, &result, &ctx());
    let value = |label: &str| model.row(label).unwrap().display_value.clone();

    assert_eq!(value(labels::NAME), "Maria L. Garcia");
    assert_eq!(value(labels::DATE_OF_BIRTH), "10/16/1996");
    assert_eq!(value(labels::ID_NUMBER), "*****4321");
    assert_eq!(value(labels::ADDRESS), "4500 Main St, Houston, TX 77002");
    assert_eq!(value(labels::MEDICAL_HISTORY), "asthma, high blood pressure");
    assert_eq!(value(labels::SYMPTOMS), "(none)");
    assert_eq!(value(labels::SALARY), "$65,000");
    assert_eq!(value(labels::PASSWORD), "********");
}

#[test]
fn unselected_insurance_marks_only_that_row() {
    let form = valid_form().with_choice(controls::INSURANCE, None);
    let (snapshot, result) = validated(&form);
    let model = build_review(&snapshot, &result, &ctx());

    assert!(!result.overall_passed);
    assert_eq!(model.error_count(), 1);
    insta::assert_json_snapshot!(model.row(labels::INSURANCE).unwrap(), @r#"
    {
      "section": "requested_info",
      "label": "Insurance",
      "display_value": "(none)",
      "status": "error",
      "reason": "choose one"
    }
    "#);
}

#[test]
fn symptoms_are_escaped_and_truncated() {
    let form = valid_form().with_text(controls::SYMPTOMS, "<script>cough</script> for a week");
    let (snapshot, result) = validated(&form);
    let model = ReviewBuilder::new(ctx())
        .with_options(ReviewOptions {
            symptom_preview_chars: 16,
            ..ReviewOptions::default()
        })
        .build(&snapshot, &result);

    let symptoms = model.row(labels::SYMPTOMS).unwrap();
    assert_eq!(symptoms.display_value, "&lt;script&gt;cough&lt;/…");
    assert_eq!(symptoms.status, ReviewStatus::Pass);
}

#[test]
fn unvalidated_rows_always_pass() {
    let form = FormDocument::new();
    let (snapshot, result) = validated(&form);
    let model = build_review(&snapshot, &result, &ctx());

    for label in [labels::MEDICAL_HISTORY, labels::SYMPTOMS, labels::SALARY] {
        assert_eq!(model.row(label).unwrap().status, ReviewStatus::Pass);
    }
    assert_eq!(model.error_count(), 11);
}

#[test]
fn recomputed_rows_agree_with_the_aggregator() {
    let form = valid_form()
        .with_text(controls::DOB_MONTH, "02")
        .with_text(controls::DOB_DAY, "30")
        .with_text(controls::ZIP, "123")
        .with_text(controls::PASSWORD_CONFIRM, "Abcd123?");
    let (snapshot, result) = validated(&form);
    let model = build_review(&snapshot, &result, &ctx());

    let dob = model.row(labels::DATE_OF_BIRTH).unwrap();
    assert_eq!(dob.status, ReviewStatus::Error);
    assert_eq!(dob.reason.as_deref(), Some("not a valid calendar date"));

    let address = model.row(labels::ADDRESS).unwrap();
    assert_eq!(
        address.reason.as_deref(),
        Some("ZIP code: invalid: must start with 5 digits")
    );
    assert_eq!(address.display_value, "4500 Main St, Houston, TX 123");

    let password = model.row(labels::PASSWORD).unwrap();
    assert_eq!(password.reason.as_deref(), Some("passwords do not match"));
}

#[test]
fn name_row_combines_field_reasons() {
    let form = valid_form()
        .with_text(controls::MIDDLE_INITIAL, "LM")
        .with_text(controls::LAST_NAME, "");
    let (snapshot, result) = validated(&form);
    let model = build_review(&snapshot, &result, &ctx());

    let name = model.row(labels::NAME).unwrap();
    assert_eq!(name.display_value, "Maria LM.");
    assert_eq!(
        name.reason.as_deref(),
        Some("Middle initial: must be exactly 1 character; Last name: required")
    );
}
