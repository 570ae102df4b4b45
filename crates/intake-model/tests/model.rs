use intake_model::{
    FieldName, FieldValue, ReviewModel, ReviewRow, ReviewSection, ReviewStatus, ValidationOutcome,
    ValidationResult,
};

fn row(section: ReviewSection, label: &str, status: ReviewStatus) -> ReviewRow {
    ReviewRow {
        section,
        label: label.to_string(),
        display_value: "value".to_string(),
        status,
        reason: None,
    }
}

#[test]
fn review_model_orders_rows_by_section() {
    let model = ReviewModel::new(vec![
        row(ReviewSection::Account, "User ID", ReviewStatus::Pass),
        row(ReviewSection::Identity, "Name", ReviewStatus::Pass),
        row(ReviewSection::Address, "Address", ReviewStatus::Error),
        row(ReviewSection::Identity, "Date of Birth", ReviewStatus::Pass),
    ]);

    let labels: Vec<&str> = model.rows.iter().map(|row| row.label.as_str()).collect();
    assert_eq!(labels, vec!["Name", "Date of Birth", "Address", "User ID"]);
    assert_eq!(model.rows_in(ReviewSection::Identity).count(), 2);
    assert_eq!(model.error_count(), 1);
    assert!(!model.all_pass());
}

#[test]
fn section_parses_titles_and_keys() {
    assert_eq!(
        "Requested Info".parse::<ReviewSection>().unwrap(),
        ReviewSection::RequestedInfo
    );
    assert_eq!(
        "account".parse::<ReviewSection>().unwrap(),
        ReviewSection::Account
    );
    assert!("billing".parse::<ReviewSection>().is_err());
}

#[test]
fn empty_result_passes() {
    let result = ValidationResult::from_outcomes(Vec::new());
    assert!(result.overall_passed);
    assert!(result.passed(FieldName::Zip));
}

#[test]
fn outcome_reason_present_iff_failed() {
    let pass = ValidationOutcome::from_check(FieldName::Phone, Ok(()));
    let fail = ValidationOutcome::from_check(FieldName::Phone, Err("required".to_string()));
    assert!(pass.passed && pass.reason.is_none());
    assert!(!fail.passed && fail.reason.as_deref() == Some("required"));
}

#[test]
fn outcome_serializes_with_snake_case_field() {
    let outcome = ValidationOutcome::fail(FieldName::DateOfBirth, "cannot be in the future");
    let json = serde_json::to_string(&outcome).expect("serialize outcome");
    assert_eq!(
        json,
        r#"{"field":"date_of_birth","passed":false,"reason":"cannot be in the future"}"#
    );
}

#[test]
fn field_value_is_tagged() {
    let value = FieldValue::Choice(Some("rent".to_string()));
    let json = serde_json::to_string(&value).expect("serialize value");
    assert_eq!(json, r#"{"kind":"choice","value":"rent"}"#);
}
