//! Data model for the patient intake form.
//!
//! Every type here is a transient snapshot: validation runs and review
//! builds produce fresh values from the current form state and nothing is
//! carried between runs.

pub mod error;
pub mod field;
pub mod outcome;
pub mod review;

pub use error::{ModelError, Result};
pub use field::{FieldName, FieldValue};
pub use outcome::{ValidationOutcome, ValidationResult};
pub use review::{ReviewModel, ReviewRow, ReviewSection, ReviewStatus};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_counts_failures() {
        let result = ValidationResult::from_outcomes(vec![
            ValidationOutcome::pass(FieldName::FirstName),
            ValidationOutcome::fail(FieldName::Insurance, "choose one"),
            ValidationOutcome::fail(FieldName::Zip, "required"),
        ]);
        assert!(!result.overall_passed);
        assert_eq!(result.failure_count(), 2);
        assert_eq!(
            result.reason_for(FieldName::Insurance),
            Some("choose one")
        );
    }

    #[test]
    fn result_serializes() {
        let result = ValidationResult::from_outcomes(vec![ValidationOutcome::pass(
            FieldName::Email,
        )]);
        let json = serde_json::to_string(&result).expect("serialize result");
        let round: ValidationResult = serde_json::from_str(&json).expect("deserialize result");
        assert_eq!(round, result);
    }
}
