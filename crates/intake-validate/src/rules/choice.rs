//! Required-choice-group rules (housing, vaccination status, insurance).

use intake_ingest::FormSnapshot;
use intake_model::{FieldName, ValidationOutcome};

pub const CHOOSE_ONE: &str = "choose one";

pub fn validate_choice(field: FieldName, selected: Option<&str>) -> ValidationOutcome {
    match selected {
        Some(value) if !value.trim().is_empty() => ValidationOutcome::pass(field),
        _ => ValidationOutcome::fail(field, CHOOSE_ONE),
    }
}

/// Selection of one of the exclusive groups; `None` for other fields.
pub fn selection_of(snapshot: &FormSnapshot, field: FieldName) -> Option<&str> {
    match field {
        FieldName::Housing => snapshot.housing.as_deref(),
        FieldName::Vaccination => snapshot.vaccination.as_deref(),
        FieldName::Insurance => snapshot.insurance.as_deref(),
        _ => None,
    }
}
