use serde::{Deserialize, Serialize};

use crate::FieldName;

/// Pass/fail verdict of one rule against the current input.
///
/// `reason` is present iff `passed` is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub field: FieldName,
    pub passed: bool,
    pub reason: Option<String>,
}

impl ValidationOutcome {
    pub fn pass(field: FieldName) -> Self {
        Self {
            field,
            passed: true,
            reason: None,
        }
    }

    pub fn fail(field: FieldName, reason: impl Into<String>) -> Self {
        Self {
            field,
            passed: false,
            reason: Some(reason.into()),
        }
    }

    /// Build from a rule check that yields the failure reason, if any.
    pub fn from_check(field: FieldName, check: Result<(), String>) -> Self {
        match check {
            Ok(()) => Self::pass(field),
            Err(reason) => Self::fail(field, reason),
        }
    }
}

/// All outcomes of one validation run, in rule order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    pub overall_passed: bool,
    pub outcomes: Vec<ValidationOutcome>,
}

impl ValidationResult {
    pub fn from_outcomes(outcomes: Vec<ValidationOutcome>) -> Self {
        let overall_passed = outcomes.iter().all(|outcome| outcome.passed);
        Self {
            overall_passed,
            outcomes,
        }
    }

    pub fn outcome_for(&self, field: FieldName) -> Option<&ValidationOutcome> {
        self.outcomes.iter().find(|outcome| outcome.field == field)
    }

    pub fn reason_for(&self, field: FieldName) -> Option<&str> {
        self.outcome_for(field)
            .and_then(|outcome| outcome.reason.as_deref())
    }

    /// Fields without an outcome count as passing.
    pub fn passed(&self, field: FieldName) -> bool {
        self.outcome_for(field).is_none_or(|outcome| outcome.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &ValidationOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.passed)
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }
}
