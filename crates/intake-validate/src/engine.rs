//! Validation aggregator.
//!
//! Runs every rule of [`RuleId::ALL`] unconditionally, in order, and folds
//! the outcomes into a [`ValidationResult`]. A rule whose control could not
//! be read fails with "required" without being evaluated.

use tracing::{debug, info, info_span, warn};

use intake_ingest::{FormSnapshot, FormSource, controls, extract, redact_value};
use intake_model::{FieldName, ValidationOutcome, ValidationResult};

use crate::ValidationContext;
use crate::rules::format::{FormatChecker, StandardFormats, text_of};
use crate::rules::{REQUIRED, RuleId};

/// Snapshot and result of one run against a live source.
#[derive(Debug, Clone)]
pub struct ValidationRun {
    /// Snapshot after ZIP normalization.
    pub snapshot: FormSnapshot,
    pub result: ValidationResult,
}

/// Validate a snapshot with the standard format constraints.
pub fn validate_all(snapshot: &mut FormSnapshot, ctx: &ValidationContext) -> ValidationResult {
    validate_all_with(snapshot, ctx, &StandardFormats)
}

/// Validate a snapshot with a caller-supplied format checker.
pub fn validate_all_with<C: FormatChecker + ?Sized>(
    snapshot: &mut FormSnapshot,
    ctx: &ValidationContext,
    formats: &C,
) -> ValidationResult {
    let span = info_span!("validate", as_of = %ctx.today());
    let _guard = span.enter();

    let mut outcomes = Vec::with_capacity(RuleId::ALL.len());
    for rule in RuleId::ALL {
        let outcome = if snapshot.is_missing(rule.field()) {
            ValidationOutcome::fail(rule.field(), REQUIRED)
        } else {
            rule.evaluate(snapshot, ctx, formats)
        };
        debug!(
            rule = ?rule,
            field = %outcome.field,
            value = redact_value(text_of(snapshot, rule.field())),
            passed = outcome.passed,
            reason = outcome.reason.as_deref().unwrap_or("-"),
            "rule evaluated"
        );
        outcomes.push(outcome);
    }

    let result = ValidationResult::from_outcomes(outcomes);
    info!(
        passed = result.overall_passed,
        rule_count = result.outcomes.len(),
        failure_count = result.failure_count(),
        "validation complete"
    );
    result
}

/// Extract from `source`, validate, and write the normalized ZIP back.
///
/// The write-back happens only when the ZIP rule passed and changed the
/// value. A source that refuses the write is logged, not propagated.
pub fn run_validation<S: FormSource + ?Sized>(
    source: &mut S,
    ctx: &ValidationContext,
) -> ValidationRun {
    let mut snapshot = extract(&*source);
    let entered_zip = snapshot.zip.clone();
    let result = validate_all(&mut snapshot, ctx);

    if result.passed(FieldName::Zip) && snapshot.zip != entered_zip {
        match source.write_text(controls::ZIP, &snapshot.zip) {
            Ok(()) => debug!(zip = redact_value(&snapshot.zip), "normalized ZIP written back"),
            Err(error) => warn!(%error, "could not write normalized ZIP back"),
        }
    }

    ValidationRun { snapshot, result }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Rejecting;

    impl FormatChecker for Rejecting {
        fn check(&self, _field: FieldName, _value: &str) -> Result<(), String> {
            Err("rejected".to_string())
        }
    }

    #[test]
    fn custom_checker_governs_format_rules_only() {
        let mut snapshot = FormSnapshot::default();
        let ctx = ValidationContext::current();
        let result = validate_all_with(&mut snapshot, &ctx, &Rejecting);

        assert_eq!(result.outcomes.len(), RuleId::ALL.len());
        assert_eq!(result.reason_for(FieldName::Address2), Some("rejected"));
        assert_eq!(result.reason_for(FieldName::Zip), Some(REQUIRED));
        assert_eq!(result.reason_for(FieldName::Housing), Some("choose one"));
    }

    #[test]
    fn missing_controls_fail_required_even_when_optional() {
        let mut snapshot = FormSnapshot::default();
        snapshot.mark_missing(FieldName::Address2);
        let result = validate_all(&mut snapshot, &ValidationContext::current());
        assert_eq!(result.reason_for(FieldName::Address2), Some(REQUIRED));
        assert_eq!(result.reason_for(FieldName::MiddleInitial), None);
    }
}
