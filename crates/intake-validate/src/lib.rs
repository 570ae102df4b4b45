//! Validation rule engine for the patient intake form.
//!
//! Rules are pure functions over a [`FormSnapshot`]. The aggregator runs all
//! of them in a fixed order on every call and never short-circuits, so each
//! run reports every failing field at once.
//!
//! [`FormSnapshot`]: intake_ingest::FormSnapshot

mod context;
mod engine;
pub mod rules;

pub use context::ValidationContext;
pub use engine::{ValidationRun, run_validation, validate_all, validate_all_with};
pub use rules::format::{FieldFormat, FormatChecker, StandardFormats};
pub use rules::{REQUIRED, RuleId, RuleKind};
