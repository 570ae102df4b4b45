//! Field rules.
//!
//! Each rule module exposes a pure `check_*` function returning the failure
//! reason, plus a `validate_*` wrapper producing a [`ValidationOutcome`].
//! [`RuleId`] fixes the evaluation order used by the aggregator.

pub mod choice;
pub mod dob;
pub mod format;
pub mod password;
pub mod zip;

use serde::Serialize;

use intake_ingest::FormSnapshot;
use intake_model::{FieldName, ValidationOutcome};

use crate::ValidationContext;
use crate::rules::format::FormatChecker;
use crate::rules::password::PasswordInput;

/// Reason reported for blank required input and for unavailable controls.
pub const REQUIRED: &str = "required";

/// Rule family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Pattern or length constraint on one text field.
    Format,
    DateOfBirth,
    Zip,
    /// Exclusive choice group that needs a selection.
    Choice,
    PasswordPair,
}

impl RuleKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Format => "Format",
            Self::DateOfBirth => "Date of birth",
            Self::Zip => "ZIP",
            Self::Choice => "Choice group",
            Self::PasswordPair => "Password pair",
        }
    }
}

/// One entry of the fixed rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    FirstName,
    MiddleInitial,
    LastName,
    IdNumber,
    Email,
    Phone,
    Address1,
    Address2,
    City,
    State,
    UserId,
    DateOfBirth,
    Zip,
    Housing,
    Vaccination,
    Insurance,
    PasswordPair,
}

impl RuleId {
    /// Evaluation order: format rules, date of birth, ZIP, choice groups,
    /// then the password pair.
    pub const ALL: [RuleId; 17] = [
        RuleId::FirstName,
        RuleId::MiddleInitial,
        RuleId::LastName,
        RuleId::IdNumber,
        RuleId::Email,
        RuleId::Phone,
        RuleId::Address1,
        RuleId::Address2,
        RuleId::City,
        RuleId::State,
        RuleId::UserId,
        RuleId::DateOfBirth,
        RuleId::Zip,
        RuleId::Housing,
        RuleId::Vaccination,
        RuleId::Insurance,
        RuleId::PasswordPair,
    ];

    /// Field the outcome is attributed to.
    pub fn field(&self) -> FieldName {
        match self {
            Self::FirstName => FieldName::FirstName,
            Self::MiddleInitial => FieldName::MiddleInitial,
            Self::LastName => FieldName::LastName,
            Self::IdNumber => FieldName::IdNumber,
            Self::Email => FieldName::Email,
            Self::Phone => FieldName::Phone,
            Self::Address1 => FieldName::Address1,
            Self::Address2 => FieldName::Address2,
            Self::City => FieldName::City,
            Self::State => FieldName::State,
            Self::UserId => FieldName::UserId,
            Self::DateOfBirth => FieldName::DateOfBirth,
            Self::Zip => FieldName::Zip,
            Self::Housing => FieldName::Housing,
            Self::Vaccination => FieldName::Vaccination,
            Self::Insurance => FieldName::Insurance,
            Self::PasswordPair => FieldName::Password,
        }
    }

    pub fn kind(&self) -> RuleKind {
        match self {
            Self::DateOfBirth => RuleKind::DateOfBirth,
            Self::Zip => RuleKind::Zip,
            Self::Housing | Self::Vaccination | Self::Insurance => RuleKind::Choice,
            Self::PasswordPair => RuleKind::PasswordPair,
            _ => RuleKind::Format,
        }
    }

    /// Evaluate against the snapshot. Only the ZIP rule writes to it.
    pub fn evaluate<C: FormatChecker + ?Sized>(
        &self,
        snapshot: &mut FormSnapshot,
        ctx: &ValidationContext,
        formats: &C,
    ) -> ValidationOutcome {
        let field = self.field();
        match self.kind() {
            RuleKind::Format => {
                let value = format::text_of(snapshot, field);
                ValidationOutcome::from_check(field, formats.check(field, value))
            }
            RuleKind::DateOfBirth => dob::validate_date_of_birth(&snapshot.date_of_birth, ctx),
            RuleKind::Zip => zip::validate_zip(snapshot),
            RuleKind::Choice => choice::validate_choice(field, choice::selection_of(snapshot, field)),
            RuleKind::PasswordPair => {
                password::validate_password_pair(&PasswordInput::from_snapshot(snapshot))
            }
        }
    }
}
