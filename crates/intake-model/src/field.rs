//! Logical form fields and the values extracted for them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// One logical input on the intake form.
///
/// Field groups (date-of-birth components, the password pair) are a single
/// logical field so that every validation outcome maps to exactly one name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
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
    Password,
    MedicalHistory,
    Symptoms,
    Salary,
}

impl FieldName {
    pub const ALL: [FieldName; 20] = [
        FieldName::FirstName,
        FieldName::MiddleInitial,
        FieldName::LastName,
        FieldName::IdNumber,
        FieldName::Email,
        FieldName::Phone,
        FieldName::Address1,
        FieldName::Address2,
        FieldName::City,
        FieldName::State,
        FieldName::UserId,
        FieldName::DateOfBirth,
        FieldName::Zip,
        FieldName::Housing,
        FieldName::Vaccination,
        FieldName::Insurance,
        FieldName::Password,
        FieldName::MedicalHistory,
        FieldName::Symptoms,
        FieldName::Salary,
    ];

    /// Stable snake_case key used in reports and error sinks.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::MiddleInitial => "middle_initial",
            Self::LastName => "last_name",
            Self::IdNumber => "id_number",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address1 => "address1",
            Self::Address2 => "address2",
            Self::City => "city",
            Self::State => "state",
            Self::UserId => "user_id",
            Self::DateOfBirth => "date_of_birth",
            Self::Zip => "zip",
            Self::Housing => "housing",
            Self::Vaccination => "vaccination",
            Self::Insurance => "insurance",
            Self::Password => "password",
            Self::MedicalHistory => "medical_history",
            Self::Symptoms => "symptoms",
            Self::Salary => "salary",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::MiddleInitial => "Middle initial",
            Self::LastName => "Last name",
            Self::IdNumber => "ID number",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Address1 => "Address line 1",
            Self::Address2 => "Address line 2",
            Self::City => "City",
            Self::State => "State",
            Self::UserId => "User ID",
            Self::DateOfBirth => "Date of birth",
            Self::Zip => "ZIP code",
            Self::Housing => "Housing",
            Self::Vaccination => "Vaccination status",
            Self::Insurance => "Insurance status",
            Self::Password => "Password",
            Self::MedicalHistory => "Medical history",
            Self::Symptoms => "Symptoms",
            Self::Salary => "Desired salary",
        }
    }

    /// Fields that may be left blank.
    pub fn is_optional(&self) -> bool {
        matches!(
            self,
            Self::MiddleInitial | Self::Address2 | Self::MedicalHistory | Self::Symptoms
        )
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str() == key)
            .ok_or_else(|| ModelError::UnknownField(s.to_string()))
    }
}

/// A typed datum read from the form at validation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    /// Free text from a single input.
    Text(String),
    /// Selected option of an exclusive choice group, if any.
    Choice(Option<String>),
    /// Checked options of a multi-choice group.
    Choices(Vec<String>),
    /// Range slider position.
    Number(f64),
}

impl FieldValue {
    /// True when nothing was entered or selected.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(value) => value.trim().is_empty(),
            Self::Choice(value) => value.is_none(),
            Self::Choices(values) => values.is_empty(),
            Self::Number(_) => false,
        }
    }
}
