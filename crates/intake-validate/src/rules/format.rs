//! Structural rules: declarative pattern/length constraints on single text
//! fields.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use intake_ingest::FormSnapshot;
use intake_model::FieldName;

use crate::rules::REQUIRED;

/// USPS codes for the 50 states, DC and Puerto Rico.
pub const STATE_CODES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH",
    "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "PR", "RI", "SC", "SD", "TN", "TX",
    "UT", "VT", "VA", "WA", "WV", "WI", "WY",
];

/// Format constraint for one structural field.
#[derive(Debug, Clone)]
pub struct FieldFormat {
    pub field: FieldName,
    /// Blank input passes instead of failing "required".
    pub optional: bool,
    pub min_len: usize,
    pub max_len: usize,
    pub pattern: Option<Regex>,
    pub allowed: &'static [&'static str],
    /// Reason reported when the pattern or allowed-value check fails.
    pub description: &'static str,
}

impl FieldFormat {
    fn new(field: FieldName, min_len: usize, max_len: usize, description: &'static str) -> Self {
        Self {
            field,
            optional: field.is_optional(),
            min_len,
            max_len,
            pattern: None,
            allowed: &[],
            description,
        }
    }

    fn pattern(mut self, pattern: &str) -> Self {
        self.pattern = Some(Regex::new(pattern).expect("Invalid field format regex"));
        self
    }

    fn allowed(mut self, values: &'static [&'static str]) -> Self {
        self.allowed = values;
        self
    }

    /// Check raw input; length, then pattern, then allowed values.
    pub fn check(&self, value: &str) -> Result<(), String> {
        if value.trim().is_empty() {
            return if self.optional {
                Ok(())
            } else {
                Err(REQUIRED.to_string())
            };
        }
        let length = value.chars().count();
        if length < self.min_len || length > self.max_len {
            return Err(if self.min_len == self.max_len {
                let unit = if self.min_len == 1 { "character" } else { "characters" };
                format!("must be exactly {} {unit}", self.min_len)
            } else {
                format!("must be {} to {} characters", self.min_len, self.max_len)
            });
        }
        if let Some(pattern) = &self.pattern
            && !pattern.is_match(value)
        {
            return Err(self.description.to_string());
        }
        if !self.allowed.is_empty() && !self.allowed.contains(&value) {
            return Err(self.description.to_string());
        }
        Ok(())
    }
}

/// Source of structural constraints, one per field.
pub trait FormatChecker {
    /// `Err` carries the human-readable reason. Fields without a
    /// constraint pass.
    fn check(&self, field: FieldName, value: &str) -> Result<(), String>;
}

/// Constraints of the intake page.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardFormats;

static STANDARD_FORMATS: LazyLock<BTreeMap<FieldName, FieldFormat>> = LazyLock::new(|| {
    [
        FieldFormat::new(
            FieldName::FirstName,
            1,
            30,
            "may contain only letters, apostrophes, and dashes",
        )
        .pattern(r"^[A-Za-z'-]+$"),
        FieldFormat::new(FieldName::MiddleInitial, 1, 1, "must be a single letter")
            .pattern(r"^[A-Za-z]$"),
        FieldFormat::new(
            FieldName::LastName,
            1,
            30,
            "may contain only letters, apostrophes, dashes, and the digits 2 to 5",
        )
        .pattern(r"^[A-Za-z2-5'-]+$"),
        FieldFormat::new(FieldName::IdNumber, 5, 30, "must contain only digits")
            .pattern(r"^[0-9]+$"),
        FieldFormat::new(FieldName::Email, 5, 60, "must look like name@domain.tld")
            .pattern(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$"),
        FieldFormat::new(FieldName::Phone, 12, 12, "must match 000-000-0000")
            .pattern(r"^[0-9]{3}-[0-9]{3}-[0-9]{4}$"),
        FieldFormat::new(FieldName::Address1, 2, 30, "must be 2 to 30 characters"),
        FieldFormat::new(FieldName::Address2, 2, 30, "must be 2 to 30 characters"),
        FieldFormat::new(
            FieldName::City,
            2,
            30,
            "may contain only letters, spaces, periods, apostrophes, and dashes",
        )
        .pattern(r"^[A-Za-z .'-]+$"),
        FieldFormat::new(FieldName::State, 2, 2, "must be a two-letter state code")
            .allowed(STATE_CODES),
        FieldFormat::new(
            FieldName::UserId,
            5,
            30,
            "must start with a letter and contain only letters, digits, underscores, or dashes",
        )
        .pattern(r"^[A-Za-z][A-Za-z0-9_-]*$"),
    ]
    .into_iter()
    .map(|format| (format.field, format))
    .collect()
});

impl StandardFormats {
    pub fn format_for(field: FieldName) -> Option<&'static FieldFormat> {
        STANDARD_FORMATS.get(&field)
    }

    pub fn formats() -> impl Iterator<Item = &'static FieldFormat> {
        STANDARD_FORMATS.values()
    }
}

impl FormatChecker for StandardFormats {
    fn check(&self, field: FieldName, value: &str) -> Result<(), String> {
        match Self::format_for(field) {
            Some(format) => format.check(value),
            None => Ok(()),
        }
    }
}

/// Raw text of a structural field; empty for non-text fields.
pub fn text_of(snapshot: &FormSnapshot, field: FieldName) -> &str {
    match field {
        FieldName::FirstName => &snapshot.first_name,
        FieldName::MiddleInitial => &snapshot.middle_initial,
        FieldName::LastName => &snapshot.last_name,
        FieldName::IdNumber => &snapshot.id_number,
        FieldName::Email => &snapshot.email,
        FieldName::Phone => &snapshot.phone,
        FieldName::Address1 => &snapshot.address1,
        FieldName::Address2 => &snapshot.address2,
        FieldName::City => &snapshot.city,
        FieldName::State => &snapshot.state,
        FieldName::UserId => &snapshot.user_id,
        FieldName::Zip => &snapshot.zip,
        FieldName::Symptoms => &snapshot.symptoms,
        _ => "",
    }
}
