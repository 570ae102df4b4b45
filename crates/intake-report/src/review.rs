//! Review builder.
//!
//! Row status comes from the aggregator's outcomes, except the date of
//! birth, address (ZIP part) and password rows, which re-run their rules
//! against the snapshot. Both paths use the same rule functions, so they can
//! only differ in how the result is displayed.

use serde::{Deserialize, Serialize};
use tracing::debug;

use intake_ingest::FormSnapshot;
use intake_model::{
    FieldName, ReviewModel, ReviewRow, ReviewSection, ReviewStatus, ValidationResult,
};
use intake_validate::{REQUIRED, ValidationContext};
use intake_validate::rules::dob::check_date_of_birth;
use intake_validate::rules::password::{PasswordInput, check_password_pair};
use intake_validate::rules::zip::check_zip;

use crate::format::{
    NONE_PLACEHOLDER, escape_angle_brackets, format_currency, mask_all, mask_leading, truncate,
};

/// Row labels, in display order.
pub mod labels {
    pub const NAME: &str = "Name";
    pub const DATE_OF_BIRTH: &str = "Date of Birth";
    pub const ID_NUMBER: &str = "ID Number";
    pub const EMAIL: &str = "Email";
    pub const PHONE: &str = "Phone";
    pub const ADDRESS: &str = "Address";
    pub const HOUSING: &str = "Housing";
    pub const VACCINATED: &str = "Vaccinated";
    pub const INSURANCE: &str = "Insurance";
    pub const MEDICAL_HISTORY: &str = "Medical History";
    pub const SYMPTOMS: &str = "Symptoms";
    pub const SALARY: &str = "Desired Salary";
    pub const USER_ID: &str = "User ID";
    pub const PASSWORD: &str = "Password";
}

/// Display options for the review panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewOptions {
    /// Symptom notes longer than this are truncated.
    pub symptom_preview_chars: usize,
    /// Trailing ID number digits left unmasked.
    pub id_visible_digits: usize,
}

impl Default for ReviewOptions {
    fn default() -> Self {
        Self {
            symptom_preview_chars: 200,
            id_visible_digits: 4,
        }
    }
}

/// Builds review models for one reference date.
#[derive(Debug, Clone)]
pub struct ReviewBuilder {
    ctx: ValidationContext,
    options: ReviewOptions,
}

impl ReviewBuilder {
    pub fn new(ctx: ValidationContext) -> Self {
        Self {
            ctx,
            options: ReviewOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ReviewOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ReviewOptions {
        &self.options
    }

    pub fn build(&self, snapshot: &FormSnapshot, result: &ValidationResult) -> ReviewModel {
        let status = StatusLookup { snapshot, result };
        let mut rows = Vec::new();

        // Identity
        rows.push(row(
            ReviewSection::Identity,
            labels::NAME,
            display_name(snapshot),
            status.combined(&[
                FieldName::FirstName,
                FieldName::MiddleInitial,
                FieldName::LastName,
            ]),
        ));
        rows.push(row(
            ReviewSection::Identity,
            labels::DATE_OF_BIRTH,
            display_date_of_birth(snapshot),
            status.recheck(
                FieldName::DateOfBirth,
                check_date_of_birth(&snapshot.date_of_birth, self.ctx.today()).map(|_| ()),
            ),
        ));
        rows.push(row(
            ReviewSection::Identity,
            labels::ID_NUMBER,
            or_none(&mask_leading(
                snapshot.id_number.trim(),
                self.options.id_visible_digits,
            )),
            status.single(FieldName::IdNumber),
        ));

        // Contact
        rows.push(row(
            ReviewSection::Contact,
            labels::EMAIL,
            or_none(snapshot.email.trim()),
            status.single(FieldName::Email),
        ));
        rows.push(row(
            ReviewSection::Contact,
            labels::PHONE,
            or_none(snapshot.phone.trim()),
            status.single(FieldName::Phone),
        ));

        // Address
        let mut address_status = status.combined(&[
            FieldName::Address1,
            FieldName::Address2,
            FieldName::City,
            FieldName::State,
        ]);
        address_status.merge(
            FieldName::Zip,
            status.recheck(FieldName::Zip, check_zip(&snapshot.zip).map(|_| ())),
        );
        rows.push(row(
            ReviewSection::Address,
            labels::ADDRESS,
            display_address(snapshot),
            address_status,
        ));

        // Requested info
        rows.push(row(
            ReviewSection::RequestedInfo,
            labels::HOUSING,
            or_none(snapshot.housing.as_deref().unwrap_or_default()),
            status.single(FieldName::Housing),
        ));
        rows.push(row(
            ReviewSection::RequestedInfo,
            labels::VACCINATED,
            or_none(snapshot.vaccination.as_deref().unwrap_or_default()),
            status.single(FieldName::Vaccination),
        ));
        rows.push(row(
            ReviewSection::RequestedInfo,
            labels::INSURANCE,
            or_none(snapshot.insurance.as_deref().unwrap_or_default()),
            status.single(FieldName::Insurance),
        ));
        rows.push(row(
            ReviewSection::RequestedInfo,
            labels::MEDICAL_HISTORY,
            or_none(&snapshot.medical_history.join(", ")),
            RowStatus::pass(),
        ));
        rows.push(row(
            ReviewSection::RequestedInfo,
            labels::SYMPTOMS,
            or_none(&escape_angle_brackets(&truncate(
                snapshot.symptoms.trim(),
                self.options.symptom_preview_chars,
            ))),
            RowStatus::pass(),
        ));
        rows.push(row(
            ReviewSection::RequestedInfo,
            labels::SALARY,
            snapshot
                .salary
                .map_or_else(|| NONE_PLACEHOLDER.to_string(), format_currency),
            RowStatus::pass(),
        ));

        // Account
        rows.push(row(
            ReviewSection::Account,
            labels::USER_ID,
            or_none(snapshot.user_id.trim()),
            status.single(FieldName::UserId),
        ));
        rows.push(row(
            ReviewSection::Account,
            labels::PASSWORD,
            or_none(&mask_all(&snapshot.password)),
            status.recheck(
                FieldName::Password,
                check_password_pair(&PasswordInput::from_snapshot(snapshot)),
            ),
        ));

        let model = ReviewModel::new(rows);
        debug!(
            rows = model.rows.len(),
            errors = model.error_count(),
            "review model built"
        );
        model
    }
}

/// Build a review model dated by `ctx` with default display options.
pub fn build_review(
    snapshot: &FormSnapshot,
    result: &ValidationResult,
    ctx: &ValidationContext,
) -> ReviewModel {
    ReviewBuilder::new(*ctx).build(snapshot, result)
}

/// Failing reasons accumulated for one row.
#[derive(Debug, Default)]
struct RowStatus {
    failures: Vec<(FieldName, String)>,
    fields: usize,
}

impl RowStatus {
    fn pass() -> Self {
        Self::default()
    }

    fn merge(&mut self, field: FieldName, other: RowStatus) {
        self.fields += 1;
        for (_, reason) in other.failures {
            self.failures.push((field, reason));
        }
    }

    fn status(&self) -> ReviewStatus {
        ReviewStatus::from_passed(self.failures.is_empty())
    }

    /// Reasons joined by "; ", prefixed with the field label when the row
    /// covers more than one field.
    fn reason(&self) -> Option<String> {
        if self.failures.is_empty() {
            return None;
        }
        let reasons: Vec<String> = self
            .failures
            .iter()
            .map(|(field, reason)| {
                if self.fields > 1 {
                    format!("{}: {reason}", field.label())
                } else {
                    reason.clone()
                }
            })
            .collect();
        Some(reasons.join("; "))
    }
}

struct StatusLookup<'a> {
    snapshot: &'a FormSnapshot,
    result: &'a ValidationResult,
}

impl StatusLookup<'_> {
    fn single(&self, field: FieldName) -> RowStatus {
        let mut status = RowStatus {
            failures: Vec::new(),
            fields: 1,
        };
        if let Some(reason) = self.result.reason_for(field) {
            status.failures.push((field, reason.to_string()));
        }
        status
    }

    fn combined(&self, fields: &[FieldName]) -> RowStatus {
        let mut status = RowStatus::default();
        for field in fields {
            status.merge(*field, self.single(*field));
        }
        status
    }

    /// Status from a fresh rule run. Unreadable controls stay "required",
    /// as in the aggregator.
    fn recheck(&self, field: FieldName, check: Result<(), String>) -> RowStatus {
        let check = if self.snapshot.is_missing(field) {
            Err(REQUIRED.to_string())
        } else {
            check
        };
        let mut status = RowStatus {
            failures: Vec::new(),
            fields: 1,
        };
        if let Err(reason) = check {
            status.failures.push((field, reason));
        }
        status
    }
}

fn row(section: ReviewSection, label: &str, display_value: String, status: RowStatus) -> ReviewRow {
    ReviewRow {
        section,
        label: label.to_string(),
        display_value,
        status: status.status(),
        reason: status.reason(),
    }
}

fn or_none(value: &str) -> String {
    if value.trim().is_empty() {
        NONE_PLACEHOLDER.to_string()
    } else {
        value.to_string()
    }
}

fn display_name(snapshot: &FormSnapshot) -> String {
    let middle = snapshot.middle_initial.trim();
    let middle = if middle.is_empty() {
        String::new()
    } else {
        format!("{middle}.")
    };
    let parts = [snapshot.first_name.trim(), middle.as_str(), snapshot.last_name.trim()];
    let name: Vec<&str> = parts.into_iter().filter(|part| !part.is_empty()).collect();
    or_none(&name.join(" "))
}

fn display_date_of_birth(snapshot: &FormSnapshot) -> String {
    let parts = &snapshot.date_of_birth;
    let (month, day, year) = (parts.month.trim(), parts.day.trim(), parts.year.trim());
    if month.is_empty() && day.is_empty() && year.is_empty() {
        return NONE_PLACEHOLDER.to_string();
    }
    format!("{month}/{day}/{year}")
}

fn display_address(snapshot: &FormSnapshot) -> String {
    let mut parts: Vec<String> = Vec::new();
    for line in [snapshot.address1.trim(), snapshot.address2.trim()] {
        if !line.is_empty() {
            parts.push(line.to_string());
        }
    }
    let city = snapshot.city.trim();
    let region = [snapshot.state.trim(), snapshot.zip.trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    match (city.is_empty(), region.is_empty()) {
        (false, false) => parts.push(format!("{city}, {region}")),
        (false, true) => parts.push(city.to_string()),
        (true, false) => parts.push(region),
        (true, true) => {}
    }
    or_none(&parts.join(", "))
}
