//! ZIP rule.
//!
//! Accepts any text that starts with five digits and normalizes the field to
//! that five-digit prefix, dropping a "+4" suffix or trailing characters.

use std::sync::LazyLock;

use regex::Regex;

use intake_ingest::FormSnapshot;
use intake_model::{FieldName, ValidationOutcome};

use crate::rules::REQUIRED;

pub const INVALID_ZIP: &str = "invalid: must start with 5 digits";

static ZIP_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{5})").expect("Invalid ZIP regex"));

/// Five-digit prefix of the trimmed input, if it has one.
pub fn canonical_zip(raw: &str) -> Option<&str> {
    ZIP_PREFIX
        .captures(raw.trim())
        .and_then(|captures| captures.get(1))
        .map(|prefix| prefix.as_str())
}

/// Check without normalizing; returns the canonical value on success.
pub fn check_zip(raw: &str) -> Result<String, String> {
    if raw.trim().is_empty() {
        return Err(REQUIRED.to_string());
    }
    canonical_zip(raw)
        .map(str::to_string)
        .ok_or_else(|| INVALID_ZIP.to_string())
}

/// Check and, on success, store the canonical value back in the snapshot.
/// A failing input is left as entered.
pub fn validate_zip(snapshot: &mut FormSnapshot) -> ValidationOutcome {
    match check_zip(&snapshot.zip) {
        Ok(canonical) => {
            snapshot.set_zip(&canonical);
            ValidationOutcome::pass(FieldName::Zip)
        }
        Err(reason) => ValidationOutcome::fail(FieldName::Zip, reason),
    }
}
