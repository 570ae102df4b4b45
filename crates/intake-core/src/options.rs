//! Session configuration.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use intake_report::ReviewOptions;
use intake_validate::ValidationContext;

/// Settings a session is opened with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionOptions {
    /// Reference date override; the local clock when unset.
    pub as_of: Option<NaiveDate>,
    pub review: ReviewOptions,
}

impl SessionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_as_of(mut self, as_of: Option<NaiveDate>) -> Self {
        self.as_of = as_of;
        self
    }

    pub fn with_symptom_preview_chars(mut self, chars: usize) -> Self {
        self.review.symptom_preview_chars = chars;
        self
    }

    pub fn with_review(mut self, review: ReviewOptions) -> Self {
        self.review = review;
        self
    }

    pub fn context(&self) -> ValidationContext {
        ValidationContext::from_as_of(self.as_of)
    }
}
