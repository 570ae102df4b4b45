//! Review panel model: the grouped read-back of entered data.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Review panel sections, in display order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ReviewSection {
    Identity,
    Contact,
    Address,
    RequestedInfo,
    Account,
}

impl ReviewSection {
    pub const ORDER: [ReviewSection; 5] = [
        ReviewSection::Identity,
        ReviewSection::Contact,
        ReviewSection::Address,
        ReviewSection::RequestedInfo,
        ReviewSection::Account,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Contact => "contact",
            Self::Address => "address",
            Self::RequestedInfo => "requested_info",
            Self::Account => "account",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Identity => "Identity",
            Self::Contact => "Contact",
            Self::Address => "Address",
            Self::RequestedInfo => "Requested Info",
            Self::Account => "Account",
        }
    }
}

impl fmt::Display for ReviewSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for ReviewSection {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace([' ', '-'], "_");
        ReviewSection::ORDER
            .into_iter()
            .find(|section| section.as_str() == key)
            .ok_or_else(|| ModelError::UnknownSection(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Pass,
    Error,
}

impl ReviewStatus {
    pub fn from_passed(passed: bool) -> Self {
        if passed { Self::Pass } else { Self::Error }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Error => "error",
        }
    }
}

/// One line of the review panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRow {
    pub section: ReviewSection,
    pub label: String,
    pub display_value: String,
    pub status: ReviewStatus,
    /// Failure reason(s) when `status` is `Error`.
    pub reason: Option<String>,
}

impl ReviewRow {
    pub fn is_error(&self) -> bool {
        self.status == ReviewStatus::Error
    }
}

/// Ordered review rows, grouped by section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReviewModel {
    pub rows: Vec<ReviewRow>,
}

impl ReviewModel {
    /// Rows are stably reordered into section order.
    pub fn new(mut rows: Vec<ReviewRow>) -> Self {
        rows.sort_by_key(|row| row.section);
        Self { rows }
    }

    pub fn rows_in(&self, section: ReviewSection) -> impl Iterator<Item = &ReviewRow> {
        self.rows.iter().filter(move |row| row.section == section)
    }

    pub fn row(&self, label: &str) -> Option<&ReviewRow> {
        self.rows.iter().find(|row| row.label == label)
    }

    pub fn error_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_error()).count()
    }

    pub fn all_pass(&self) -> bool {
        self.error_count() == 0
    }
}
