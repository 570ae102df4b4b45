//! Review panel generation.
//!
//! - **Review builder**: turns a snapshot and its validation result into the
//!   grouped, annotated [`ReviewModel`](intake_model::ReviewModel)
//! - **Formatting**: currency, truncation, escaping and masking helpers

pub mod format;
mod review;

pub use format::{
    NONE_PLACEHOLDER, escape_angle_brackets, format_currency, format_header_date, mask_all,
    mask_leading, truncate,
};
pub use review::{ReviewBuilder, ReviewOptions, build_review, labels};
