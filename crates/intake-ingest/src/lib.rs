//! Form data sources and the field extractor.
//!
//! The extractor is a pure lookup over a [`FormSource`]: it reads the fixed
//! set of intake controls into a [`FormSnapshot`] and performs no validation.

pub mod document;
pub mod error;
pub mod extract;
pub mod redact;
pub mod source;

pub use document::FormDocument;
pub use error::{IngestError, Result, SourceError};
pub use extract::{DateParts, FormSnapshot, controls, extract};
pub use redact::{REDACTED_VALUE, log_data_enabled, redact_value, set_log_data};
pub use source::FormSource;
