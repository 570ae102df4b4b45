//! One session event against a form document on disk.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use intake_core::{
    FormEvent, FormSession, FormState, MemorySink, SessionOptions, SubmitDecision,
};
use intake_ingest::FormDocument;
use intake_model::{FieldName, ReviewModel};

/// What one review or submit run produced.
#[derive(Debug, Clone, Serialize)]
pub struct FormReport {
    pub header_date: String,
    #[serde(flatten)]
    pub state: FormState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision: Option<SubmitDecision>,
    /// Error text shown next to each failing field.
    pub field_errors: BTreeMap<FieldName, String>,
    pub review: ReviewModel,
    /// Document as left by the run, including ZIP normalization.
    #[serde(skip)]
    pub document: FormDocument,
}

impl FormReport {
    pub fn passed(&self) -> bool {
        matches!(
            self.state,
            FormState::Reviewed {
                overall_passed: true
            }
        )
    }
}

/// Load `path` and handle `event` in a fresh session.
pub fn run_form(path: &Path, event: FormEvent, options: &SessionOptions) -> Result<FormReport> {
    let span = info_span!("form", path = %path.display());
    let _guard = span.enter();

    let mut document = FormDocument::from_path(path)
        .with_context(|| format!("load form document {}", path.display()))?;
    let mut session = FormSession::from_options(options);
    let mut sink = MemorySink::new();
    let outcome = session.handle(event, &mut document, &mut sink);

    let review = outcome
        .review
        .or(sink.review)
        .context("session produced no review for a validation event")?;
    info!(
        errors = sink.field_errors.len(),
        decision = ?outcome.decision,
        "form checked"
    );

    Ok(FormReport {
        header_date: session.header_date(),
        state: outcome.state,
        decision: outcome.decision,
        field_errors: sink.field_errors,
        review,
        document,
    })
}
