//! Form session state machine.
//!
//! States: `Untouched` until the first review or submit, `Reviewed` after
//! any run (passing or failing), back to `Untouched` on reset. Every event
//! is handled synchronously to completion.

use serde::Serialize;
use tracing::{info, info_span};

use intake_ingest::{FormSource, controls};
use intake_model::{ReviewModel, ValidationResult};
use intake_report::{
    NONE_PLACEHOLDER, ReviewBuilder, ReviewOptions, format_currency, format_header_date,
};
use intake_validate::{RuleId, ValidationContext, run_validation};

use crate::display::{DisplaySink, ReviewPanel};
use crate::options::SessionOptions;

/// Review area text before the first run.
pub const PLACEHOLDER_PROMPT: &str = "Click Review to check your entries.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormEvent {
    ReviewRequested,
    SubmitAttempted,
    ResetRequested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum FormState {
    Untouched,
    Reviewed { overall_passed: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitDecision {
    /// Latest run passed; hand the form to its target.
    Proceed,
    /// Latest run failed; entered data is kept.
    Blocked,
}

/// Everything one event produced.
#[derive(Debug, Clone)]
pub struct EventOutcome {
    pub state: FormState,
    /// Set for submit attempts only.
    pub decision: Option<SubmitDecision>,
    pub result: Option<ValidationResult>,
    pub review: Option<ReviewModel>,
}

#[derive(Debug, Clone)]
pub struct FormSession {
    ctx: ValidationContext,
    builder: ReviewBuilder,
    state: FormState,
}

impl FormSession {
    pub fn new(ctx: ValidationContext) -> Self {
        Self {
            ctx,
            builder: ReviewBuilder::new(ctx),
            state: FormState::Untouched,
        }
    }

    pub fn from_options(options: &SessionOptions) -> Self {
        Self::new(options.context()).with_review_options(options.review)
    }

    pub fn with_review_options(mut self, options: ReviewOptions) -> Self {
        self.builder = ReviewBuilder::new(self.ctx).with_options(options);
        self
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn context(&self) -> &ValidationContext {
        &self.ctx
    }

    /// Page header date, e.g. "Friday, October 16, 2026".
    pub fn header_date(&self) -> String {
        format_header_date(self.ctx.today())
    }

    pub fn handle<S, D>(&mut self, event: FormEvent, source: &mut S, sink: &mut D) -> EventOutcome
    where
        S: FormSource + ?Sized,
        D: DisplaySink + ?Sized,
    {
        let span = info_span!("form_event", event = ?event);
        let _guard = span.enter();
        let previous = self.state;

        let outcome = match event {
            FormEvent::ReviewRequested => self.review(source, sink),
            FormEvent::SubmitAttempted => self.submit(source, sink),
            FormEvent::ResetRequested => self.reset(source, sink),
        };

        self.state = outcome.state;
        info!(from = ?previous, to = ?self.state, decision = ?outcome.decision, "form state");
        outcome
    }

    fn review<S, D>(&self, source: &mut S, sink: &mut D) -> EventOutcome
    where
        S: FormSource + ?Sized,
        D: DisplaySink + ?Sized,
    {
        let (result, review) = self.validate_and_render(source, sink);
        EventOutcome {
            state: FormState::Reviewed {
                overall_passed: result.overall_passed,
            },
            decision: None,
            result: Some(result),
            review: Some(review),
        }
    }

    fn submit<S, D>(&self, source: &mut S, sink: &mut D) -> EventOutcome
    where
        S: FormSource + ?Sized,
        D: DisplaySink + ?Sized,
    {
        let (result, review) = self.validate_and_render(source, sink);
        let decision = if result.overall_passed {
            SubmitDecision::Proceed
        } else {
            SubmitDecision::Blocked
        };
        EventOutcome {
            state: FormState::Reviewed {
                overall_passed: result.overall_passed,
            },
            decision: Some(decision),
            result: Some(result),
            review: Some(review),
        }
    }

    fn reset<S, D>(&self, source: &mut S, sink: &mut D) -> EventOutcome
    where
        S: FormSource + ?Sized,
        D: DisplaySink + ?Sized,
    {
        for rule in RuleId::ALL {
            sink.show_field_error(rule.field(), None);
        }
        sink.render_review(ReviewPanel::Placeholder(PLACEHOLDER_PROMPT));
        sink.show_salary(&salary_readout(&*source));
        EventOutcome {
            state: FormState::Untouched,
            decision: None,
            result: None,
            review: None,
        }
    }

    /// One full aggregator run plus a fresh review build.
    fn validate_and_render<S, D>(
        &self,
        source: &mut S,
        sink: &mut D,
    ) -> (ValidationResult, ReviewModel)
    where
        S: FormSource + ?Sized,
        D: DisplaySink + ?Sized,
    {
        let run = run_validation(source, &self.ctx);
        for outcome in &run.result.outcomes {
            sink.show_field_error(outcome.field, outcome.reason.as_deref());
        }
        let review = self.builder.build(&run.snapshot, &run.result);
        sink.render_review(ReviewPanel::Model(&review));
        sink.show_salary(&salary_readout(&*source));
        (run.result, review)
    }
}

/// Current slider position as currency.
fn salary_readout<S: FormSource + ?Sized>(source: &S) -> String {
    source
        .number(controls::SALARY)
        .map_or_else(|_| NONE_PLACEHOLDER.to_string(), format_currency)
}
