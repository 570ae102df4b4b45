//! Form session: the three-event trigger surface over the rule engine.
//!
//! A [`FormSession`] reacts to review, submit and reset requests by running
//! the aggregator and the review builder against a [`FormSource`] and
//! reporting results to a [`DisplaySink`].
//!
//! [`FormSource`]: intake_ingest::FormSource

pub mod display;
pub mod options;
pub mod session;

pub use display::{DisplaySink, MemorySink, ReviewPanel};
pub use options::SessionOptions;
pub use session::{
    EventOutcome, FormEvent, FormSession, FormState, PLACEHOLDER_PROMPT, SubmitDecision,
};
