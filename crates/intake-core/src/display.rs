//! Display boundary.

use std::collections::BTreeMap;

use intake_model::{FieldName, ReviewModel};

/// What the review area shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewPanel<'a> {
    /// Prompt shown before the first run and after a reset.
    Placeholder(&'a str),
    Model(&'a ReviewModel),
}

/// Receiver of everything the session renders.
pub trait DisplaySink {
    /// Show `message` next to `field`, or clear it when `None`.
    fn show_field_error(&mut self, field: FieldName, message: Option<&str>);

    fn render_review(&mut self, panel: ReviewPanel<'_>);

    /// Salary slider readout.
    fn show_salary(&mut self, _readout: &str) {}
}

/// Sink that keeps the latest rendered state in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySink {
    pub field_errors: BTreeMap<FieldName, String>,
    pub placeholder: Option<String>,
    pub review: Option<ReviewModel>,
    pub salary_readout: Option<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error_for(&self, field: FieldName) -> Option<&str> {
        self.field_errors.get(&field).map(String::as_str)
    }
}

impl DisplaySink for MemorySink {
    fn show_field_error(&mut self, field: FieldName, message: Option<&str>) {
        match message {
            Some(message) => {
                self.field_errors.insert(field, message.to_string());
            }
            None => {
                self.field_errors.remove(&field);
            }
        }
    }

    fn render_review(&mut self, panel: ReviewPanel<'_>) {
        match panel {
            ReviewPanel::Placeholder(text) => {
                self.placeholder = Some(text.to_string());
                self.review = None;
            }
            ReviewPanel::Model(model) => {
                self.placeholder = None;
                self.review = Some(model.clone());
            }
        }
    }

    fn show_salary(&mut self, readout: &str) {
        self.salary_readout = Some(readout.to_string());
    }
}
