use crate::SourceError;

/// Read access to the live form, plus the single text write-back used for
/// ZIP normalization.
///
/// Implementations report absent controls as [`SourceError::MissingControl`];
/// the extractor turns those into failing "required" outcomes rather than
/// propagating them.
pub trait FormSource {
    /// Current value of a text input.
    fn text(&self, name: &str) -> Result<String, SourceError>;

    /// Selected option of an exclusive choice group.
    fn selected(&self, group: &str) -> Result<Option<String>, SourceError>;

    /// Checked options of a multi-choice group, in form order.
    fn checked(&self, group: &str) -> Result<Vec<String>, SourceError>;

    /// Current position of a numeric control.
    fn number(&self, name: &str) -> Result<f64, SourceError>;

    /// Overwrite a text input.
    fn write_text(&mut self, name: &str, value: &str) -> Result<(), SourceError>;
}

impl<T: FormSource + ?Sized> FormSource for &mut T {
    fn text(&self, name: &str) -> Result<String, SourceError> {
        (**self).text(name)
    }

    fn selected(&self, group: &str) -> Result<Option<String>, SourceError> {
        (**self).selected(group)
    }

    fn checked(&self, group: &str) -> Result<Vec<String>, SourceError> {
        (**self).checked(group)
    }

    fn number(&self, name: &str) -> Result<f64, SourceError> {
        (**self).number(name)
    }

    fn write_text(&mut self, name: &str, value: &str) -> Result<(), SourceError> {
        (**self).write_text(name, value)
    }
}
