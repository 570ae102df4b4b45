//! JSON-backed in-memory form.
//!
//! A document mirrors the four kinds of controls on the page:
//!
//! ```json
//! {
//!   "text":    { "firstName": "Ada", "zip": "12345-6789" },
//!   "choice":  { "housing": "rent", "ins": null },
//!   "checked": { "history": ["asthma"] },
//!   "numbers": { "salary": 75000 }
//! }
//! ```
//!
//! A `null` choice is a present group with nothing selected; a key that is
//! absent altogether is a missing control.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{FormSource, IngestError, Result, SourceError};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormDocument {
    pub text: BTreeMap<String, String>,
    pub choice: BTreeMap<String, Option<String>>,
    pub checked: BTreeMap<String, Vec<String>>,
    pub numbers: BTreeMap<String, f64>,
}

impl FormDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| IngestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let document = Self::from_json_str(&contents)?;
        debug!(
            path = %path.display(),
            text_controls = document.text.len(),
            choice_groups = document.choice.len(),
            "loaded form document"
        );
        Ok(document)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json_string()?;
        fs::write(path, format!("{json}\n")).map_err(|source| IngestError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn with_text(mut self, name: &str, value: &str) -> Self {
        self.text.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_choice(mut self, group: &str, value: Option<&str>) -> Self {
        self.choice
            .insert(group.to_string(), value.map(str::to_string));
        self
    }

    pub fn with_checked(mut self, group: &str, values: &[&str]) -> Self {
        self.checked.insert(
            group.to_string(),
            values.iter().map(|value| (*value).to_string()).collect(),
        );
        self
    }

    pub fn with_number(mut self, name: &str, value: f64) -> Self {
        self.numbers.insert(name.to_string(), value);
        self
    }

    /// Drop a control entirely, as if it were not on the page.
    pub fn without(mut self, name: &str) -> Self {
        self.text.remove(name);
        self.choice.remove(name);
        self.checked.remove(name);
        self.numbers.remove(name);
        self
    }
}

impl FormSource for FormDocument {
    fn text(&self, name: &str) -> std::result::Result<String, SourceError> {
        self.text
            .get(name)
            .cloned()
            .ok_or_else(|| SourceError::MissingControl(name.to_string()))
    }

    fn selected(&self, group: &str) -> std::result::Result<Option<String>, SourceError> {
        let selected = self
            .choice
            .get(group)
            .ok_or_else(|| SourceError::MissingControl(group.to_string()))?;
        Ok(selected.clone().filter(|value| !value.is_empty()))
    }

    fn checked(&self, group: &str) -> std::result::Result<Vec<String>, SourceError> {
        self.checked
            .get(group)
            .cloned()
            .ok_or_else(|| SourceError::MissingControl(group.to_string()))
    }

    fn number(&self, name: &str) -> std::result::Result<f64, SourceError> {
        self.numbers
            .get(name)
            .copied()
            .ok_or_else(|| SourceError::MissingControl(name.to_string()))
    }

    fn write_text(&mut self, name: &str, value: &str) -> std::result::Result<(), SourceError> {
        match self.text.get_mut(name) {
            Some(slot) => {
                *slot = value.to_string();
                Ok(())
            }
            None if self.choice.contains_key(name)
                || self.checked.contains_key(name)
                || self.numbers.contains_key(name) =>
            {
                Err(SourceError::NotText(name.to_string()))
            }
            None => Err(SourceError::MissingControl(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_choice_is_present_but_unselected() {
        let document =
            FormDocument::from_json_str(r#"{"choice": {"ins": null, "vax": ""}}"#).unwrap();
        assert_eq!(document.selected("ins"), Ok(None));
        assert_eq!(document.selected("vax"), Ok(None));
        assert_eq!(
            document.selected("housing"),
            Err(SourceError::MissingControl("housing".to_string()))
        );
    }

    #[test]
    fn write_back_only_touches_text_controls() {
        let mut document = FormDocument::new()
            .with_text("zip", "12345-6789")
            .with_number("salary", 50000.0);
        document.write_text("zip", "12345").unwrap();
        assert_eq!(document.text("zip").unwrap(), "12345");
        assert_eq!(
            document.write_text("salary", "1"),
            Err(SourceError::NotText("salary".to_string()))
        );
        assert_eq!(
            document.write_text("city", "Springfield"),
            Err(SourceError::MissingControl("city".to_string()))
        );
    }

    #[test]
    fn rejects_malformed_json() {
        let error = FormDocument::from_json_str(r#"{"text": ["not", "a", "map"]}"#).unwrap_err();
        assert!(matches!(error, IngestError::Json(_)));
    }
}
