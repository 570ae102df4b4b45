use chrono::{Local, NaiveDate};

/// Inputs to a validation run that do not come from the form itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationContext {
    today: NaiveDate,
}

impl ValidationContext {
    /// Context dated by the local clock.
    pub fn current() -> Self {
        Self {
            today: Local::now().date_naive(),
        }
    }

    /// Context pinned to a fixed reference date.
    pub fn with_today(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Pinned when `as_of` is given, otherwise dated by the local clock.
    pub fn from_as_of(as_of: Option<NaiveDate>) -> Self {
        as_of.map_or_else(Self::current, Self::with_today)
    }

    /// Reference date for date-of-birth bounds (time of day is ignored).
    pub fn today(&self) -> NaiveDate {
        self.today
    }
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self::current()
    }
}
