//! Current-time providers.
//!
//! The footer's copyright year is read through a [`Clock`] so renders can be
//! pinned to a known date.

use chrono::{Datelike, Local, NaiveDate};

/// A source for the current calendar date.
pub trait Clock: Send + Sync + 'static {
    /// Today's date.
    fn today(&self) -> NaiveDate;

    /// The current four-digit calendar year.
    fn year(&self) -> i32 {
        self.today().year()
    }
}

/// Reads the host's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    /// Create a clock fixed at `date`.
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Create a clock fixed at the given year, month and day.
    ///
    /// Returns `None` if the date does not exist.
    pub fn ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
