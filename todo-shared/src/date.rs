//! Due dates and the clock they are initialized from.

use std::fmt;

use chrono::{Datelike, Local};
pub use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Source of the current calendar day.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// A due date as edited in the new-todo form.
///
/// The parts are free integers: nothing here checks that they form a real
/// calendar day. `month` is one-based (January is 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DueDate {
    pub year: i32,
    pub month: i32,
    pub date: i32,
}

impl DueDate {
    pub const fn new(year: i32, month: i32, date: i32) -> Self {
        Self { year, month, date }
    }

    /// Build a due date from a calendar value.
    ///
    /// Calendar months are read zero-based and shifted once here, so every
    /// `DueDate` carries the one-based month.
    pub fn from_calendar(day: &impl Datelike) -> Self {
        Self {
            year: day.year(),
            month: day.month0() as i32 + 1,
            date: day.day() as i32,
        }
    }

    /// Today, according to `clock`.
    pub fn today(clock: &(impl Clock + ?Sized)) -> Self {
        Self::from_calendar(&clock.today())
    }

    /// The matching calendar day, if the parts name one.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        let month = u32::try_from(self.month).ok()?;
        let date = u32::try_from(self.date).ok()?;
        NaiveDate::from_ymd_opt(self.year, month, date)
    }
}

impl From<NaiveDate> for DueDate {
    fn from(day: NaiveDate) -> Self {
        Self::from_calendar(&day)
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year, self.month, self.date)
    }
}
