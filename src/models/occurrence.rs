//! Weekly occurrence model.
//!
//! An occurrence is one recurring weekly meeting of a section: a set of
//! weekdays, a clock-time window and the date range over which it repeats.
//!
//! # Overlap Model
//! Two occurrences conflict iff all of the following hold:
//! - Their date ranges intersect (both ends inclusive).
//! - They share at least one weekday.
//! - Their clock-time windows intersect as half-open intervals `[start, end)`,
//!   so back-to-back meetings do not conflict.
//!
//! An occurrence with an unknown start or end time is still part of its
//! section, but never conflicts and is left off the weekly grid.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

/// Day of the week, keyed by the catalog's two-letter codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WeekDay {
    #[serde(rename = "Su")]
    Sunday,
    #[serde(rename = "Mo")]
    Monday,
    #[serde(rename = "Tu")]
    Tuesday,
    #[serde(rename = "We")]
    Wednesday,
    #[serde(rename = "Th")]
    Thursday,
    #[serde(rename = "Fr")]
    Friday,
    #[serde(rename = "Sa")]
    Saturday,
}

impl WeekDay {
    /// All days, Sunday first.
    pub const ALL: [WeekDay; 7] = [
        WeekDay::Sunday,
        WeekDay::Monday,
        WeekDay::Tuesday,
        WeekDay::Wednesday,
        WeekDay::Thursday,
        WeekDay::Friday,
        WeekDay::Saturday,
    ];

    /// Two-letter catalog code.
    pub fn code(self) -> &'static str {
        match self {
            WeekDay::Sunday => "Su",
            WeekDay::Monday => "Mo",
            WeekDay::Tuesday => "Tu",
            WeekDay::Wednesday => "We",
            WeekDay::Thursday => "Th",
            WeekDay::Friday => "Fr",
            WeekDay::Saturday => "Sa",
        }
    }

    /// Column index in a Sunday-first week.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for WeekDay {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WeekDay::ALL
            .into_iter()
            .find(|d| d.code() == s)
            .ok_or_else(|| CatalogError::UnknownCode {
                kind: "weekday",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for WeekDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Campus where a meeting takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Campus {
    Burnaby,
    Surrey,
    Vancouver,
    Online,
}

impl Campus {
    /// Catalog spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Campus::Burnaby => "Burnaby",
            Campus::Surrey => "Surrey",
            Campus::Vancouver => "Vancouver",
            Campus::Online => "Online",
        }
    }
}

impl FromStr for Campus {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Campus::Burnaby, Campus::Surrey, Campus::Vancouver, Campus::Online]
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownCode {
                kind: "campus",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Campus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recurring weekly meeting bounded by a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    /// Campus, if known.
    pub campus: Option<Campus>,
    /// Days of the week the meeting repeats on.
    pub weekdays: BTreeSet<WeekDay>,
    /// Clock time the meeting starts (inclusive).
    pub start_time: Option<NaiveTime>,
    /// Clock time the meeting ends (exclusive).
    pub end_time: Option<NaiveTime>,
    /// First date of the range (inclusive).
    pub start_date: NaiveDate,
    /// Last date of the range (inclusive).
    pub end_date: NaiveDate,
    /// Whether this is an exam sitting rather than a regular meeting.
    pub is_exam: bool,
}

impl Occurrence {
    /// Creates an untimed occurrence with no weekdays over the given dates.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            campus: None,
            weekdays: BTreeSet::new(),
            start_time: None,
            end_time: None,
            start_date,
            end_date,
            is_exam: false,
        }
    }

    /// Adds a weekday.
    pub fn on(mut self, day: WeekDay) -> Self {
        self.weekdays.insert(day);
        self
    }

    /// Adds several weekdays.
    pub fn with_days(mut self, days: impl IntoIterator<Item = WeekDay>) -> Self {
        self.weekdays.extend(days);
        self
    }

    /// Sets the clock-time window.
    pub fn with_times(mut self, start: NaiveTime, end: NaiveTime) -> Self {
        self.start_time = Some(start);
        self.end_time = Some(end);
        self
    }

    /// Sets the campus.
    pub fn with_campus(mut self, campus: Campus) -> Self {
        self.campus = Some(campus);
        self
    }

    /// Marks this occurrence as an exam sitting.
    pub fn as_exam(mut self) -> Self {
        self.is_exam = true;
        self
    }

    /// Clock-time window, if both ends are known.
    #[inline]
    pub fn clock_window(&self) -> Option<(NaiveTime, NaiveTime)> {
        self.start_time.zip(self.end_time)
    }

    /// Whether both clock times are known.
    #[inline]
    pub fn is_timed(&self) -> bool {
        self.clock_window().is_some()
    }

    /// Whether the two occurrences meet at the same time on a shared day
    /// within a shared date range.
    pub fn overlaps(&self, other: &Self) -> bool {
        let (Some((a_start, a_end)), Some((b_start, b_end))) =
            (self.clock_window(), other.clock_window())
        else {
            return false;
        };

        self.dates_overlap(other)
            && self.shares_weekday(other)
            && a_start < b_end
            && b_start < a_end
    }

    fn dates_overlap(&self, other: &Self) -> bool {
        self.start_date <= other.end_date && other.start_date <= self.end_date
    }

    fn shares_weekday(&self, other: &Self) -> bool {
        self.weekdays.intersection(&other.weekdays).next().is_some()
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.campus {
            Some(campus) => write!(f, "{campus} ")?,
            None => f.write_str("TBA ")?,
        }
        let days: Vec<&str> = self.weekdays.iter().map(|d| d.code()).collect();
        f.write_str(&days.join(", "))?;
        match self.clock_window() {
            Some((start, end)) => write!(f, " {} - {}", start.format("%H:%M"), end.format("%H:%M")),
            None => f.write_str(" (time TBA)"),
        }
    }
}
