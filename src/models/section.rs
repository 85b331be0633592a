//! Section model.
//!
//! A section is one offering of a course component: a particular lecture,
//! lab, tutorial and so on, with its own meetings and instructors.
//!
//! # Associated Groups
//! Every section carries an associated group number. An enrollment section
//! (the one a student actually registers in, usually a lecture) claims its
//! group; satellite sections with the same group belong to it. A satellite
//! whose group no enrollment section claims is open to every enrollment
//! choice. See [`crate::enrollment`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use super::{Instructor, Occurrence};
use crate::error::CatalogError;

/// Number of section categories an enrollment option is split into.
pub const CATEGORY_COUNT: usize = 6;

/// Component kind of a section.
///
/// The declaration order is the category order used for combination
/// indexing: lectures are the most significant digit, online the least.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SectionType {
    #[serde(rename = "LEC")]
    Lecture,
    #[serde(rename = "LAB")]
    Lab,
    #[serde(rename = "TUT")]
    Tutorial,
    #[serde(rename = "SEM")]
    Seminar,
    #[serde(rename = "OPL")]
    OpenLab,
    #[serde(rename = "OLC")]
    Online,
}

impl SectionType {
    /// Categories in indexing order.
    pub const CATEGORIES: [SectionType; CATEGORY_COUNT] = [
        SectionType::Lecture,
        SectionType::Lab,
        SectionType::Tutorial,
        SectionType::Seminar,
        SectionType::OpenLab,
        SectionType::Online,
    ];

    /// Catalog section code.
    pub fn code(self) -> &'static str {
        match self {
            SectionType::Lecture => "LEC",
            SectionType::Lab => "LAB",
            SectionType::Tutorial => "TUT",
            SectionType::Seminar => "SEM",
            SectionType::OpenLab => "OPL",
            SectionType::Online => "OLC",
        }
    }

    /// Position in [`SectionType::CATEGORIES`].
    #[inline]
    pub fn category_index(self) -> usize {
        self as usize
    }
}

impl FromStr for SectionType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionType::CATEGORIES
            .into_iter()
            .find(|t| t.code() == s)
            .ok_or_else(|| CatalogError::UnknownCode {
                kind: "section type",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One offering of a course component.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    /// Section name, e.g. `D100`.
    pub name: String,
    /// Component kind.
    pub section_type: SectionType,
    /// Weekly meetings, in catalog order.
    pub occurrences: Vec<Occurrence>,
    /// Instructors, distinct by identity.
    pub instructors: Vec<Arc<Instructor>>,
    /// Whether students enroll through this section.
    pub is_enrollment: bool,
    /// Associated group number.
    pub associated_group: u32,
}

impl Section {
    /// Creates a non-enrollment section in group 0 with no meetings.
    pub fn new(name: impl Into<String>, section_type: SectionType) -> Self {
        Self {
            name: name.into(),
            section_type,
            occurrences: Vec::new(),
            instructors: Vec::new(),
            is_enrollment: false,
            associated_group: 0,
        }
    }

    /// Sets the associated group.
    pub fn with_group(mut self, group: u32) -> Self {
        self.associated_group = group;
        self
    }

    /// Marks this section as an enrollment section.
    pub fn enrollment(mut self) -> Self {
        self.is_enrollment = true;
        self
    }

    /// Adds a weekly meeting.
    pub fn with_occurrence(mut self, occurrence: Occurrence) -> Self {
        self.occurrences.push(occurrence);
        self
    }

    /// Adds an instructor unless the same identity is already listed.
    pub fn with_instructor(mut self, instructor: Arc<Instructor>) -> Self {
        if !self.instructors.iter().any(|i| Arc::ptr_eq(i, &instructor)) {
            self.instructors.push(instructor);
        }
        self
    }

    /// Meetings that can be placed on a weekly grid.
    pub fn timed_occurrences(&self) -> impl Iterator<Item = &Occurrence> {
        self.occurrences.iter().filter(|o| o.is_timed())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): ", self.name, self.section_type)?;
        let meetings: Vec<String> = self.occurrences.iter().map(|o| o.to_string()).collect();
        f.write_str(&meetings.join(", "))
    }
}
