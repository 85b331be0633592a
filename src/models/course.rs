//! Course model.
//!
//! A course is a named list of sections together with the enrollment options
//! derived from them. The options are recomputed every time the section list
//! changes, so a `Course` never carries stale options.

use serde::Serialize;
use std::fmt;

use super::Section;
use crate::combination;
use crate::enrollment::{group_enrollment_options, EnrollmentOption};
use crate::error::ScheduleError;

/// A course and its sections.
#[derive(Debug, Clone, Serialize)]
pub struct Course {
    name: String,
    sections: Vec<Section>,
    #[serde(skip)]
    enrollment_options: Vec<EnrollmentOption>,
}

impl Course {
    /// Creates a course and groups its sections into enrollment options.
    pub fn new(name: impl Into<String>, sections: Vec<Section>) -> Self {
        let enrollment_options = group_enrollment_options(&sections);
        Self {
            name: name.into(),
            sections,
            enrollment_options,
        }
    }

    /// Adds a section and regroups.
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self.enrollment_options = group_enrollment_options(&self.sections);
        self
    }

    /// Course name, e.g. `CMPT 120`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sections in catalog order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Enrollment options derived from the sections.
    pub fn enrollment_options(&self) -> &[EnrollmentOption] {
        &self.enrollment_options
    }

    /// Finds a section by name.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Whether the course has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Number of section combinations this course offers.
    pub fn total_combinations(&self) -> usize {
        combination::total_combinations(self)
    }

    /// The course restricted to the section selection at `index`.
    pub fn combination(&self, index: usize) -> Result<Course, ScheduleError> {
        combination::select_combination(self, index)
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sections: Vec<String> = self.sections.iter().map(|s| s.to_string()).collect();
        write!(f, "{}: {}", self.name, sections.join(", "))
    }
}
