//! Catalog boundary.
//!
//! The planner consumes courses through [`CatalogProvider`]; how a provider
//! obtains them (remote fetch, retries, caching) is its own business. This
//! module supplies the catalog record shapes, the record-to-model
//! [`CourseLoader`] and an in-process [`MemoryCatalog`].

mod loader;
mod memory;
pub mod records;

pub use loader::{build_occurrence, CourseLoader};
pub use memory::MemoryCatalog;
pub use records::{CourseRecord, InstructorRecord, ScheduleRecord, SectionRecord};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CatalogError;
use crate::models::Course;

/// Academic term, e.g. `2025 spring`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Term {
    pub year: String,
    pub term: String,
}

impl Term {
    /// Creates a term identifier.
    pub fn new(year: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            term: term.into(),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.year, self.term)
    }
}

/// Source of fully resolved courses.
pub trait CatalogProvider {
    /// Loads one course with its sections, meetings and instructors.
    ///
    /// Fails with [`CatalogError::NotFound`] when the term has no such
    /// course, or [`CatalogError::Network`] for transport failures.
    fn load_course(&self, term: &Term, department: &str, number: &str)
        -> Result<Course, CatalogError>;
}
