//! Timetable domain models.
//!
//! Catalog data as the planner sees it once loaded: courses made of sections,
//! sections made of weekly occurrences, and interned instructors.
//!
//! # Domain Mappings
//!
//! | u-timetable | Catalog term |
//! |-------------|--------------|
//! | Course | Course offering (`CMPT 120`) |
//! | Section | Class section (`D100`, `D101`) |
//! | Occurrence | Course schedule entry |
//! | Instructor | Instructor listing |

mod course;
mod instructor;
mod occurrence;
mod section;

pub use course::Course;
pub use instructor::{Instructor, InstructorRegistry};
pub use occurrence::{Campus, Occurrence, WeekDay};
pub use section::{Section, SectionType, CATEGORY_COUNT};
