//! Course timetable planning.
//!
//! Students add courses; each course offers several ways of enrolling
//! (a lecture with a matching lab, a tutorial in the same group, ...).
//! This crate enumerates those ways as a dense index space per course,
//! detects time conflicts between the chosen sections, and steps all
//! courses together to the next conflict-free timetable.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Course`, `Section`, `Occurrence`, `Instructor`
//! - **`enrollment`**: Grouping sections into enrollment options
//! - **`combination`**: Mixed-radix combination indexing per course
//! - **`conflict`**: Occurrence overlap and pairwise course conflicts
//! - **`resolver`**: Odometer search for a conflict-free combination tuple
//! - **`catalog`**: Catalog records, record loading, provider boundary
//! - **`planner`**: Stateful course list with per-course indices
//! - **`config`**, **`error`**: Planner settings and error types
//!
//! # Example
//!
//! ```
//! use u_timetable::models::{Course, Section, SectionType};
//! use u_timetable::{select_combination, total_combinations};
//!
//! let course = Course::new(
//!     "CMPT 120",
//!     vec![
//!         Section::new("D100", SectionType::Lecture).with_group(1).enrollment(),
//!         Section::new("D101", SectionType::Lab).with_group(1),
//!         Section::new("D102", SectionType::Lab).with_group(1),
//!     ],
//! );
//! assert_eq!(total_combinations(&course), 2);
//!
//! let chosen = select_combination(&course, 1).unwrap();
//! assert_eq!(chosen.section("D102").map(|s| s.name.as_str()), Some("D102"));
//! ```

pub mod catalog;
pub mod combination;
pub mod config;
pub mod conflict;
pub mod enrollment;
pub mod error;
pub mod models;
pub mod planner;
pub mod resolver;

pub use combination::{select_combination, total_combinations};
pub use conflict::{courses_overlap, has_conflicts};
pub use error::{CatalogError, ConfigError, ScheduleError};
pub use planner::Planner;
pub use resolver::{advance_global_combination, Direction};
