//! Planner state.
//!
//! The planner owns the courses a student has added, in load order, and the
//! combination index currently chosen for each. Everything else (grouping,
//! indexing, conflict checks, the odometer search) is delegated to the pure
//! functions in the rest of the crate.
//!
//! # Index Policy
//! [`Planner::set_combination`] clamps out-of-range requests into
//! `[0, total - 1]`. Clamping happens here only; the core functions reject
//! out-of-range indices.

use tracing::{debug, info};

use crate::catalog::CatalogProvider;
use crate::config::PlannerConfig;
use crate::conflict::{find_conflicts, has_conflicts, Conflict};
use crate::error::ScheduleError;
use crate::models::Course;
use crate::resolver::{AdvanceOutcome, Direction, GlobalCycleResolver};

/// Course selection state backed by a catalog provider.
#[derive(Debug)]
pub struct Planner<P> {
    config: PlannerConfig,
    provider: P,
    courses: Vec<Course>,
    indices: Vec<usize>,
}

impl<P> Planner<P> {
    /// Creates an empty planner with the default configuration.
    pub fn new(provider: P) -> Self {
        Self {
            config: PlannerConfig::default(),
            provider,
            courses: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Loaded courses in load order.
    pub fn loaded_courses(&self) -> &[Course] {
        &self.courses
    }

    /// Current combination index per loaded course.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Current combination index of one course.
    pub fn combination_index(&self, name: &str) -> Option<usize> {
        self.position(name).map(|i| self.indices[i])
    }

    /// Adds an already-resolved course at combination 0.
    pub fn add_loaded_course(&mut self, course: Course) -> Result<&Course, ScheduleError> {
        if self.position(course.name()).is_some() {
            return Err(ScheduleError::DuplicateCourse(course.name().to_string()));
        }
        info!(
            course = course.name(),
            combinations = course.total_combinations(),
            "added course"
        );
        self.courses.push(course);
        self.indices.push(0);
        Ok(&self.courses[self.courses.len() - 1])
    }

    /// Removes a course and its index.
    pub fn remove_course(&mut self, name: &str) -> Result<Course, ScheduleError> {
        let position = self
            .position(name)
            .ok_or_else(|| ScheduleError::UnknownCourse(name.to_string()))?;
        self.indices.remove(position);
        info!(course = name, "removed course");
        Ok(self.courses.remove(position))
    }

    /// Chooses a combination for one course, clamping into range.
    ///
    /// Returns the index actually stored.
    pub fn set_combination(&mut self, name: &str, value: i64) -> Result<usize, ScheduleError> {
        let position = self
            .position(name)
            .ok_or_else(|| ScheduleError::UnknownCourse(name.to_string()))?;
        let last = self.courses[position].total_combinations().saturating_sub(1);
        let index = usize::try_from(value.max(0)).map_or(last, |v| v.min(last));
        if index as i64 != value {
            debug!(course = name, requested = value, stored = index, "clamped combination index");
        }
        self.indices[position] = index;
        Ok(index)
    }

    /// Each course projected onto its current combination.
    pub fn selected_courses(&self) -> Result<Vec<Course>, ScheduleError> {
        GlobalCycleResolver::new(&self.courses).selection(&self.indices)
    }

    /// Whether the current selection contains a time conflict.
    pub fn has_conflicts(&self) -> Result<bool, ScheduleError> {
        Ok(has_conflicts(&self.selected_courses()?))
    }

    /// Conflicting course pairs in the current selection.
    pub fn conflicts(&self) -> Result<Vec<Conflict>, ScheduleError> {
        Ok(find_conflicts(&self.selected_courses()?))
    }

    /// Steps every index to the next conflict-free combination and commits
    /// the result, resolved or not.
    pub fn advance(&mut self, direction: Direction) -> Result<AdvanceOutcome, ScheduleError> {
        let outcome = GlobalCycleResolver::new(&self.courses).advance(&self.indices, direction)?;
        self.indices.clone_from(&outcome.indices);
        Ok(outcome)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.courses.iter().position(|c| c.name() == name)
    }
}

impl<P: CatalogProvider> Planner<P> {
    /// Loads `<DEPARTMENT> <NUMBER>` from the configured term and adds it.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidCourseName`] for a malformed name,
    /// [`ScheduleError::DuplicateCourse`] if already added, or
    /// [`ScheduleError::Catalog`] if the provider fails.
    pub fn add_course(&mut self, course_name: &str) -> Result<&Course, ScheduleError> {
        let mut parts = course_name.split_whitespace();
        let (Some(department), Some(number), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(ScheduleError::InvalidCourseName(course_name.to_string()));
        };

        let name = format!("{department} {number}");
        if self.position(&name).is_some() {
            return Err(ScheduleError::DuplicateCourse(name));
        }

        let course = self
            .provider
            .load_course(&self.config.term(), department, number)?;
        self.add_loaded_course(course)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MemoryCatalog, Term};
    use crate::error::CatalogError;
    use crate::models::{Section, SectionType};

    fn catalog() -> MemoryCatalog {
        let mut catalog = MemoryCatalog::new();
        catalog
            .extend_from_json(
                &Term::new("2025", "spring"),
                r#"[{ "department": "CMPT", "number": "120", "sections": [
                        { "text": "D100", "classType": "e", "associatedClass": "1", "sectionCode": "LEC" },
                        { "text": "D101", "associatedClass": "1", "sectionCode": "LAB" },
                        { "text": "D102", "associatedClass": "1", "sectionCode": "LAB" }
                    ] }]"#,
            )
            .unwrap();
        catalog
    }

    #[test]
    fn test_add_course_from_catalog() {
        let mut planner = Planner::new(catalog());
        let course = planner.add_course("CMPT  120").unwrap();
        assert_eq!(course.name(), "CMPT 120");
        assert_eq!(planner.combination_index("CMPT 120"), Some(0));
        assert_eq!(planner.selected_courses().unwrap()[0].sections().len(), 2);
    }

    #[test]
    fn test_add_course_errors() {
        let mut planner = Planner::new(catalog());
        assert!(matches!(
            planner.add_course("CMPT120"),
            Err(ScheduleError::InvalidCourseName(_))
        ));
        assert!(matches!(
            planner.add_course("CMPT 999"),
            Err(ScheduleError::Catalog(CatalogError::NotFound { .. }))
        ));

        planner.add_course("CMPT 120").unwrap();
        assert!(matches!(
            planner.add_course("CMPT 120"),
            Err(ScheduleError::DuplicateCourse(name)) if name == "CMPT 120"
        ));
    }

    #[test]
    fn test_configured_term_is_used() {
        let mut planner = Planner::new(catalog()).with_config(PlannerConfig::new().with_term("fall"));
        assert!(matches!(
            planner.add_course("CMPT 120"),
            Err(ScheduleError::Catalog(CatalogError::NotFound { .. }))
        ));
    }

    #[test]
    fn test_set_combination_clamps() {
        let mut planner = Planner::new(catalog());
        planner.add_course("CMPT 120").unwrap();

        assert_eq!(planner.set_combination("CMPT 120", 1).unwrap(), 1);
        assert_eq!(planner.set_combination("CMPT 120", 9).unwrap(), 1);
        assert_eq!(planner.set_combination("CMPT 120", -4).unwrap(), 0);
        assert!(matches!(
            planner.set_combination("MATH 151", 0),
            Err(ScheduleError::UnknownCourse(_))
        ));
    }

    #[test]
    fn test_remove_course_drops_index() {
        let mut planner = Planner::new(MemoryCatalog::new());
        planner
            .add_loaded_course(Course::new("A 1", vec![Section::new("D1", SectionType::Lecture)]))
            .unwrap();
        planner
            .add_loaded_course(Course::new(
                "B 2",
                vec![
                    Section::new("D1", SectionType::Lecture),
                    Section::new("D2", SectionType::Lecture),
                ],
            ))
            .unwrap();
        planner.set_combination("B 2", 1).unwrap();

        let removed = planner.remove_course("A 1").unwrap();
        assert_eq!(removed.name(), "A 1");
        assert_eq!(planner.indices(), &[1]);
        assert!(planner.remove_course("A 1").is_err());
    }

    #[test]
    fn test_empty_course_set_combination() {
        let mut planner = Planner::new(MemoryCatalog::new());
        planner.add_loaded_course(Course::new("TBA 100", Vec::new())).unwrap();
        assert_eq!(planner.set_combination("TBA 100", 3).unwrap(), 0);
        assert!(!planner.has_conflicts().unwrap());
    }
}
