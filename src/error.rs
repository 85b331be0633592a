//! Error types for timetable planning and catalog loading.

/// Errors raised by combination selection, the global resolver and the planner.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// A combination index outside `[0, total)` was requested.
    #[error("combination index {index} out of range for course '{course}' ({total} combinations)")]
    IndexOutOfRange {
        /// Course the index was applied to.
        course: String,
        /// The rejected index.
        index: usize,
        /// Number of valid combinations.
        total: usize,
    },

    /// The index tuple does not line up with the course list.
    #[error("expected {expected} combination indices, got {actual}")]
    IndicesMismatch {
        /// Number of courses.
        expected: usize,
        /// Number of indices supplied.
        actual: usize,
    },

    /// A course with the same name is already loaded.
    #[error("course '{0}' is already added")]
    DuplicateCourse(String),

    /// No loaded course carries this name.
    #[error("course '{0}' is not loaded")]
    UnknownCourse(String),

    /// The course name is not of the form `<DEPARTMENT> <NUMBER>`.
    #[error("invalid course name '{0}', expected '<DEPARTMENT> <NUMBER>'")]
    InvalidCourseName(String),

    /// The catalog provider failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Errors raised at the catalog boundary.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog has no such course for the term.
    #[error("course {department} {number} not found for {term}")]
    NotFound {
        /// Term identifier, e.g. `2025 spring`.
        term: String,
        /// Department code.
        department: String,
        /// Course number.
        number: String,
    },

    /// Transport failure reported by a remote provider.
    #[error("network error: {0}")]
    Network(String),

    /// A catalog code (weekday, campus, section type) was not recognised.
    #[error("unknown {kind} code '{value}'")]
    UnknownCode {
        /// Which code family was being parsed.
        kind: &'static str,
        /// The offending text.
        value: String,
    },

    /// A field could not be parsed.
    #[error("invalid {field} value '{value}'")]
    InvalidField {
        /// Field name as it appears in the catalog.
        field: &'static str,
        /// The offending text.
        value: String,
    },

    /// The catalog document is not valid JSON for the expected shape.
    #[error("malformed catalog document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while reading planner settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The settings document is not valid JSON for [`PlannerConfig`].
    ///
    /// [`PlannerConfig`]: crate::config::PlannerConfig
    #[error("invalid planner configuration: {0}")]
    Json(#[from] serde_json::Error),
}
