//! Planner configuration.

use serde::{Deserialize, Serialize};

use crate::catalog::Term;
use crate::error::ConfigError;

/// Settings for a [`Planner`](crate::planner::Planner).
///
/// # Example
///
/// ```
/// use u_timetable::config::PlannerConfig;
///
/// let config = PlannerConfig::default().with_term("fall");
/// assert_eq!(config.term().to_string(), "2025 fall");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Catalog year courses are loaded from.
    pub year: String,
    /// Catalog term courses are loaded from.
    pub term: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            year: "2025".to_string(),
            term: "spring".to_string(),
        }
    }
}

impl PlannerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the catalog year.
    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = year.into();
        self
    }

    /// Sets the catalog term.
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }

    /// Term identifier passed to the catalog provider.
    pub fn term(&self) -> Term {
        Term::new(self.year.clone(), self.term.clone())
    }

    /// Parses a configuration from JSON; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
