//! In-process catalog provider.

use std::collections::HashMap;
use std::sync::Arc;

use super::{CatalogProvider, CourseLoader, CourseRecord, Term};
use crate::error::CatalogError;
use crate::models::{Course, InstructorRegistry};

/// A [`CatalogProvider`] over course records held in memory.
///
/// Records are converted on every load, interning instructors into the
/// catalog's registry.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    loader: CourseLoader,
    courses: HashMap<(Term, String, String), CourseRecord>,
}

impl MemoryCatalog {
    /// Creates an empty catalog with its own instructor registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty catalog interning into `registry`.
    pub fn with_registry(registry: Arc<InstructorRegistry>) -> Self {
        Self {
            loader: CourseLoader::with_registry(registry),
            courses: HashMap::new(),
        }
    }

    /// Adds (or replaces) a course record for a term.
    pub fn with_course(mut self, term: Term, record: CourseRecord) -> Self {
        self.insert(term, record);
        self
    }

    /// Adds (or replaces) a course record for a term.
    pub fn insert(&mut self, term: Term, record: CourseRecord) {
        let key = (term, record.department.clone(), record.number.clone());
        self.courses.insert(key, record);
    }

    /// Adds every course of a JSON array of [`CourseRecord`]s to a term.
    pub fn extend_from_json(&mut self, term: &Term, json: &str) -> Result<usize, CatalogError> {
        let records: Vec<CourseRecord> = serde_json::from_str(json)?;
        let count = records.len();
        for record in records {
            self.insert(term.clone(), record);
        }
        Ok(count)
    }

    /// Number of stored course records across all terms.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether no record is stored.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// The registry instructors are interned into.
    pub fn registry(&self) -> &Arc<InstructorRegistry> {
        self.loader.registry()
    }
}

impl CatalogProvider for MemoryCatalog {
    fn load_course(
        &self,
        term: &Term,
        department: &str,
        number: &str,
    ) -> Result<Course, CatalogError> {
        let key = (term.clone(), department.to_string(), number.to_string());
        let record = self.courses.get(&key).ok_or_else(|| CatalogError::NotFound {
            term: term.to_string(),
            department: department.to_string(),
            number: number.to_string(),
        })?;
        self.loader.build_course(record)
    }
}
