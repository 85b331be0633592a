//! Instructor identities.
//!
//! Instructors are interned by name: every lookup of the same name through one
//! [`InstructorRegistry`] yields the same `Arc`, so sections taught by the same
//! person share a single allocation and compare equal by identity.
//!
//! The registry only grows. It is safe to share across threads; the
//! check-then-insert sequence runs under one lock, so two concurrent loads of
//! the same name cannot create two identities.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

/// A course instructor.
///
/// Constructed only through [`InstructorRegistry::intern`].
#[derive(Debug, Serialize)]
pub struct Instructor {
    name: String,
}

impl Instructor {
    /// Instructor name as listed in the catalog.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Instructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Name-keyed interning table for [`Instructor`] identities.
#[derive(Debug, Default)]
pub struct InstructorRegistry {
    instances: Mutex<HashMap<String, Arc<Instructor>>>,
}

impl InstructorRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the instructor with this name, creating it on first use.
    pub fn intern(&self, name: &str) -> Arc<Instructor> {
        let mut instances = self
            .instances
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(instances.entry(name.to_string()).or_insert_with(|| {
            Arc::new(Instructor {
                name: name.to_string(),
            })
        }))
    }

    /// Looks up an already-interned instructor.
    pub fn get(&self, name: &str) -> Option<Arc<Instructor>> {
        self.instances
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// Number of distinct instructors seen so far.
    pub fn len(&self) -> usize {
        self.instances
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether no instructor has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_same_name_same_identity() {
        let registry = InstructorRegistry::new();
        let a = registry.intern("Diana Cukierman");
        let b = registry.intern("Diana Cukierman");
        let c = registry.intern("Brian Fraser");

        assert!(Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &c));
        assert_eq!(registry.len(), 2);
        assert_eq!(a.to_string(), "Diana Cukierman");
    }

    #[test]
    fn test_registries_are_independent() {
        let first = InstructorRegistry::new();
        let second = InstructorRegistry::new();
        assert!(!Arc::ptr_eq(&first.intern("A"), &second.intern("A")));
    }

    #[test]
    fn test_get_does_not_create() {
        let registry = InstructorRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get("Nobody").is_none());
        assert!(registry.is_empty());

        let created = registry.intern("Somebody");
        assert!(Arc::ptr_eq(&registry.get("Somebody").unwrap(), &created));
    }

    #[test]
    fn test_concurrent_interning_yields_one_identity() {
        let registry = Arc::new(InstructorRegistry::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || registry.intern("Shared Name"))
            })
            .collect();

        let interned: Vec<Arc<Instructor>> =
            handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(interned.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
        assert_eq!(registry.len(), 1);
    }
}
