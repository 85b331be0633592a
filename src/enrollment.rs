//! Enrollment option grouping.
//!
//! An enrollment option is one mutually exclusive way of registering in a
//! course: the enrollment section a student signs up for, plus the satellite
//! sections (labs, tutorials, ...) that may accompany it, split into six
//! category lists.
//!
//! # Grouping Rule
//! One option is built per enrollment section, keyed by that section's
//! associated group `g`. The enrollment section is the only enrollment
//! section in its option. Any other section joins option `g` (in the list
//! for its type) iff
//! - its associated group is `g`, OR
//! - no enrollment section claims its associated group ("open" section).
//!
//! Open sections therefore appear in every option. They are not deduplicated
//! across options; each option counts them independently.
//!
//! A course without any enrollment section gets a single implicit option
//! holding all of its sections. A course without sections has no options.

use std::collections::HashSet;

use crate::models::{Section, SectionType, CATEGORY_COUNT};

/// One enrollment alternative of a course.
#[derive(Debug, Clone, Default)]
pub struct EnrollmentOption {
    /// Associated group of the enrollment section. `None` for the implicit
    /// option of a course without enrollment sections.
    pub group: Option<u32>,
    pub lectures: Vec<Section>,
    pub labs: Vec<Section>,
    pub tutorials: Vec<Section>,
    pub seminars: Vec<Section>,
    pub open_labs: Vec<Section>,
    pub online: Vec<Section>,
}

impl EnrollmentOption {
    fn empty(group: Option<u32>) -> Self {
        Self {
            group,
            ..Default::default()
        }
    }

    /// Sections of one category.
    pub fn category(&self, section_type: SectionType) -> &[Section] {
        match section_type {
            SectionType::Lecture => &self.lectures,
            SectionType::Lab => &self.labs,
            SectionType::Tutorial => &self.tutorials,
            SectionType::Seminar => &self.seminars,
            SectionType::OpenLab => &self.open_labs,
            SectionType::Online => &self.online,
        }
    }

    fn category_mut(&mut self, section_type: SectionType) -> &mut Vec<Section> {
        match section_type {
            SectionType::Lecture => &mut self.lectures,
            SectionType::Lab => &mut self.labs,
            SectionType::Tutorial => &mut self.tutorials,
            SectionType::Seminar => &mut self.seminars,
            SectionType::OpenLab => &mut self.open_labs,
            SectionType::Online => &mut self.online,
        }
    }

    /// All six category lists in indexing order.
    pub fn categories(&self) -> [&[Section]; CATEGORY_COUNT] {
        SectionType::CATEGORIES.map(|t| self.category(t))
    }

    /// Length of each category list in indexing order.
    pub fn counts(&self) -> [usize; CATEGORY_COUNT] {
        SectionType::CATEGORIES.map(|t| self.category(t).len())
    }

    /// Whether every category is empty.
    pub fn is_empty(&self) -> bool {
        self.counts().iter().all(|&c| c == 0)
    }

    fn push(&mut self, section: &Section) {
        self.category_mut(section.section_type).push(section.clone());
    }
}

/// Partitions a course's sections into enrollment options.
///
/// Pure function of `sections`; options come out in the order of their
/// enrollment sections, and each category list keeps catalog order.
pub fn group_enrollment_options(sections: &[Section]) -> Vec<EnrollmentOption> {
    if sections.is_empty() {
        return Vec::new();
    }

    let claimed: HashSet<u32> = sections
        .iter()
        .filter(|s| s.is_enrollment)
        .map(|s| s.associated_group)
        .collect();

    if claimed.is_empty() {
        let mut option = EnrollmentOption::empty(None);
        for section in sections {
            option.push(section);
        }
        return vec![option];
    }

    sections
        .iter()
        .filter(|s| s.is_enrollment)
        .map(|enrollment| {
            let group = enrollment.associated_group;
            let mut option = EnrollmentOption::empty(Some(group));
            for section in sections {
                let joins = if section.is_enrollment {
                    std::ptr::eq(section, enrollment)
                } else {
                    section.associated_group == group
                        || !claimed.contains(&section.associated_group)
                };
                if joins {
                    option.push(section);
                }
            }
            option
        })
        .collect()
}
