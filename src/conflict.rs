//! Time conflict detection.
//!
//! Conflicts are found pairwise: two sections conflict if any of their
//! occurrences overlap (see [`Occurrence::overlaps`]), two courses conflict if
//! any of their sections do. A selection set is conflicting if any two
//! distinct courses in it conflict.
//!
//! [`Occurrence::overlaps`]: crate::models::Occurrence::overlaps

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Course, Section};

/// Whether any meeting of `a` overlaps any meeting of `b`.
pub fn sections_overlap(a: &Section, b: &Section) -> bool {
    a.occurrences
        .iter()
        .any(|x| b.occurrences.iter().any(|y| x.overlaps(y)))
}

/// Whether any section of `a` overlaps any section of `b`.
pub fn courses_overlap(a: &Course, b: &Course) -> bool {
    first_overlap(a, b).is_some()
}

/// Whether any two distinct courses in the set overlap.
pub fn has_conflicts(courses: &[Course]) -> bool {
    courses
        .iter()
        .enumerate()
        .any(|(i, a)| courses[i + 1..].iter().any(|b| courses_overlap(a, b)))
}

/// Every conflicting course pair in the set, in load order.
///
/// Each entry names the first overlapping section pair found.
pub fn find_conflicts(courses: &[Course]) -> Vec<Conflict> {
    let mut conflicts = Vec::new();
    for (i, a) in courses.iter().enumerate() {
        for b in &courses[i + 1..] {
            if let Some((sa, sb)) = first_overlap(a, b) {
                conflicts.push(Conflict {
                    course: a.name().to_string(),
                    section: sa.name.clone(),
                    other_course: b.name().to_string(),
                    other_section: sb.name.clone(),
                });
            }
        }
    }
    conflicts
}

fn first_overlap<'a>(a: &'a Course, b: &'a Course) -> Option<(&'a Section, &'a Section)> {
    a.sections().iter().find_map(|sa| {
        b.sections()
            .iter()
            .find(|sb| sections_overlap(sa, sb))
            .map(|sb| (sa, sb))
    })
}

/// A pair of courses double-booked against each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// Earlier-loaded course.
    pub course: String,
    /// Its overlapping section.
    pub section: String,
    /// Later-loaded course.
    pub other_course: String,
    /// Its overlapping section.
    pub other_section: String,
}

impl Conflict {
    /// Whether this conflict involves the named course.
    pub fn involves(&self, course: &str) -> bool {
        self.course == course || self.other_course == course
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} overlaps {} {}",
            self.course, self.section, self.other_course, self.other_section
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Occurrence, SectionType, WeekDay};
    use chrono::{NaiveDate, NaiveTime};

    fn meeting(days: &[WeekDay], start_hour: u32, end_hour: u32) -> Occurrence {
        Occurrence::new(
            NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
            NaiveDate::from_ymd_opt(2025, 4, 8).unwrap(),
        )
        .with_days(days.iter().copied())
        .with_times(
            NaiveTime::from_hms_opt(start_hour, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(end_hour, 0, 0).unwrap(),
        )
    }

    fn single(name: &str, occurrence: Occurrence) -> Course {
        Course::new(
            name,
            vec![Section::new("D100", SectionType::Lecture).with_occurrence(occurrence)],
        )
    }

    const MO_WE: &[WeekDay] = &[WeekDay::Monday, WeekDay::Wednesday];

    #[test]
    fn test_same_slot_courses_overlap() {
        let a = single("CMPT 120", meeting(MO_WE, 10, 11));
        let b = single("MATH 151", meeting(MO_WE, 10, 11));
        assert!(courses_overlap(&a, &b));
        assert!(courses_overlap(&b, &a));
        assert!(has_conflicts(&[a, b]));
    }

    #[test]
    fn test_sections_any_occurrence_pair() {
        let a = Section::new("D100", SectionType::Lecture)
            .with_occurrence(meeting(&[WeekDay::Monday], 8, 9))
            .with_occurrence(meeting(&[WeekDay::Friday], 13, 15));
        let b = Section::new("D101", SectionType::Lab).with_occurrence(meeting(&[WeekDay::Friday], 14, 16));
        let c = Section::new("D102", SectionType::Lab).with_occurrence(meeting(&[WeekDay::Friday], 15, 16));
        assert!(sections_overlap(&a, &b));
        assert!(!sections_overlap(&a, &c));
    }

    #[test]
    fn test_untimed_occurrence_never_conflicts() {
        let timed = meeting(MO_WE, 10, 11);
        let mut untimed = timed.clone();
        untimed.start_time = None;

        let a = single("CMPT 120", timed);
        let b = single("MATH 151", untimed);
        assert!(!courses_overlap(&a, &b));
        assert!(!has_conflicts(&[a, b]));
    }

    #[test]
    fn test_single_course_has_no_conflicts() {
        // Sections of one course are alternatives, never checked against each other.
        let course = Course::new(
            "CMPT 120",
            vec![
                Section::new("D100", SectionType::Lecture).with_occurrence(meeting(MO_WE, 10, 11)),
                Section::new("D200", SectionType::Lecture).with_occurrence(meeting(MO_WE, 10, 11)),
            ],
        );
        assert!(!has_conflicts(&[course]));
        assert!(!has_conflicts(&[]));
    }

    #[test]
    fn test_find_conflicts_reports_pairs() {
        let a = single("CMPT 120", meeting(MO_WE, 10, 11));
        let b = single("MATH 151", meeting(&[WeekDay::Tuesday], 10, 11));
        let c = single("PHYS 140", meeting(&[WeekDay::Wednesday], 10, 12));

        let conflicts = find_conflicts(&[a, b, c]);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].course, "CMPT 120");
        assert_eq!(conflicts[0].other_course, "PHYS 140");
        assert!(conflicts[0].involves("PHYS 140"));
        assert!(!conflicts[0].involves("MATH 151"));
        assert_eq!(conflicts[0].to_string(), "CMPT 120 D100 overlaps PHYS 140 D100");
    }
}
