//! Combination indexing.
//!
//! Every concrete section selection of a course is addressed by one integer
//! index, without materializing the Cartesian product.
//!
//! # Index Layout
//!
//! A course's enrollment options are mutually exclusive, so their index
//! ranges are laid end to end: option 0 owns `[0, c0)`, option 1 owns
//! `[c0, c0 + c1)`, and so on. Within an option the remainder is a
//! mixed-radix number whose digits are the picks in each category, lectures
//! most significant and online least:
//!
//! ```text
//! index = offset(option) + Σ digit_i × Π_{j > i} max(count_j, 1)
//! ```
//!
//! An empty category has radix 1: it always yields "no section" and takes no
//! index range, so it never zeroes out the option.
//!
//! # Submodules
//!
//! - [`radix`]: the digit codec, independent of course types

pub mod radix;

pub use radix::MixedRadix;

use tracing::trace;

use crate::enrollment::EnrollmentOption;
use crate::error::ScheduleError;
use crate::models::{Course, Section, SectionType};

/// Number of combinations of `option` counted from category `start` onward.
pub fn option_combinations(option: &EnrollmentOption, start: usize) -> usize {
    MixedRadix::new(&option.counts()).capacity_from(start)
}

/// Number of combinations one enrollment option offers.
pub fn combination_count(option: &EnrollmentOption) -> usize {
    option_combinations(option, 0)
}

/// Number of combinations a course offers: the sum over its options.
pub fn total_combinations(course: &Course) -> usize {
    course
        .enrollment_options()
        .iter()
        .map(combination_count)
        .sum()
}

/// Returns the course restricted to the selection at `index`.
///
/// The result has the same name and one section for each non-empty category
/// of the option the index falls in, in category order.
///
/// # Errors
/// [`ScheduleError::IndexOutOfRange`] unless `index < total_combinations(course)`.
/// An empty course has no valid index.
pub fn select_combination(course: &Course, index: usize) -> Result<Course, ScheduleError> {
    let mut remainder = index;
    for (position, option) in course.enrollment_options().iter().enumerate() {
        let radix = MixedRadix::new(&option.counts());
        let count = radix.capacity();
        if remainder >= count {
            remainder -= count;
            continue;
        }

        let digits = radix
            .decode(remainder)
            .ok_or_else(|| out_of_range(course, index))?;
        trace!(course = course.name(), index, option = position, ?digits, "decoded combination");

        let sections: Vec<Section> = option
            .categories()
            .into_iter()
            .zip(digits)
            .filter_map(|(list, digit)| list.get(digit).cloned())
            .collect();
        return Ok(Course::new(course.name(), sections));
    }

    Err(out_of_range(course, index))
}

/// Recovers the index of a selection produced by [`select_combination`].
///
/// Sections are matched by name. Returns `None` if `selection` is not exactly
/// one section per non-empty category of some option. When several options
/// yield the same selection the smallest index is returned.
pub fn combination_index_of(course: &Course, selection: &Course) -> Option<usize> {
    let mut offset = 0;
    for option in course.enrollment_options() {
        let radix = MixedRadix::new(&option.counts());
        if let Some(local) = encode_selection(option, &radix, selection.sections()) {
            return Some(offset + local);
        }
        offset += radix.capacity();
    }
    None
}

fn encode_selection(
    option: &EnrollmentOption,
    radix: &MixedRadix,
    selected: &[Section],
) -> Option<usize> {
    let mut used = 0;
    let mut digits = Vec::with_capacity(radix.radices().len());

    for (section_type, list) in SectionType::CATEGORIES.into_iter().zip(option.categories()) {
        let mut picks = selected.iter().filter(|s| s.section_type == section_type);
        let pick = picks.next();
        if picks.next().is_some() {
            return None;
        }

        match (pick, list.is_empty()) {
            (None, true) => digits.push(0),
            (Some(section), false) => {
                digits.push(list.iter().position(|s| s.name == section.name)?);
                used += 1;
            }
            _ => return None,
        }
    }

    if used != selected.len() {
        return None;
    }
    radix.encode(&digits)
}

fn out_of_range(course: &Course, index: usize) -> ScheduleError {
    ScheduleError::IndexOutOfRange {
        course: course.name().to_string(),
        index,
        total: total_combinations(course),
    }
}
