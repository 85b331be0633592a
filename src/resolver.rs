//! Global cycle resolver.
//!
//! # Algorithm
//!
//! The per-course combination indices are read as the digits of an odometer,
//! ordered by load order; the most recently loaded course is the least
//! significant digit.
//!
//! 1. Step the odometer once in the requested direction: move the least
//!    significant digit, wrapping to `0` (forward) or `total - 1` (backward)
//!    and carrying into the next digit until a digit moves without wrapping.
//! 2. Project every course onto its digit and test the set for conflicts.
//! 3. Conflict-free: commit. Otherwise step again in the same direction.
//! 4. If a step lands back on the starting tuple, every tuple has been tried:
//!    commit it and report the outcome as unresolved.
//!
//! Courses with zero combinations are fixed digits: the odometer skips them
//! and they project to an empty course.
//!
//! # Complexity
//! At most `Π total_i` steps, each costing one projection per course plus a
//! pairwise conflict check.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::combination::{select_combination, total_combinations};
use crate::conflict::has_conflicts;
use crate::error::ScheduleError;
use crate::models::Course;

/// Direction of an odometer step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Next combination (`+1`).
    Forward,
    /// Previous combination (`-1`).
    Backward,
}

impl Direction {
    /// Direction from a signed step; `None` for zero.
    pub fn from_step(step: i32) -> Option<Self> {
        match step {
            s if s > 0 => Some(Direction::Forward),
            s if s < 0 => Some(Direction::Backward),
            _ => None,
        }
    }
}

/// Result of [`GlobalCycleResolver::advance`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvanceOutcome {
    /// Committed index per course, in load order.
    pub indices: Vec<usize>,
    /// Odometer steps taken.
    pub steps: usize,
    /// Whether the committed tuple is conflict-free.
    pub resolved: bool,
}

/// Drives the odometer search over a fixed course list.
#[derive(Debug, Clone)]
pub struct GlobalCycleResolver<'a> {
    courses: &'a [Course],
    totals: Vec<usize>,
}

impl<'a> GlobalCycleResolver<'a> {
    /// Creates a resolver over courses in load order.
    pub fn new(courses: &'a [Course]) -> Self {
        Self {
            courses,
            totals: courses.iter().map(total_combinations).collect(),
        }
    }

    /// Combination count per course.
    pub fn totals(&self) -> &[usize] {
        &self.totals
    }

    /// Upper bound on the steps one advance can take.
    pub fn cycle_length(&self) -> usize {
        self.totals.iter().map(|&t| t.max(1)).product()
    }

    /// Applies one odometer step in place.
    pub fn step(&self, indices: &mut [usize], direction: Direction) {
        for (index, &total) in indices.iter_mut().zip(&self.totals).rev() {
            if total == 0 {
                continue;
            }
            match direction {
                Direction::Forward if *index + 1 >= total => *index = 0,
                Direction::Forward => {
                    *index += 1;
                    return;
                }
                Direction::Backward if *index == 0 => *index = total - 1,
                Direction::Backward => {
                    *index -= 1;
                    return;
                }
            }
        }
    }

    /// Projects each course onto its index.
    pub fn selection(&self, indices: &[usize]) -> Result<Vec<Course>, ScheduleError> {
        self.check_indices(indices)?;
        self.courses
            .iter()
            .zip(&self.totals)
            .zip(indices)
            .map(|((course, &total), &index)| {
                if total == 0 {
                    Ok(Course::new(course.name(), Vec::new()))
                } else {
                    select_combination(course, index)
                }
            })
            .collect()
    }

    /// Moves to the next conflict-free tuple in `direction`.
    ///
    /// # Errors
    /// [`ScheduleError::IndicesMismatch`] if `indices` does not match the
    /// course list; [`ScheduleError::IndexOutOfRange`] if any index is
    /// outside its course's range. Running out of tuples is not an error; see
    /// [`AdvanceOutcome::resolved`].
    #[tracing::instrument(skip_all, fields(courses = self.courses.len(), ?direction))]
    pub fn advance(
        &self,
        indices: &[usize],
        direction: Direction,
    ) -> Result<AdvanceOutcome, ScheduleError> {
        self.check_indices(indices)?;

        let start = indices.to_vec();
        let mut current = start.clone();
        let mut steps = 0;

        loop {
            self.step(&mut current, direction);
            steps += 1;
            trace!(?current, steps, "odometer step");

            if !has_conflicts(&self.selection(&current)?) {
                debug!(?current, steps, "found conflict-free combination");
                return Ok(AdvanceOutcome {
                    indices: current,
                    steps,
                    resolved: true,
                });
            }

            if current == start {
                warn!(steps, "every combination conflicts; keeping starting combination");
                return Ok(AdvanceOutcome {
                    indices: current,
                    steps,
                    resolved: false,
                });
            }
        }
    }

    fn check_indices(&self, indices: &[usize]) -> Result<(), ScheduleError> {
        if indices.len() != self.courses.len() {
            return Err(ScheduleError::IndicesMismatch {
                expected: self.courses.len(),
                actual: indices.len(),
            });
        }
        for ((course, &total), &index) in self.courses.iter().zip(&self.totals).zip(indices) {
            if index >= total.max(1) {
                return Err(ScheduleError::IndexOutOfRange {
                    course: course.name().to_string(),
                    index,
                    total,
                });
            }
        }
        Ok(())
    }
}

/// Advances `indices` over `courses` to the next conflict-free tuple.
///
/// Shorthand for [`GlobalCycleResolver::advance`].
pub fn advance_global_combination(
    courses: &[Course],
    indices: &[usize],
    direction: Direction,
) -> Result<AdvanceOutcome, ScheduleError> {
    GlobalCycleResolver::new(courses).advance(indices, direction)
}
