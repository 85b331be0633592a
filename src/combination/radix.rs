//! Mixed-radix digit codec.
//!
//! Maps an integer in `[0, capacity)` to a digit vector where digit `i` lies
//! in `[0, radix_i)`, most significant digit first, and back. A zero count is
//! stored as radix 1: that position always decodes to digit 0 and consumes no
//! index range.

/// Mixed-radix number system built from per-position counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MixedRadix {
    radices: Vec<usize>,
}

impl MixedRadix {
    /// Creates a codec from per-position counts.
    pub fn new(counts: &[usize]) -> Self {
        Self {
            radices: counts.iter().map(|&c| c.max(1)).collect(),
        }
    }

    /// Radix of each position after zero counts are lifted to 1.
    pub fn radices(&self) -> &[usize] {
        &self.radices
    }

    /// Number of distinct digit vectors.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity_from(0)
    }

    /// Product of the radices from position `start` to the end.
    ///
    /// This is the place value of position `start - 1`.
    pub fn capacity_from(&self, start: usize) -> usize {
        self.radices.iter().skip(start).product()
    }

    /// Splits `index` into digits. `None` if `index >= capacity`.
    pub fn decode(&self, index: usize) -> Option<Vec<usize>> {
        if index >= self.capacity() {
            return None;
        }

        let mut remainder = index;
        let digits = (0..self.radices.len())
            .map(|i| {
                let place = self.capacity_from(i + 1);
                let digit = remainder / place;
                remainder %= place;
                digit
            })
            .collect();
        Some(digits)
    }

    /// Joins digits back into an index. `None` if the digit count is wrong or
    /// any digit is not below its radix.
    pub fn encode(&self, digits: &[usize]) -> Option<usize> {
        if digits.len() != self.radices.len() {
            return None;
        }

        digits
            .iter()
            .zip(&self.radices)
            .try_fold(0usize, |acc, (&digit, &radix)| {
                (digit < radix).then(|| acc * radix + digit)
            })
    }
}
