// Relative-interval vectors: the deltas between consecutive positions.
//
// An IntervalVector is the melodic-shape view of a line: how far each step
// moves, not where it lands. The `offset` remembers the absolute starting
// position so the shape can be re-anchored into position space, but it plays
// no part in cyclic indexing — intervals repeat identically period after
// period, with no accumulating cycle term. That flat wrap is the essential
// difference from PositionVector and is what makes modal rotation (starting
// the same scale from another degree) a plain rotation here.

use serde::{Deserialize, Serialize};

use crate::error::{VectorError, VectorResult};
use crate::euclid;

/// A cyclic vector of relative intervals with an absolute starting offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalVector {
    data: Vec<i64>,
    offset: i64,
    modulus: i64,
}

impl IntervalVector {
    /// Create an interval vector. Fails with [`VectorError::InvalidModulus`]
    /// when `modulus < 1`.
    pub fn new(data: Vec<i64>, offset: i64, modulus: i64) -> VectorResult<Self> {
        if modulus < 1 {
            return Err(VectorError::InvalidModulus(modulus));
        }
        Ok(IntervalVector {
            data,
            offset,
            modulus,
        })
    }

    pub(crate) fn from_parts(data: Vec<i64>, offset: i64, modulus: i64) -> Self {
        debug_assert!(modulus >= 1);
        IntervalVector {
            data,
            offset,
            modulus,
        }
    }

    /// Rebuild with different data, keeping offset and modulus.
    pub(crate) fn with_data(&self, data: Vec<i64>) -> Self {
        Self::from_parts(data, self.offset, self.modulus)
    }

    pub fn data(&self) -> &[i64] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The absolute starting position implied by the intervals.
    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn modulus(&self) -> i64 {
        self.modulus
    }

    pub fn set_offset(&mut self, offset: i64) {
        self.offset = offset;
    }

    pub fn set_modulus(&mut self, modulus: i64) -> VectorResult<()> {
        if modulus < 1 {
            return Err(VectorError::InvalidModulus(modulus));
        }
        self.modulus = modulus;
        Ok(())
    }

    /// Total cyclic access: `data[i mod n]`, flat. Intervals repeat exactly;
    /// no cycle term is added. An empty vector reads as 0 everywhere.
    pub fn element(&self, index: i64) -> i64 {
        if self.data.is_empty() {
            return 0;
        }
        self.data[euclid::wrap_index(index, self.data.len())]
    }

    /// Cyclic rotation: re-read starting at `start`, producing `count`
    /// elements (`0` = original length). Offset and modulus are preserved.
    pub fn rotate(&self, start: i64, count: usize) -> Self {
        if self.data.is_empty() {
            return self.clone();
        }
        let count = if count == 0 { self.data.len() } else { count };
        let data = (0..count)
            .map(|k| self.element(start + k as i64))
            .collect();
        self.with_data(data)
    }

    /// Reflect every interval about the value at (wrapped) index `axis`:
    /// `result[i] = 2 * data[axis] - data[i]`. Never sorted — interval order
    /// is melodic order.
    pub fn inversion(&self, axis: i64) -> Self {
        if self.data.is_empty() {
            return self.clone();
        }
        let pivot = self.data[euclid::wrap_index(axis, self.data.len())];
        let data = self.data.iter().map(|&v| 2 * pivot - v).collect();
        self.with_data(data)
    }

    /// Sum of the first `count` cyclic elements. Negative `count` sums
    /// backward from the offset (elements -1, -2, ...) with negated sign, so
    /// that walking `count` steps from any anchor is consistent in both
    /// directions.
    pub fn prefix_sum(&self, count: i64) -> i64 {
        if count >= 0 {
            (0..count).map(|k| self.element(k)).sum()
        } else {
            -((count..0).map(|k| self.element(k)).sum::<i64>())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn major_steps() -> IntervalVector {
        // Whole/half-step pattern of a major scale (wrap interval omitted).
        IntervalVector::new(vec![2, 2, 1, 2, 2, 2], 0, 12).unwrap()
    }

    #[test]
    fn test_flat_periodicity() {
        let iv = major_steps();
        let n = iv.len() as i64;
        for i in -15..15 {
            assert_eq!(iv.element(i + n), iv.element(i));
        }
        assert_eq!(iv.element(-1), 2);
    }

    #[test]
    fn test_rotate_preserves_offset() {
        let iv = IntervalVector::new(vec![2, 1, 4], 5, 12).unwrap();
        let rotated = iv.rotate(1, 0);
        assert_eq!(rotated.data(), &[1, 4, 2]);
        assert_eq!(rotated.offset(), 5);
        // Rotation by the length is the identity.
        assert_eq!(iv.rotate(3, 0), iv);
        // Longer counts wrap and repeat.
        assert_eq!(iv.rotate(0, 5).data(), &[2, 1, 4, 2, 1]);
    }

    #[test]
    fn test_inversion_keeps_order() {
        let iv = IntervalVector::new(vec![2, 1, 4], 0, 12).unwrap();
        // Reflect about data[0] = 2.
        assert_eq!(iv.inversion(0).data(), &[2, 3, 0]);
    }

    #[test]
    fn test_prefix_sum_both_directions() {
        let iv = major_steps();
        assert_eq!(iv.prefix_sum(0), 0);
        assert_eq!(iv.prefix_sum(3), 5); // 2+2+1: a perfect fourth of steps
        // Backward: undoing the last `k` cyclic steps.
        assert_eq!(iv.prefix_sum(-1), -2);
        assert_eq!(iv.prefix_sum(-6), -11);
    }

    #[test]
    fn test_invalid_modulus_rejected() {
        assert_eq!(
            IntervalVector::new(vec![1], 0, 0).unwrap_err(),
            VectorError::InvalidModulus(0)
        );
    }
}
