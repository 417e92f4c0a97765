// Named componentwise arithmetic, implemented once for every vector kind.
//
// The ported engine grew one operator overload per (operation × operand-kind
// × container) combination. Here the whole family is a single trait with
// provided methods: a container contributes its value slice and a metadata-
// preserving rebuild, and gets `add`/`subtract`/`componentwise_product`/
// quotient/remainder plus the scalar forms for free.
//
// Rules shared by every operation:
// - Mismatched lengths: the output has the longer length and both operands
//   are read with flat cyclic indexing.
// - An empty operand yields the other operand's values unchanged. Combining
//   with nothing is a no-op, not an arithmetic error.
// - Quotients and remainders are Euclidean, and any zero in a divisor
//   position is a `ZeroDivisor` error.
//
// PositionVector and IntervalVector implement this; BinaryVector does not —
// sums of presence flags are not presence flags, so the binary container is
// not closed under these operations.

use crate::error::{VectorError, VectorResult};
use crate::euclid;
use crate::interval::IntervalVector;
use crate::position::PositionVector;

/// Componentwise-arithmetic capability for cyclic integer vectors.
///
/// The result always keeps the receiver's metadata (modulus, offset, range
/// rule); only the values change.
pub trait VectorArithmetic: Sized {
    /// The stored values.
    fn values(&self) -> &[i64];

    /// Rebuild this vector around new values, keeping all other fields.
    fn rebuild(&self, values: Vec<i64>) -> Self;

    fn add(&self, other: &[i64]) -> Self {
        self.rebuild(combine(self.values(), other, |a, b| a + b))
    }

    fn subtract(&self, other: &[i64]) -> Self {
        self.rebuild(combine(self.values(), other, |a, b| a - b))
    }

    fn componentwise_product(&self, other: &[i64]) -> Self {
        self.rebuild(combine(self.values(), other, |a, b| a * b))
    }

    /// Euclidean quotient per component. Any zero in `other` is an error.
    fn componentwise_quotient(&self, other: &[i64]) -> VectorResult<Self> {
        try_combine(self.values(), other, |a, b| {
            euclid::div_rem(a, b).map(|(q, _)| q)
        })
        .map(|values| self.rebuild(values))
    }

    /// Euclidean (non-negative) remainder per component. Any zero in `other`
    /// is an error.
    fn componentwise_remainder(&self, other: &[i64]) -> VectorResult<Self> {
        try_combine(self.values(), other, |a, b| euclid::rem(a, b))
            .map(|values| self.rebuild(values))
    }

    fn add_scalar(&self, scalar: i64) -> Self {
        self.rebuild(self.values().iter().map(|&v| v + scalar).collect())
    }

    fn subtract_scalar(&self, scalar: i64) -> Self {
        self.rebuild(self.values().iter().map(|&v| v - scalar).collect())
    }

    fn multiply_scalar(&self, scalar: i64) -> Self {
        self.rebuild(self.values().iter().map(|&v| v * scalar).collect())
    }

    fn divide_scalar(&self, scalar: i64) -> VectorResult<Self> {
        if scalar == 0 {
            return Err(VectorError::ZeroDivisor);
        }
        Ok(self.rebuild(self.values().iter().map(|&v| v.div_euclid(scalar)).collect()))
    }

    fn remainder_scalar(&self, scalar: i64) -> VectorResult<Self> {
        if scalar == 0 {
            return Err(VectorError::ZeroDivisor);
        }
        Ok(self.rebuild(
            self.values()
                .iter()
                .map(|&v| euclid::rem_unchecked(v, scalar))
                .collect(),
        ))
    }
}

impl VectorArithmetic for PositionVector {
    fn values(&self) -> &[i64] {
        self.data()
    }

    fn rebuild(&self, values: Vec<i64>) -> Self {
        self.with_data(values)
    }
}

impl VectorArithmetic for IntervalVector {
    fn values(&self) -> &[i64] {
        self.data()
    }

    fn rebuild(&self, values: Vec<i64>) -> Self {
        self.with_data(values)
    }
}

/// Zip two slices cyclically over the longer length. An empty side passes
/// the other side through unchanged.
fn combine(a: &[i64], b: &[i64], op: impl Fn(i64, i64) -> i64) -> Vec<i64> {
    if a.is_empty() {
        return b.to_vec();
    }
    if b.is_empty() {
        return a.to_vec();
    }
    let len = a.len().max(b.len());
    (0..len)
        .map(|k| op(a[k % a.len()], b[k % b.len()]))
        .collect()
}

/// Fallible form of [`combine`], for quotient/remainder.
fn try_combine(
    a: &[i64],
    b: &[i64],
    op: impl Fn(i64, i64) -> VectorResult<i64>,
) -> VectorResult<Vec<i64>> {
    if a.is_empty() {
        return Ok(b.to_vec());
    }
    if b.is_empty() {
        return Ok(a.to_vec());
    }
    let len = a.len().max(b.len());
    (0..len)
        .map(|k| op(a[k % a.len()], b[k % b.len()]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pv(data: Vec<i64>) -> PositionVector {
        PositionVector::new(data, 12).unwrap()
    }

    #[test]
    fn test_add_and_subtract() {
        let a = pv(vec![0, 4, 7]);
        assert_eq!(a.add(&[12, 12, 12]).data(), &[12, 16, 19]);
        assert_eq!(a.subtract(&[1, 2, 3]).data(), &[-1, 2, 4]);
        assert_eq!(a.add_scalar(5).data(), &[5, 9, 12]);
    }

    #[test]
    fn test_mismatched_lengths_wrap() {
        // The shorter operand repeats cyclically under the longer one.
        let a = pv(vec![0, 2, 4, 5, 7, 9]);
        assert_eq!(a.add(&[10, 20]).data(), &[10, 22, 14, 25, 17, 29]);
        // Receiver shorter than the argument: the output still spans the
        // longer length, reading the receiver cyclically.
        let b = pv(vec![1, 2]);
        assert_eq!(b.add(&[0, 0, 0, 10]).data(), &[1, 2, 1, 12]);
    }

    #[test]
    fn test_empty_operand_is_identity() {
        let a = pv(vec![3, 1]);
        assert_eq!(a.add(&[]).data(), &[3, 1]);
        let empty = pv(vec![]);
        assert_eq!(empty.add(&[3, 1]).data(), &[3, 1]);
        assert_eq!(empty.componentwise_quotient(&[0]).unwrap().data(), &[0]);
    }

    #[test]
    fn test_euclidean_remainder_and_quotient() {
        let a = pv(vec![-1, 13, 7]);
        assert_eq!(a.remainder_scalar(12).unwrap().data(), &[11, 1, 7]);
        assert_eq!(a.divide_scalar(12).unwrap().data(), &[-1, 1, 0]);
        assert_eq!(
            a.componentwise_remainder(&[12, 12, 5]).unwrap().data(),
            &[11, 1, 2]
        );
    }

    #[test]
    fn test_zero_divisor_is_an_error() {
        let a = pv(vec![1, 2]);
        assert_eq!(a.divide_scalar(0), Err(VectorError::ZeroDivisor));
        assert_eq!(a.remainder_scalar(0), Err(VectorError::ZeroDivisor));
        assert_eq!(
            a.componentwise_quotient(&[1, 0]),
            Err(VectorError::ZeroDivisor)
        );
    }

    #[test]
    fn test_metadata_preserved() {
        let iv = IntervalVector::new(vec![2, 2, 1], 5, 12).unwrap();
        let shifted = iv.multiply_scalar(2);
        assert_eq!(shifted.data(), &[4, 4, 2]);
        assert_eq!(shifted.offset(), 5);
        assert_eq!(shifted.modulus(), 12);
    }
}
