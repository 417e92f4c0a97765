// Euclidean division: integer division with a guaranteed non-negative
// remainder, regardless of operand signs.
//
// Native `/` and `%` truncate toward zero, so `-1 % 12 == -1`. Cyclic
// indexing needs `-1 mod 12 == 11` (the last slot of the period), and it
// needs the matching quotient `-1 div 12 == -1` so that a position vector
// can add one full descending cycle for indices left of zero. Every `%`-like
// operation in this crate routes through this module; nothing else in the
// codebase touches raw `%` on potentially negative operands.
//
// Contract: for divisor d != 0, `div_rem(n, d) == (q, r)` with
// `n == q * d + r` and `0 <= r < |d|`.

use crate::error::{VectorError, VectorResult};

/// Euclidean division. Returns `(quotient, remainder)` with the remainder in
/// `[0, |divisor|)`, or [`VectorError::ZeroDivisor`] when `divisor == 0`.
pub fn div_rem(dividend: i64, divisor: i64) -> VectorResult<(i64, i64)> {
    if divisor == 0 {
        return Err(VectorError::ZeroDivisor);
    }
    Ok(div_rem_unchecked(dividend, divisor))
}

/// Euclidean remainder only. Fails on a zero divisor.
pub fn rem(dividend: i64, divisor: i64) -> VectorResult<i64> {
    div_rem(dividend, divisor).map(|(_, r)| r)
}

/// Euclidean division for divisors already known to be nonzero (container
/// sizes and validated moduli). Callers must have checked the divisor; the
/// containers enforce `modulus >= 1` at construction and never index with a
/// zero length.
pub(crate) fn div_rem_unchecked(dividend: i64, divisor: i64) -> (i64, i64) {
    debug_assert!(divisor != 0, "euclidean division by zero");
    let q = dividend.div_euclid(divisor);
    let r = dividend.rem_euclid(divisor);
    (q, r)
}

/// Remainder-only form of [`div_rem_unchecked`].
pub(crate) fn rem_unchecked(dividend: i64, divisor: i64) -> i64 {
    div_rem_unchecked(dividend, divisor).1
}

/// Wrap an `i64` index onto `[0, len)` for slice access. `len` must be > 0.
pub(crate) fn wrap_index(index: i64, len: usize) -> usize {
    rem_unchecked(index, len as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_all_sign_combinations() {
        // 0 <= r < |d| and n == q*d + r must hold for every sign pairing.
        for n in -30i64..=30 {
            for d in [-12i64, -7, -1, 1, 3, 12] {
                let (q, r) = div_rem(n, d).unwrap();
                assert!(r >= 0 && r < d.abs(), "n={n} d={d} r={r}");
                assert_eq!(q * d + r, n, "n={n} d={d}");
            }
        }
    }

    #[test]
    fn test_negative_dividend_wraps_up() {
        // -1 is the last pitch class of the previous cycle: 11, one cycle down.
        assert_eq!(div_rem(-1, 12).unwrap(), (-1, 11));
        assert_eq!(div_rem(-13, 12).unwrap(), (-2, 11));
        assert_eq!(rem(-5, 12).unwrap(), 7);
    }

    #[test]
    fn test_zero_divisor_is_an_error() {
        assert_eq!(div_rem(5, 0), Err(VectorError::ZeroDivisor));
        assert_eq!(rem(0, 0), Err(VectorError::ZeroDivisor));
    }

    #[test]
    fn test_wrap_index() {
        assert_eq!(wrap_index(0, 7), 0);
        assert_eq!(wrap_index(7, 7), 0);
        assert_eq!(wrap_index(-1, 7), 6);
        assert_eq!(wrap_index(13, 7), 6);
    }
}
