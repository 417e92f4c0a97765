// Absolute-position vectors: pitch classes, scale degrees, onset times.
//
// A PositionVector stores one period of an infinite cyclic lattice. Reading
// past either end of the stored data adds (or subtracts) one `range` per full
// traversal, so a seven-note scale stored once can be read as an endless
// ascending or descending ladder of octaves. That cycle term is what
// separates "rototranslation" (a real transposition-by-position) from a mere
// reordering rotation — both live here, and the matrix generators lean on
// the distinction.
//
// `range` is always derived, never cached: the smallest positive multiple of
// the active base (the modulus, or a caller-supplied base) strictly greater
// than the span of the data. See `RangeSpec`.

use serde::{Deserialize, Serialize};

use crate::error::{VectorError, VectorResult};
use crate::euclid;

/// How the cyclic `range` of a [`PositionVector`] is derived.
///
/// The range is the amount added per full traversal of the stored data. It is
/// always recomputed from the current data — there is no settable, cacheable
/// range field that could go stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeSpec {
    /// Derive from the vector's own modulus: the smallest positive multiple
    /// of the modulus strictly greater than `max(data) - min(data)`.
    Auto,
    /// Derive from an explicit base instead of the modulus (same rule:
    /// smallest positive multiple of the base strictly greater than the
    /// span). Lets an octave-12 pitch vector cycle at, say, 24.
    Fixed(i64),
}

/// A cyclic vector of absolute positions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionVector {
    data: Vec<i64>,
    modulus: i64,
    range_spec: RangeSpec,
    /// Derived: amount added per full cyclic traversal. Recomputed on every
    /// construction and setter call; excluded from equality.
    range: i64,
}

impl PositionVector {
    /// Create a position vector with an [`RangeSpec::Auto`] range.
    ///
    /// Fails with [`VectorError::InvalidModulus`] when `modulus < 1`.
    pub fn new(data: Vec<i64>, modulus: i64) -> VectorResult<Self> {
        Self::with_range(data, modulus, RangeSpec::Auto)
    }

    /// Create a position vector with an explicit range derivation rule.
    pub fn with_range(data: Vec<i64>, modulus: i64, range_spec: RangeSpec) -> VectorResult<Self> {
        if modulus < 1 {
            return Err(VectorError::InvalidModulus(modulus));
        }
        if let RangeSpec::Fixed(base) = range_spec
            && base < 1
        {
            // The fixed base acts as an active modulus for range derivation,
            // so it obeys the same positivity requirement.
            return Err(VectorError::InvalidModulus(base));
        }
        let range = derive_range(&data, modulus, range_spec);
        Ok(PositionVector {
            data,
            modulus,
            range_spec,
            range,
        })
    }

    /// Construct from parts already known valid (same modulus and range rule
    /// as an existing vector). Used by transformations that cannot introduce
    /// an invalid modulus.
    pub(crate) fn from_parts(data: Vec<i64>, modulus: i64, range_spec: RangeSpec) -> Self {
        debug_assert!(modulus >= 1);
        let range = derive_range(&data, modulus, range_spec);
        PositionVector {
            data,
            modulus,
            range_spec,
            range,
        }
    }

    /// Rebuild this vector with different data, keeping modulus and range
    /// rule (range is re-derived).
    pub(crate) fn with_data(&self, data: Vec<i64>) -> Self {
        Self::from_parts(data, self.modulus, self.range_spec)
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

    pub fn modulus(&self) -> i64 {
        self.modulus
    }

    pub fn range_spec(&self) -> RangeSpec {
        self.range_spec
    }

    /// The derived cyclic range: how far one full traversal of the data
    /// shifts the value returned by [`element`](Self::element).
    pub fn range(&self) -> i64 {
        self.range
    }

    /// Replace the modulus, re-deriving the range.
    pub fn set_modulus(&mut self, modulus: i64) -> VectorResult<()> {
        if modulus < 1 {
            return Err(VectorError::InvalidModulus(modulus));
        }
        self.modulus = modulus;
        self.range = derive_range(&self.data, self.modulus, self.range_spec);
        Ok(())
    }

    /// Replace the range derivation rule, re-deriving the range.
    pub fn set_range_spec(&mut self, range_spec: RangeSpec) -> VectorResult<()> {
        if let RangeSpec::Fixed(base) = range_spec
            && base < 1
        {
            return Err(VectorError::InvalidModulus(base));
        }
        self.range_spec = range_spec;
        self.range = derive_range(&self.data, self.modulus, self.range_spec);
        Ok(())
    }

    /// Replace the data, re-deriving the range.
    pub fn set_data(&mut self, data: Vec<i64>) {
        self.data = data;
        self.range = derive_range(&self.data, self.modulus, self.range_spec);
    }

    /// Total cyclic access: `data[i mod n] + |range| * floor(i / n)`.
    ///
    /// Defined for every `i64` index. Index 0..n reads the stored period;
    /// each full period to the right adds one range, each to the left
    /// subtracts one. An empty vector reads as 0 everywhere (callers that
    /// care about emptiness check it explicitly).
    pub fn element(&self, index: i64) -> i64 {
        if self.data.is_empty() {
            return 0;
        }
        let n = self.data.len() as i64;
        let (cycle, slot) = euclid::div_rem_unchecked(index, n);
        self.data[slot as usize] + self.range.abs() * cycle
    }

    /// Flat cyclic re-read starting at `start`, producing `count` elements
    /// (`0` = original length). No cycle term: the output is a reordering of
    /// stored values, repeated if `count` exceeds the length. This is the
    /// "mode generation" rotation, not a transposition.
    pub fn rotate(&self, start: i64, count: usize) -> Self {
        if self.data.is_empty() {
            return self.clone();
        }
        let count = if count == 0 { self.data.len() } else { count };
        let data = (0..count)
            .map(|k| self.data[euclid::wrap_index(start + k as i64, self.data.len())])
            .collect();
        self.with_data(data)
    }

    /// Windowed cyclic extraction of `length` (`0` = original length)
    /// consecutive cyclic elements starting at `start`, cycle term included.
    /// Crossing a period boundary transposes by the range, which makes this
    /// the positional-transposition primitive ("rototranslation").
    pub fn roto_translate(&self, start: i64, length: usize) -> Self {
        if self.data.is_empty() {
            return self.clone();
        }
        let length = if length == 0 { self.data.len() } else { length };
        let data = (0..length)
            .map(|k| self.element(start + k as i64))
            .collect();
        self.with_data(data)
    }

    /// Reflect every element about the value at (wrapped) index `axis`:
    /// `result[i] = 2 * data[axis] - data[i]`. With `sort`, the result is
    /// sorted ascending afterward.
    pub fn inversion(&self, axis: i64, sort: bool) -> Self {
        if self.data.is_empty() {
            return self.clone();
        }
        let pivot = self.data[euclid::wrap_index(axis, self.data.len())];
        let mut data: Vec<i64> = self.data.iter().map(|&v| 2 * pivot - v).collect();
        if sort {
            data.sort_unstable();
        }
        self.with_data(data)
    }

    /// Reduce every element modulo the vector's modulus and sort ascending.
    /// This is the normal form used by transposition matrices.
    pub fn reduced_sorted(&self) -> Self {
        let mut data: Vec<i64> = self
            .data
            .iter()
            .map(|&v| euclid::rem_unchecked(v, self.modulus))
            .collect();
        data.sort_unstable();
        self.with_data(data)
    }

    /// Whether the data, reduced modulo this vector's modulus, contains the
    /// given note (also reduced). Used by the matrix filters.
    pub fn contains_note(&self, note: i64) -> bool {
        let want = euclid::rem_unchecked(note, self.modulus);
        self.data
            .iter()
            .any(|&v| euclid::rem_unchecked(v, self.modulus) == want)
    }
}

/// Equality ignores the derived `range`: two vectors with the same data,
/// modulus, and range rule are the same lattice.
impl PartialEq for PositionVector {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
            && self.modulus == other.modulus
            && self.range_spec == other.range_spec
    }
}

impl Eq for PositionVector {}

/// Smallest positive multiple of the active base strictly greater than the
/// span of the data. Empty or single-element data spans 0, so the range is
/// one base.
fn derive_range(data: &[i64], modulus: i64, range_spec: RangeSpec) -> i64 {
    let base = match range_spec {
        RangeSpec::Auto => modulus,
        RangeSpec::Fixed(base) => base,
    };
    let span = match (data.iter().max(), data.iter().min()) {
        (Some(max), Some(min)) => max - min,
        _ => 0,
    };
    let (cycles, _) = euclid::div_rem_unchecked(span, base);
    base * (cycles + 1)
}
