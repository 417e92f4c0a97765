// Binary presence patterns: which slots of a cycle are occupied.
//
// A BinaryVector is the rhythm/set view of a cycle — a 0/1 occupancy array
// over one period, with an `offset` anchoring slot 0 to an absolute position.
// Indexing wraps flat like IntervalVector (a pattern repeats identically).
// Membership is validated at construction: anything outside {0, 1} is a
// construction error, not a value to be clamped.

use serde::{Deserialize, Serialize};

use crate::error::{VectorError, VectorResult};
use crate::euclid;

/// A cyclic 0/1 presence pattern with an absolute anchor offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryVector {
    data: Vec<i64>,
    offset: i64,
    modulus: i64,
}

impl BinaryVector {
    /// Create a binary vector. Fails with [`VectorError::NonBinaryValue`] on
    /// the first element outside {0, 1}, and with
    /// [`VectorError::InvalidModulus`] when `modulus < 1`.
    pub fn new(data: Vec<i64>, offset: i64, modulus: i64) -> VectorResult<Self> {
        if modulus < 1 {
            return Err(VectorError::InvalidModulus(modulus));
        }
        if let Some((index, &value)) = data.iter().enumerate().find(|&(_, &v)| v != 0 && v != 1) {
            return Err(VectorError::NonBinaryValue { index, value });
        }
        Ok(BinaryVector {
            data,
            offset,
            modulus,
        })
    }

    /// Construct from parts already known valid (values all in {0, 1},
    /// positive modulus). Used by the conversions.
    pub(crate) fn from_parts(data: Vec<i64>, offset: i64, modulus: i64) -> Self {
        debug_assert!(modulus >= 1);
        debug_assert!(data.iter().all(|&v| v == 0 || v == 1));
        BinaryVector {
            data,
            offset,
            modulus,
        }
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

    /// Absolute position of slot 0.
    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn modulus(&self) -> i64 {
        self.modulus
    }

    /// Total cyclic access: `data[i mod n]`, flat (patterns repeat exactly).
    /// An empty vector reads as 0 everywhere.
    pub fn element(&self, index: i64) -> i64 {
        if self.data.is_empty() {
            return 0;
        }
        self.data[euclid::wrap_index(index, self.data.len())]
    }

    /// Cyclic rotation, same convention as the other containers
    /// (`count == 0` keeps the original length).
    pub fn rotate(&self, start: i64, count: usize) -> Self {
        if self.data.is_empty() {
            return self.clone();
        }
        let count = if count == 0 { self.data.len() } else { count };
        let data = (0..count)
            .map(|k| self.element(start + k as i64))
            .collect();
        BinaryVector {
            data,
            offset: self.offset,
            modulus: self.modulus,
        }
    }

    /// Number of occupied slots.
    pub fn ones(&self) -> usize {
        self.data.iter().filter(|&&v| v == 1).count()
    }
}
