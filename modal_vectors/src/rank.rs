// Distance ranking: score every row of a generated matrix against a
// reference vector and pick by percentile.
//
// This is the generative-choice end of the engine. A matrix generator
// enumerates what is structurally possible; this module orders it by
// distance from where the music currently is, and the `complexity` dial
// picks a rank — 0 for the closest (smoothest voice leading), 100 for the
// farthest (maximum dissimilarity), anything between for a linear blend of
// the two. Composed matrices arrive pre-flattened, so one dial spans the
// whole mode-by-window search space.
//
// The metric is pluggable; Manhattan over cyclic elements is the default.

use serde::{Deserialize, Serialize};

use crate::error::{VectorError, VectorResult};
use crate::matrix::{CycleVector, RowTags, VectorMatrix};

/// A distance metric between two vectors. Metrics never fail; degenerate
/// comparisons (an empty side) measure 0.
pub type DistanceFn = fn(&CycleVector, &CycleVector) -> f64;

/// Default metric: sum of elementwise absolute differences over the shorter
/// of the two lengths, reading both vectors cyclically.
pub fn manhattan(a: &CycleVector, b: &CycleVector) -> f64 {
    let len = a.len().min(b.len());
    (0..len as i64)
        .map(|i| (a.element(i) - b.element(i)).unsigned_abs() as f64)
        .sum()
}

/// One scored row: the candidate vector, the generator's tags, and its
/// distance from the reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRow {
    pub vector: CycleVector,
    pub tags: RowTags,
    pub distance: f64,
}

/// A matrix scored against a reference, ready for percentile picks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMatrix {
    rows: Vec<RankedRow>,
    sorted: bool,
}

/// Score every row of `matrix` against `reference` with `metric`, keeping
/// each row's tags. With `sort`, rows are stable-sorted ascending by
/// distance (equal distances keep generator order).
pub fn calculate_distances(
    reference: &CycleVector,
    matrix: &VectorMatrix,
    metric: DistanceFn,
    sort: bool,
) -> RankedMatrix {
    let mut rows: Vec<RankedRow> = matrix
        .rows
        .iter()
        .map(|row| RankedRow {
            vector: row.vector.clone(),
            tags: row.tags.clone(),
            distance: metric(reference, &row.vector),
        })
        .collect();
    if sort {
        rows.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    }
    log::debug!("ranked {} rows (sorted: {sort})", rows.len());
    RankedMatrix { rows, sorted: sort }
}

impl RankedMatrix {
    pub fn rows(&self) -> &[RankedRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Map the complexity dial onto the distance-sorted order:
    /// `index = complexity * (len - 1) / 100`, rounded down. 0 picks the
    /// closest row, 100 the farthest. A matrix built with `sort = false`
    /// ranks through a lazily computed sort order, so the pick is the same
    /// either way.
    ///
    /// Fails with [`VectorError::ComplexityOutOfRange`] outside `[0, 100]`
    /// and [`VectorError::EmptyMatrix`] when there is nothing to pick.
    pub fn get_by_complexity(&self, complexity: i64) -> VectorResult<&RankedRow> {
        if !(0..=100).contains(&complexity) {
            return Err(VectorError::ComplexityOutOfRange(complexity));
        }
        if self.rows.is_empty() {
            return Err(VectorError::EmptyMatrix);
        }
        let index = (complexity * (self.rows.len() as i64 - 1) / 100) as usize;
        if self.sorted {
            Ok(&self.rows[index])
        } else {
            let mut order: Vec<usize> = (0..self.rows.len()).collect();
            order.sort_by(|&a, &b| self.rows[a].distance.total_cmp(&self.rows[b].distance));
            Ok(&self.rows[order[index]])
        }
    }

    /// The closest row — complexity 0.
    pub fn get_closest(&self) -> VectorResult<&RankedRow> {
        self.get_by_complexity(0)
    }

    /// The farthest row — complexity 100.
    pub fn get_furthest(&self) -> VectorResult<&RankedRow> {
        self.get_by_complexity(100)
    }
}
