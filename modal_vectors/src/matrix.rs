// Matrix generators: enumerate whole families of transformed vectors.
//
// A matrix here is an ordered list of tagged rows — every rotation of a
// scale, every transposition of a chord, every positional window around a
// voicing — produced eagerly and handed to the ranking engine (rank.rs) or
// filtered down by note content. Rows hold either vector kind through
// `CycleVector`, so the filtering and ranking logic exists once rather than
// once per container.
//
// Sizes are fixed up front by the modulus, the vector length, or an explicit
// window parameter; nothing here is unbounded.

use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::convert::{intervals_to_positions, positions_to_intervals};
use crate::euclid;
use crate::interval::IntervalVector;
use crate::position::PositionVector;
use crate::select::position_by_interval;

/// Either vector kind, with the shared cyclic-access surface. Matrix rows
/// and the ranking engine work against this, not against a concrete
/// container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CycleVector {
    Position(PositionVector),
    Interval(IntervalVector),
}

impl CycleVector {
    pub fn len(&self) -> usize {
        match self {
            CycleVector::Position(pv) => pv.len(),
            CycleVector::Interval(iv) => iv.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn modulus(&self) -> i64 {
        match self {
            CycleVector::Position(pv) => pv.modulus(),
            CycleVector::Interval(iv) => iv.modulus(),
        }
    }

    /// Total cyclic access with each kind's own indexing rule (cycle term
    /// for positions, flat wrap for intervals).
    pub fn element(&self, index: i64) -> i64 {
        match self {
            CycleVector::Position(pv) => pv.element(index),
            CycleVector::Interval(iv) => iv.element(index),
        }
    }

    pub fn as_position(&self) -> Option<&PositionVector> {
        match self {
            CycleVector::Position(pv) => Some(pv),
            CycleVector::Interval(_) => None,
        }
    }

    pub fn as_interval(&self) -> Option<&IntervalVector> {
        match self {
            CycleVector::Interval(iv) => Some(iv),
            CycleVector::Position(_) => None,
        }
    }

    /// Whether the vector's realized positions contain `note`, compared
    /// modulo the vector's own modulus. Interval rows are realized through
    /// their position walk first.
    pub fn contains_note(&self, note: i64) -> bool {
        match self {
            CycleVector::Position(pv) => pv.contains_note(note),
            CycleVector::Interval(iv) => intervals_to_positions(iv).contains_note(note),
        }
    }
}

impl From<PositionVector> for CycleVector {
    fn from(pv: PositionVector) -> Self {
        CycleVector::Position(pv)
    }
}

impl From<IntervalVector> for CycleVector {
    fn from(iv: IntervalVector) -> Self {
        CycleVector::Interval(iv)
    }
}

/// Row tags. Simple generators tag each row once (rotation amount,
/// transposition step, window index); composed generators add a second tag,
/// so two slots live inline.
pub type RowTags = SmallVec<[i64; 2]>;

/// One tagged row of a generated matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixRow {
    pub vector: CycleVector,
    pub tags: RowTags,
}

impl MatrixRow {
    pub fn new(vector: CycleVector, tag: i64) -> Self {
        MatrixRow {
            vector,
            tags: smallvec![tag],
        }
    }

    /// The primary tag (rotation / transposition / window index, or the
    /// mode index for composed matrices).
    pub fn tag(&self) -> i64 {
        self.tags[0]
    }
}

/// An ordered family of tagged vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorMatrix {
    pub rows: Vec<MatrixRow>,
    /// Window center for rototranslation matrices; 0 for everything else.
    pub center: i64,
}

impl VectorMatrix {
    pub fn new(rows: Vec<MatrixRow>) -> Self {
        VectorMatrix { rows, center: 0 }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// All `n` modal rotations of a vector, tag = rotation amount.
///
/// Interval input rotates directly. Position input must rotate in interval
/// space to preserve melodic shape: the stored steps are closed into a full
/// cycle with the implied wrap step (`first + range - last`), rotated, and
/// walked back into positions from the original first note. Every row keeps
/// the source's modulus.
pub fn modal_matrix(vector: &CycleVector) -> VectorMatrix {
    match vector {
        CycleVector::Interval(iv) => {
            let rows = (0..iv.len() as i64)
                .map(|r| MatrixRow::new(iv.rotate(r, 0).into(), r))
                .collect();
            VectorMatrix::new(rows)
        }
        CycleVector::Position(pv) => {
            let n = pv.len();
            if n == 0 {
                return VectorMatrix::new(Vec::new());
            }
            let stored = positions_to_intervals(pv);
            let wrap = pv.data()[0] + pv.range().abs() - pv.data()[n - 1];
            let mut cycle = stored.data().to_vec();
            cycle.push(wrap);
            let anchor = pv.data()[0];

            let rows = (0..n as i64)
                .map(|r| {
                    let mut data = Vec::with_capacity(n);
                    let mut current = anchor;
                    data.push(current);
                    // Walk n - 1 rotated steps; the wrap step is implied.
                    for k in 0..n as i64 - 1 {
                        current += cycle[euclid::wrap_index(r + k, n)];
                        data.push(current);
                    }
                    MatrixRow::new(pv.with_data(data).into(), r)
                })
                .collect();
            VectorMatrix::new(rows)
        }
    }
}

/// The `modulus` transpositions `(pv + i) mod modulus`, sorted ascending,
/// tag = i.
pub fn transposition_matrix(pv: &PositionVector) -> VectorMatrix {
    use crate::arith::VectorArithmetic;

    let rows = (0..pv.modulus())
        .map(|i| MatrixRow::new(pv.add_scalar(i).reduced_sorted().into(), i))
        .collect();
    VectorMatrix::new(rows)
}

/// Windowed extractions `roto_translate(i)` for `i` in
/// `[center - n, center + n]` (`n` = vector length), tag = i. `center` is
/// retained on the matrix.
pub fn rototranslation_matrix(pv: &PositionVector, center: i64) -> VectorMatrix {
    let n = pv.len() as i64;
    let rows = (center - n..=center + n)
        .map(|i| MatrixRow::new(pv.roto_translate(i, 0).into(), i))
        .collect();
    VectorMatrix { rows, center }
}

/// One chord per mode of the criterion: for mode `r`, walk the rotated
/// criterion steps over the source lattice starting at index
/// `criterion.offset + degree`. The tag re-labels each row with the source
/// degree its chord is built on: `(degree - prefix_r) mod source.len()`,
/// where `prefix_r` is the sum of the first `r` criterion steps (mode `r`
/// reaches the same pitch content `prefix_r` degrees higher).
pub fn modal_selection_matrix(
    source: &PositionVector,
    criterion: &IntervalVector,
    degree: i64,
    voices: usize,
) -> VectorMatrix {
    if source.is_empty() {
        return VectorMatrix::new(Vec::new());
    }
    let modes = modal_matrix(&criterion.clone().into());
    let rows = modes
        .rows
        .into_iter()
        .map(|mode_row| {
            let r = mode_row.tag();
            let mut mode = mode_row
                .vector
                .as_interval()
                .cloned()
                .unwrap_or_else(|| criterion.clone());
            mode.set_offset(criterion.offset() + degree);
            let chord = position_by_interval(source, &mode, 0, voices);
            let tag = euclid::rem_unchecked(
                degree - criterion.prefix_sum(r),
                source.len() as i64,
            );
            MatrixRow::new(chord.into(), tag)
        })
        .collect();
    VectorMatrix::new(rows)
}

/// The full mode × window search space: a rototranslation matrix (center 0)
/// of every modal-selection chord, flattened into one matrix. Each row is
/// tagged `[mode_degree_tag, window_index]`, so a ranked pick can be traced
/// back to both the mode and the voicing window that produced it.
pub fn modal_rototranslation_matrix(
    source: &PositionVector,
    criterion: &IntervalVector,
    degree: i64,
    voices: usize,
) -> VectorMatrix {
    let selection = modal_selection_matrix(source, criterion, degree, voices);
    let mut rows = Vec::new();
    for row in &selection.rows {
        let Some(chord) = row.vector.as_position() else {
            continue;
        };
        let windows = rototranslation_matrix(chord, 0);
        for window_row in windows.rows {
            let window_tag = window_row.tag();
            rows.push(MatrixRow {
                vector: window_row.vector,
                tags: smallvec![row.tag(), window_tag],
            });
        }
    }
    log::debug!(
        "modal rototranslation: {} modes x windows -> {} rows",
        selection.len(),
        rows.len()
    );
    VectorMatrix::new(rows)
}

fn row_contains_all(row: &MatrixRow, notes: &[i64]) -> bool {
    notes.iter().all(|&note| row.vector.contains_note(note))
}

/// Keep only the modal-matrix rows whose realized data contains every note
/// in `notes` (modulo each row's own modulus). Non-destructive form.
pub fn filter_modal_matrix(matrix: &VectorMatrix, notes: &[i64]) -> VectorMatrix {
    VectorMatrix {
        rows: matrix
            .rows
            .iter()
            .filter(|row| row_contains_all(row, notes))
            .cloned()
            .collect(),
        center: matrix.center,
    }
}

/// In-place form of [`filter_modal_matrix`].
pub fn filter_modal_matrix_in_place(matrix: &mut VectorMatrix, notes: &[i64]) {
    matrix.rows.retain(|row| row_contains_all(row, notes));
}

/// Keep only the transposition-matrix rows containing every note in
/// `notes`. Same containment rule as the modal filter; kept as a separate
/// entry point because callers filter the two matrix families at different
/// stages.
pub fn filter_transposition_matrix(matrix: &VectorMatrix, notes: &[i64]) -> VectorMatrix {
    filter_modal_matrix(matrix, notes)
}

/// In-place form of [`filter_transposition_matrix`].
pub fn filter_transposition_matrix_in_place(matrix: &mut VectorMatrix, notes: &[i64]) {
    filter_modal_matrix_in_place(matrix, notes);
}
