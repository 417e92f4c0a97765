// Chord building and ranked harmonization: thin compositions of the core.
//
// Nothing in this module adds new algebra — a chord is a selection over a
// scale lattice, a voicing is a rototranslation window, a harmonization is
// a percentile pick from a ranked modal-rototranslation matrix. The point
// of the module is the `ChordSpec` record: one explicit, documented bundle
// of the knobs that drive those compositions, passed by value instead of a
// trail of positional defaults.

use serde::{Deserialize, Serialize};

use crate::convert::intervals_to_positions;
use crate::error::VectorResult;
use crate::euclid;
use crate::interval::IntervalVector;
use crate::matrix::{CycleVector, modal_matrix, modal_rototranslation_matrix};
use crate::position::PositionVector;
use crate::rank::{calculate_distances, manhattan};
use crate::select::position_by_interval;

/// Everything that shapes a chord built from a scale. Fields apply in
/// declaration order: select, re-window, invert, reflect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordSpec {
    /// Scale degree the selection walk starts on.
    pub degree: i64,
    /// Number of tones selected. 0 selects nothing and leaves the scale
    /// unchanged.
    pub voices: usize,
    /// Scale steps between successive tones (2 = tertian stacking, 3 =
    /// quartal over a heptatonic scale).
    pub step: i64,
    /// Rototranslation window start applied after selection; 0 keeps the
    /// selected voicing.
    pub position: i64,
    /// Window length for the rototranslation; 0 keeps the selected count.
    pub post_voices: usize,
    /// Reflect the chord about the tone at this (wrapped) index, sorted
    /// ascending afterward.
    pub inversion_axis: Option<i64>,
    /// Negative-harmony reflection: map every tone `v` to
    /// `2 * axis_pitch - v` (an absolute pitch axis, not an index), sorted
    /// ascending afterward.
    pub negative_axis: Option<i64>,
}

/// Root-position tertian triad on the tonic, no re-windowing, no
/// reflection.
impl Default for ChordSpec {
    fn default() -> Self {
        ChordSpec {
            degree: 0,
            voices: 3,
            step: 2,
            position: 0,
            post_voices: 0,
            inversion_axis: None,
            negative_axis: None,
        }
    }
}

/// Build a chord from a scale lattice according to `spec`.
pub fn build_chord(scale: &PositionVector, spec: &ChordSpec) -> PositionVector {
    if scale.is_empty() {
        return scale.clone();
    }
    let criterion = IntervalVector::from_parts(
        vec![spec.step; spec.voices],
        spec.degree,
        scale.len() as i64,
    );
    let mut chord = position_by_interval(scale, &criterion, 0, spec.voices);

    if spec.position != 0 || spec.post_voices != 0 {
        chord = chord.roto_translate(spec.position, spec.post_voices);
    }
    if let Some(axis) = spec.inversion_axis {
        chord = chord.inversion(axis, true);
    }
    if let Some(axis_pitch) = spec.negative_axis {
        let mut data: Vec<i64> = chord.data().iter().map(|&v| 2 * axis_pitch - v).collect();
        data.sort_unstable();
        chord = chord.with_data(data);
    }
    chord
}

/// One mode of a scale as a scale: row `degree mod n` of the scale's modal
/// matrix (the same pitch lattice re-walked from another degree, anchored
/// on the original first note).
pub fn mode_of(scale: &PositionVector, degree: i64) -> PositionVector {
    if scale.is_empty() {
        return scale.clone();
    }
    let index = euclid::wrap_index(degree, scale.len());
    let matrix = modal_matrix(&scale.clone().into());
    match &matrix.rows[index].vector {
        CycleVector::Position(pv) => pv.clone(),
        CycleVector::Interval(iv) => intervals_to_positions(iv),
    }
}

/// Pick a harmonization of `reference` from the full mode-by-window search
/// space over `scale` and `criterion`, at the given complexity percentile.
///
/// Candidates carry as many voices as the reference; distance is Manhattan.
/// Complexity 0 is the economical voice-leading choice, 100 the most
/// dissimilar available.
pub fn harmonize(
    reference: &PositionVector,
    scale: &PositionVector,
    criterion: &IntervalVector,
    degree: i64,
    complexity: i64,
) -> VectorResult<PositionVector> {
    let matrix = modal_rototranslation_matrix(scale, criterion, degree, reference.len());
    let ranked = calculate_distances(&reference.clone().into(), &matrix, manhattan, true);
    let pick = ranked.get_by_complexity(complexity)?;
    log::debug!(
        "harmonize: complexity {complexity} -> tags {:?}, distance {}",
        pick.tags,
        pick.distance
    );
    Ok(match &pick.vector {
        CycleVector::Position(pv) => pv.clone(),
        CycleVector::Interval(iv) => intervals_to_positions(iv),
    })
}
