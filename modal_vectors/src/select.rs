// Selection meta-operators: extract a sub-vector from a source vector under
// a criterion vector.
//
// Four operators cover every combination of {Position, Interval} source and
// {Position, Interval} criterion. A position criterion supplies indices into
// the source lattice; an interval criterion supplies steps to walk along it.
// A position source hands back lattice values (cycle term included, so deep
// indices climb through higher periods); an interval source hands back sums
// of spans.
//
// Rules shared by all four:
// - `voices > 0` fixes the output length; otherwise the criterion length is
//   used. Output may exceed either operand's length — every access is
//   cyclic, so the pattern wraps (and, for position sources, transposes by
//   the cycle term).
// - `rotation` is applied to the criterion before extraction. Position
//   criteria are translated along the source's index lattice (the degree
//   shift of the worked chord examples); interval criteria are cyclically
//   rotated.
// - An empty criterion or an empty source selects nothing to change:
//   the source is returned unchanged.
//
// Chord and scale construction, and the modal-selection matrices, are thin
// wrappers over these four functions.

use crate::arith::VectorArithmetic;
use crate::euclid;
use crate::interval::IntervalVector;
use crate::position::PositionVector;

/// Position source, position criterion: criterion values index the source
/// lattice. `result[k] = source[criterion[k] + rotation]`, all accesses
/// cyclic.
pub fn position_by_position(
    source: &PositionVector,
    criterion: &PositionVector,
    rotation: i64,
    voices: usize,
) -> PositionVector {
    if source.is_empty() || criterion.is_empty() {
        return source.clone();
    }
    let shifted = criterion.add_scalar(rotation);
    let len = output_len(voices, shifted.len());
    let data = (0..len)
        .map(|k| source.element(shifted.element(k as i64)))
        .collect();
    source.with_data(data)
}

/// Position source, interval criterion: walk cumulative sums of the rotated
/// criterion starting at the criterion's offset, reading the source lattice
/// at each stop.
pub fn position_by_interval(
    source: &PositionVector,
    criterion: &IntervalVector,
    rotation: i64,
    voices: usize,
) -> PositionVector {
    if source.is_empty() || criterion.is_empty() {
        return source.clone();
    }
    let rotated = criterion.rotate(rotation, 0);
    let len = output_len(voices, rotated.len());
    let mut cursor = rotated.offset();
    let mut data = Vec::with_capacity(len);
    for k in 0..len {
        data.push(source.element(cursor));
        cursor += rotated.element(k as i64);
    }
    source.with_data(data)
}

/// Interval source, interval criterion: each rotated criterion value `i_k`
/// groups `i_k` consecutive cyclic source intervals into one output
/// interval (their sum), advancing a running cursor. Negative `i_k` groups
/// backward with negated sign.
///
/// The output offset re-anchors the result where the criterion's offset
/// points: `source.offset + sum of the first criterion.offset source
/// intervals`.
pub fn interval_by_interval(
    source: &IntervalVector,
    criterion: &IntervalVector,
    rotation: i64,
    voices: usize,
) -> IntervalVector {
    if source.is_empty() || criterion.is_empty() {
        return source.clone();
    }
    let rotated = criterion.rotate(rotation, 0);
    let len = output_len(voices, rotated.len());
    let offset = source.offset() + source.prefix_sum(criterion.offset());
    let mut cursor = criterion.offset();
    let mut data = Vec::with_capacity(len);
    for k in 0..len {
        let step = rotated.element(k as i64);
        data.push(span_sum(source, cursor, step));
        cursor += step;
    }
    IntervalVector::from_parts(data, offset, source.modulus())
}

/// Interval source, position criterion: each consecutive pair of translated
/// criterion positions `(p_k, p_{k+1})` delimits a cyclic span of source
/// intervals; the output interval is that span's sum. The wrap-aware span
/// length is `(p_{k+1} - p_k) mod n`, corrected to a full period when the
/// endpoints coincide.
///
/// The output offset is anchored at the *unrotated* first criterion
/// position. That matches the ported behavior even when `rotation` or
/// `voices` changes which pair is effectively first; see the regression
/// test below before changing it.
pub fn interval_by_position(
    source: &IntervalVector,
    criterion: &PositionVector,
    rotation: i64,
    voices: usize,
) -> IntervalVector {
    if source.is_empty() || criterion.is_empty() {
        return source.clone();
    }
    let shifted = criterion.add_scalar(rotation);
    let len = output_len(voices, shifted.len());
    let n = source.len() as i64;
    let offset = source.offset() + source.prefix_sum(criterion.data()[0]);
    let mut data = Vec::with_capacity(len);
    for k in 0..len {
        let start = shifted.element(k as i64);
        let end = shifted.element(k as i64 + 1);
        let mut span = euclid::rem_unchecked(end - start, n);
        if span == 0 {
            span = n;
        }
        data.push(span_sum(source, start, span));
    }
    IntervalVector::from_parts(data, offset, source.modulus())
}

fn output_len(voices: usize, criterion_len: usize) -> usize {
    if voices > 0 { voices } else { criterion_len }
}

/// Sum `count` consecutive cyclic source intervals starting at `start`.
/// Negative `count` sums the `|count|` intervals left of `start`, negated
/// (walking backward undoes those steps).
fn span_sum(source: &IntervalVector, start: i64, count: i64) -> i64 {
    if count >= 0 {
        (0..count).map(|j| source.element(start + j)).sum()
    } else {
        -((count..0).map(|j| source.element(start + j)).sum::<i64>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c_major() -> PositionVector {
        PositionVector::new(vec![0, 2, 4, 5, 7, 9, 11], 12).unwrap()
    }

    /// Stored step pattern of the major scale plus the wrap step, in
    /// semitones, as a full seven-step cycle.
    fn c_major_steps() -> IntervalVector {
        IntervalVector::new(vec![2, 2, 1, 2, 2, 2, 1], 0, 12).unwrap()
    }

    #[test]
    fn test_position_by_position_triads() {
        let source = c_major();
        let criterion = PositionVector::new(vec![0, 2, 4], 12).unwrap();
        // Degree 0: C-E-G.
        let tonic = position_by_position(&source, &criterion, 0, 0);
        assert_eq!(tonic.data(), &[0, 4, 7]);
        // Degree 1: D-F-A.
        let second = position_by_position(&source, &criterion, 1, 0);
        assert_eq!(second.data(), &[2, 5, 9]);
        assert_eq!(second.modulus(), 12);
    }

    #[test]
    fn test_position_by_position_voices_climb() {
        let source = c_major();
        // Degree indices with the heptatonic modulus so extra voices climb
        // by sevenths of the index lattice, i.e. by octaves of the source.
        let criterion = PositionVector::new(vec![0, 2, 4], 7).unwrap();
        let spread = position_by_position(&source, &criterion, 0, 5);
        // C-E-G, then the criterion wraps one index cycle up: C'-E'.
        assert_eq!(spread.data(), &[0, 4, 7, 12, 16]);
    }

    #[test]
    fn test_position_by_interval_walk() {
        let source = c_major();
        // Stacked thirds in index space, anchored at index 0.
        let criterion = IntervalVector::new(vec![2, 2], 0, 7).unwrap();
        let triad = position_by_interval(&source, &criterion, 0, 0);
        assert_eq!(triad.data(), &[0, 4]);
        // Three voices: the walk keeps stepping cyclically through the
        // criterion, closing the triad.
        let triad = position_by_interval(&source, &criterion, 0, 3);
        assert_eq!(triad.data(), &[0, 4, 7]);
        // Anchor at index 1 instead: D-F-A.
        let mut shifted = criterion.clone();
        shifted.set_offset(1);
        let second = position_by_interval(&source, &shifted, 0, 3);
        assert_eq!(second.data(), &[2, 5, 9]);
    }

    #[test]
    fn test_position_by_interval_rotation() {
        let source = c_major();
        // A full triad cycle in index space: up two thirds, back a fifth.
        let criterion = IntervalVector::new(vec![2, 2, -4], 0, 7).unwrap();
        // Rotation 2 starts the walk pattern at the descending step.
        let rotated = position_by_interval(&source, &criterion, 2, 3);
        assert_eq!(rotated.data(), &[0, source.element(-4), source.element(-2)]);
        // Index -4 is G of the octave below (7 - 12), index -2 is A below.
        assert_eq!(rotated.data(), &[0, -7, -3]);
    }

    #[test]
    fn test_interval_by_interval_grouping() {
        let steps = c_major_steps();
        // Group scale steps two at a time: thirds of the scale in semitones.
        let criterion = IntervalVector::new(vec![2, 2, 2], 0, 7).unwrap();
        let thirds = interval_by_interval(&steps, &criterion, 0, 0);
        // C->E = 4, E->G = 3, G->B = 4.
        assert_eq!(thirds.data(), &[4, 3, 4]);
        assert_eq!(thirds.offset(), 0);
        assert_eq!(thirds.modulus(), 12);
    }

    #[test]
    fn test_interval_by_interval_offset_propagation() {
        let steps = c_major_steps();
        let mut criterion = IntervalVector::new(vec![2, 2], 0, 7).unwrap();
        // Anchoring the criterion at step 1 re-anchors the output a major
        // second up (the first source interval).
        criterion.set_offset(1);
        let thirds = interval_by_interval(&steps, &criterion, 0, 0);
        // D->F = 3, F->A = 4.
        assert_eq!(thirds.data(), &[3, 4]);
        assert_eq!(thirds.offset(), 2);
    }

    #[test]
    fn test_interval_by_position_spans() {
        let steps = c_major_steps();
        // Span endpoints at scale indices 0, 2, 4: triad intervals.
        let criterion = PositionVector::new(vec![0, 2, 4], 7).unwrap();
        let spans = interval_by_position(&steps, &criterion, 0, 0);
        // C->E = 4, E->G = 3, and the wrap pair (4 -> 0+range) closes the
        // octave: G->C' = 5.
        assert_eq!(spans.data(), &[4, 3, 5]);
        assert_eq!(spans.offset(), 0);
    }

    #[test]
    fn test_interval_by_position_offset_uses_unrotated_first_position() {
        // Regression pin: the output offset tracks criterion.data()[0], not
        // the rotated first element. A rotation shifts every span but the
        // anchor stays where the unrotated criterion pointed.
        let steps = c_major_steps();
        let criterion = PositionVector::new(vec![2, 4, 6], 7).unwrap();
        let unrotated = interval_by_position(&steps, &criterion, 0, 0);
        let rotated = interval_by_position(&steps, &criterion, 1, 0);
        // Anchor: sum of the first two scale steps = 4 semitones, for both.
        assert_eq!(unrotated.offset(), 4);
        assert_eq!(rotated.offset(), 4);
        assert_ne!(unrotated.data(), rotated.data());
    }

    #[test]
    fn test_empty_criterion_returns_source() {
        let source = c_major();
        let empty_pos = PositionVector::new(vec![], 12).unwrap();
        let empty_iv = IntervalVector::new(vec![], 0, 12).unwrap();
        assert_eq!(position_by_position(&source, &empty_pos, 3, 5), source);
        assert_eq!(position_by_interval(&source, &empty_iv, 3, 5), source);

        let steps = c_major_steps();
        assert_eq!(interval_by_interval(&steps, &empty_iv, 0, 0), steps);
        assert_eq!(interval_by_position(&steps, &empty_pos, 0, 0), steps);
    }

    #[test]
    fn test_empty_source_returns_source() {
        let empty = PositionVector::new(vec![], 12).unwrap();
        let criterion = PositionVector::new(vec![0, 2, 4], 12).unwrap();
        assert_eq!(position_by_position(&empty, &criterion, 0, 0), empty);

        let empty_iv = IntervalVector::new(vec![], 0, 12).unwrap();
        assert_eq!(interval_by_position(&empty_iv, &criterion, 0, 0), empty_iv);
    }
}
