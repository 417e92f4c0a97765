// Conversions between the three views of a cyclic musical object.
//
// Positions, intervals, and presence patterns describe the same thing from
// different angles, and the engine moves between them constantly: modal
// rotation happens in interval space, selection lands back in position
// space, rhythm tools read the binary view. The conversions are pure and —
// apart from the wrap-around interval, which is implied by the modulus
// rather than stored — lossless: positions -> intervals -> positions is an
// exact round trip.

use crate::binary::BinaryVector;
use crate::interval::IntervalVector;
use crate::position::PositionVector;

/// Consecutive deltas of a position vector, with the first position kept as
/// the offset. The wrap-around interval (last note back to the first, one
/// cycle up) is not stored; it is implied by the modulus.
///
/// An empty input yields an empty interval vector with offset 0.
pub fn positions_to_intervals(pv: &PositionVector) -> IntervalVector {
    let data = pv.data();
    let intervals = data.windows(2).map(|w| w[1] - w[0]).collect();
    let offset = data.first().copied().unwrap_or(0);
    IntervalVector::from_parts(intervals, offset, pv.modulus())
}

/// The inverse walk: start at the interval vector's offset and accumulate.
/// `n` intervals yield `n + 1` positions (a zero-step walk still visits its
/// starting point), undoing [`positions_to_intervals`] exactly.
pub fn intervals_to_positions(iv: &IntervalVector) -> PositionVector {
    let mut positions = Vec::with_capacity(iv.len() + 1);
    let mut current = iv.offset();
    positions.push(current);
    for &step in iv.data() {
        current += step;
        positions.push(current);
    }
    PositionVector::from_parts(positions, iv.modulus(), crate::position::RangeSpec::Auto)
}

/// Occupancy rendering: one period of length `range`, slot `p - min(data)`
/// set for every stored position, anchored at `offset = min(data)`.
///
/// The derived range is strictly greater than the span, so every normalized
/// position lands inside the period. An empty input renders an empty period
/// of zeros (one modulus worth of silence) at offset 0.
pub fn positions_to_binary(pv: &PositionVector) -> BinaryVector {
    let range = pv.range().abs();
    let Some(&min) = pv.data().iter().min() else {
        return BinaryVector::from_parts(vec![0; range as usize], 0, pv.modulus());
    };
    let mut slots = vec![0i64; range as usize];
    for &p in pv.data() {
        slots[(p - min) as usize] = 1;
    }
    BinaryVector::from_parts(slots, min, pv.modulus())
}
