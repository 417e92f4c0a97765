// Modal Vectors
//
// A library for pitch-class-set and rhythm manipulation under modular
// arithmetic. A musical object is held in whichever of three equivalent
// views suits the operation — absolute positions, relative intervals, or a
// binary presence pattern — and every transformation (rotation, inversion,
// windowed extraction, transposition) agrees across views.
//
// Architecture, leaves first:
// - error.rs: error taxonomy (zero divisors, domain violations, empty
//   matrices) — everything else reports through it
// - euclid.rs: Euclidean division with non-negative remainders; the single
//   primitive every cyclic index routes through
// - position.rs / interval.rs / binary.rs: the three container views, each
//   with total cyclic access (positions accumulate a per-cycle range term,
//   intervals and patterns wrap flat)
// - arith.rs: named componentwise arithmetic shared across containers
// - convert.rs: pure conversions between the views
// - select.rs: the four selection meta-operators (source x criterion over
//   positions and intervals) — the building block for chords and scales
// - matrix.rs: family generators (modal, transposition, rototranslation,
//   modal selection, modal rototranslation) and note-content filters
// - rank.rs: distance scoring against a reference and the 0-100 complexity
//   percentile pick
// - chord.rs: chord building and ranked harmonization as thin compositions
//   of the above
//
// The whole crate is purely functional over immutable values: every
// operation returns a fresh vector, matrix sizes are fixed up front, and
// there is no I/O or shared state anywhere.

pub mod arith;
pub mod binary;
pub mod chord;
pub mod convert;
pub mod error;
pub mod euclid;
pub mod interval;
pub mod matrix;
pub mod position;
pub mod rank;
pub mod select;

pub use arith::VectorArithmetic;
pub use binary::BinaryVector;
pub use error::{VectorError, VectorResult};
pub use interval::IntervalVector;
pub use matrix::{CycleVector, MatrixRow, VectorMatrix};
pub use position::{PositionVector, RangeSpec};
pub use rank::{RankedMatrix, RankedRow};
