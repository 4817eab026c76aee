//! # Layer 1: Shapes
//!
//! Structural predicates over single types:
//! - `pair.rs`: `PairLike`
//! - `string.rs`: `StringViewLike`
//! - `numeric.rs`: `Numeric`
//! - `sequence.rs`: `SequenceLike<E>`

pub mod numeric;
pub mod pair;
pub mod sequence;
pub mod string;

pub use numeric::Numeric;
pub use pair::PairLike;
pub use sequence::SequenceLike;
pub use string::StringViewLike;
