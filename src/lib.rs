//! Canonical text codec for constraint-solver score values.
//!
//! A score ranks one candidate solution: an init score (how many mandatory
//! setup constraints remain unsatisfied) plus one or more signed levels in
//! priority order. This crate converts every supported score shape to its
//! canonical string form (`"-2init/0hard/-5soft"`, `"-1/-2/-3"`, `"42"`)
//! and parses those strings back with exact round-trip fidelity, rejecting
//! malformed input with precise diagnostics.
//!
//! The codec is a pure, synchronous function library: no I/O, no shared
//! state, safe to call from any number of threads.
//!
//! # Examples
//!
//! ```
//! use scorefmt::{decode_field, encode_field, Score, ShapeDescriptor};
//!
//! let descriptor = ShapeDescriptor::hard_soft();
//! let score = Score::hard_soft(0, -5).with_init(-2);
//!
//! let text = encode_field(&score, &descriptor)?;
//! assert_eq!(text, "-2init/0hard/-5soft");
//! assert_eq!(decode_field(&text, &descriptor)?, score);
//! # Ok::<(), scorefmt::ScoreTextError>(())
//! ```
//!
//! Bendable scores have caller-configured level counts. The wire form does
//! not embed them, so the descriptor decides the hard/soft split:
//!
//! ```
//! use scorefmt::{decode_field, Score, ShapeDescriptor};
//!
//! let score = decode_field("-1/-2/-3", &ShapeDescriptor::bendable(2, 1))?;
//! assert_eq!(score, Score::bendable(vec![-1, -2], vec![-3]));
//! # Ok::<(), scorefmt::ScoreTextError>(())
//! ```

mod codec;
mod grammar;

pub mod dispatch;
pub mod error;
pub mod level;
pub mod score;
pub mod shape;

#[cfg(feature = "serde")]
pub mod serde_support;

#[cfg(test)]
mod tests;

pub use dispatch::{decode_field, encode_field};
pub use error::{Result, ScoreTextError};
pub use level::{LevelValue, LevelVec};
pub use score::Score;
pub use shape::{LevelLabel, NumericVariant, ShapeDescriptor, ShapeKind};

#[cfg(feature = "serde")]
pub use serde_support::ScoreSeed;
