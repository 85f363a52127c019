//! Codec for the bendable shape: a caller-configured number of positional
//! hard and soft levels.
//!
//! The wire form carries no level counts. The descriptor's hard/soft split
//! is authoritative: the first `hard_levels` tokens become hard levels and
//! the rest become soft levels, and the same string decodes to a different
//! (unequal) value under a descriptor with a different split.

use crate::error::{Result, ScoreTextError};
use crate::grammar;
use crate::score::Score;
use crate::shape::{ShapeDescriptor, ShapeKind};

/// Decodes a bendable score against the descriptor's level counts.
pub(crate) fn decode(text: &str, descriptor: &ShapeDescriptor) -> Result<Score> {
    let ShapeKind::Bendable {
        hard_levels,
        soft_levels,
    } = descriptor.shape()
    else {
        // Dispatch only routes bendable descriptors here.
        return Err(ScoreTextError::ShapeMismatch {
            expected: "a bendable descriptor".to_string(),
            found: descriptor.shape().to_string(),
        });
    };
    let parsed = grammar::tokenize(text, descriptor.variant())?;
    grammar::expect_positional(&parsed, hard_levels + soft_levels, descriptor.shape().name())?;
    Ok(Score::from_parts(
        parsed.init_score,
        descriptor.shape(),
        parsed.levels,
    ))
}
