//! Codec for the one-level simple shape.

use crate::error::Result;
use crate::grammar;
use crate::score::Score;
use crate::shape::{ShapeDescriptor, ShapeKind};

/// Decodes a simple score: exactly one unlabeled level.
pub(crate) fn decode(text: &str, descriptor: &ShapeDescriptor) -> Result<Score> {
    let parsed = grammar::tokenize(text, descriptor.variant())?;
    grammar::expect_positional(&parsed, 1, ShapeKind::Simple.name())?;
    Ok(Score::from_parts(
        parsed.init_score,
        ShapeKind::Simple,
        parsed.levels,
    ))
}
