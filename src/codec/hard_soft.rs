//! Codec for the two-level hard/soft shape.

use crate::error::Result;
use crate::grammar;
use crate::score::Score;
use crate::shape::{LevelLabel, ShapeDescriptor, ShapeKind};

const LABELS: &[LevelLabel] = &[LevelLabel::Hard, LevelLabel::Soft];

/// Decodes a hard/soft score: two levels labeled `hard` then `soft`.
pub(crate) fn decode(text: &str, descriptor: &ShapeDescriptor) -> Result<Score> {
    let parsed = grammar::tokenize(text, descriptor.variant())?;
    grammar::expect_labels(&parsed, LABELS, ShapeKind::HardSoft.name())?;
    Ok(Score::from_parts(
        parsed.init_score,
        ShapeKind::HardSoft,
        parsed.levels,
    ))
}
