//! Codec for the three-level hard/medium/soft shape.

use crate::error::Result;
use crate::grammar;
use crate::score::Score;
use crate::shape::{LevelLabel, ShapeDescriptor, ShapeKind};

const LABELS: &[LevelLabel] = &[LevelLabel::Hard, LevelLabel::Medium, LevelLabel::Soft];

/// Decodes a hard/medium/soft score: three levels labeled in that order.
pub(crate) fn decode(text: &str, descriptor: &ShapeDescriptor) -> Result<Score> {
    let parsed = grammar::tokenize(text, descriptor.variant())?;
    grammar::expect_labels(&parsed, LABELS, ShapeKind::HardMediumSoft.name())?;
    Ok(Score::from_parts(
        parsed.init_score,
        ShapeKind::HardMediumSoft,
        parsed.levels,
    ))
}
