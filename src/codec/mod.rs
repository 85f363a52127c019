//! Per-shape encode/decode built on the grammar engine.
//!
//! Each shape has its own module with a `decode` that validates label and
//! count rules against the caller's descriptor. Encoding shares two helpers
//! here because the value itself carries everything needed to write it.

pub(crate) mod bendable;
pub(crate) mod hard_medium_soft;
pub(crate) mod hard_soft;
pub(crate) mod simple;

use crate::score::Score;
use crate::shape::{LevelLabel, ShapeKind};

/// Writes the canonical wire form of `score`.
///
/// Infallible: the shape tag, level counts, and numeric variant all live on
/// the value. Field-level validation against a descriptor happens in
/// [`encode_field`](crate::encode_field).
pub(crate) fn encode(score: &Score) -> String {
    match score.shape() {
        ShapeKind::Simple | ShapeKind::Bendable { .. } => encode_positional(score),
        ShapeKind::HardSoft | ShapeKind::HardMediumSoft => {
            // labels() is Some for every labeled shape
            encode_labeled(score, score.shape().labels().unwrap_or(&[]))
        }
    }
}

fn init_prefix(init_score: i32) -> String {
    // Canonical minimal form: a zero init score is never written.
    if init_score == 0 {
        String::new()
    } else {
        format!("{init_score}init/")
    }
}

fn encode_labeled(score: &Score, labels: &[LevelLabel]) -> String {
    let mut out = init_prefix(score.init_score());
    let parts: Vec<String> = score
        .level_values()
        .iter()
        .zip(labels)
        .map(|(value, label)| format!("{value}{label}"))
        .collect();
    out.push_str(&parts.join("/"));
    out
}

fn encode_positional(score: &Score) -> String {
    let mut out = init_prefix(score.init_score());
    let parts: Vec<String> = score
        .level_values()
        .iter()
        .map(|value| value.to_string())
        .collect();
    out.push_str(&parts.join("/"));
    out
}
