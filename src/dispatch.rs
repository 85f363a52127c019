//! Field-level entry points for document-serialization frameworks.
//!
//! These two functions are the codec's integration surface: a framework
//! invokes them once per field occurrence. They are stateless, perform no
//! I/O, and may run concurrently without coordination. The shape-to-codec
//! mapping is a total, exhaustive `match`: adding a shape is a
//! compile-checked change, and there is no default or fallback arm.

use tracing::trace;

use crate::codec;
use crate::error::{Result, ScoreTextError};
use crate::score::Score;
use crate::shape::{ShapeDescriptor, ShapeKind};

/// Encodes `score` as a canonical string for a field declared with
/// `descriptor`.
///
/// The value must actually belong to the field: a different shape tag (or a
/// different bendable split) fails with
/// [`ScoreTextError::ShapeMismatch`], and a numeric variant the field's
/// wire format cannot represent fails with
/// [`ScoreTextError::UnencodableValue`]. The output never includes an init
/// segment when the init score is 0.
///
/// # Examples
///
/// ```
/// use scorefmt::{encode_field, Score, ShapeDescriptor};
///
/// let descriptor = ShapeDescriptor::hard_soft();
/// let text = encode_field(&Score::hard_soft(-999, -999), &descriptor)?;
/// assert_eq!(text, "-999hard/-999soft");
/// # Ok::<(), scorefmt::ScoreTextError>(())
/// ```
pub fn encode_field(score: &Score, descriptor: &ShapeDescriptor) -> Result<String> {
    check_encodable(score, descriptor)?;
    let text = codec::encode(score);
    trace!(shape = descriptor.shape().name(), text = %text, "encoded score field");
    Ok(text)
}

/// Decodes a canonical string for a field declared with `descriptor`.
///
/// # Examples
///
/// ```
/// use scorefmt::{decode_field, Score, ShapeDescriptor};
///
/// let descriptor = ShapeDescriptor::bendable(2, 1);
/// let score = decode_field("-1/-2/-3", &descriptor)?;
/// assert_eq!(score, Score::bendable(vec![-1, -2], vec![-3]));
/// # Ok::<(), scorefmt::ScoreTextError>(())
/// ```
pub fn decode_field(text: &str, descriptor: &ShapeDescriptor) -> Result<Score> {
    let score = match descriptor.shape() {
        ShapeKind::Simple => codec::simple::decode(text, descriptor)?,
        ShapeKind::HardSoft => codec::hard_soft::decode(text, descriptor)?,
        ShapeKind::HardMediumSoft => codec::hard_medium_soft::decode(text, descriptor)?,
        ShapeKind::Bendable { .. } => codec::bendable::decode(text, descriptor)?,
    };
    trace!(shape = descriptor.shape().name(), "decoded score field");
    Ok(score)
}

fn check_encodable(score: &Score, descriptor: &ShapeDescriptor) -> Result<()> {
    if score.shape() != descriptor.shape() {
        return Err(ScoreTextError::ShapeMismatch {
            expected: descriptor.shape().to_string(),
            found: score.shape().to_string(),
        });
    }
    if score.variant() != descriptor.variant() {
        return Err(ScoreTextError::UnencodableValue {
            reason: format!(
                "{} levels cannot be written to a field declared {}",
                score.variant(),
                descriptor.variant()
            ),
        });
    }
    if score.levels().is_empty() {
        // A zero-level bendable value has no canonical form: the grammar
        // requires at least one level token.
        return Err(ScoreTextError::UnencodableValue {
            reason: "a score with zero levels has no canonical form".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_shape_mismatch() {
        let err = encode_field(&Score::simple(1), &ShapeDescriptor::hard_soft()).unwrap_err();
        assert!(matches!(err, ScoreTextError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_encode_bendable_split_mismatch() {
        let score = Score::bendable(vec![-1], vec![-2, -3]);
        let err = encode_field(&score, &ShapeDescriptor::bendable(2, 1)).unwrap_err();
        assert!(matches!(err, ScoreTextError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_encode_variant_mismatch_is_unencodable() {
        let score = Score::hard_soft(0, -5);
        let err = encode_field(&score, &ShapeDescriptor::hard_soft().decimal()).unwrap_err();
        assert!(matches!(err, ScoreTextError::UnencodableValue { .. }));
    }

    #[test]
    fn test_encode_zero_level_bendable_is_unencodable() {
        let score = Score::bendable(vec![], vec![]);
        let err = encode_field(&score, &ShapeDescriptor::bendable(0, 0)).unwrap_err();
        assert!(matches!(err, ScoreTextError::UnencodableValue { .. }));
    }

    #[test]
    fn test_decode_routes_by_descriptor_shape() {
        assert_eq!(
            decode_field("42", &ShapeDescriptor::simple()).unwrap(),
            Score::simple(42)
        );
        assert_eq!(
            decode_field("0hard/0medium/-1soft", &ShapeDescriptor::hard_medium_soft()).unwrap(),
            Score::hard_medium_soft(0, 0, -1)
        );
    }
}
