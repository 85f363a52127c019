//! Cross-shape scenario tests for the codec as a whole.

use rust_decimal::Decimal;

use crate::{decode_field, encode_field, Score, ScoreTextError, ShapeDescriptor};

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

// ============================================================================
// Round-trip law: decode(encode(v), descriptor(v)) == v
// ============================================================================

mod round_trip {
    use super::*;

    fn assert_round_trip(score: Score) {
        let descriptor = score.descriptor();
        let text = encode_field(&score, &descriptor).unwrap();
        assert_eq!(
            decode_field(&text, &descriptor).unwrap(),
            score,
            "round trip through '{text}'"
        );
    }

    #[test]
    fn test_simple() {
        assert_round_trip(Score::simple(0));
        assert_round_trip(Score::simple(42));
        assert_round_trip(Score::simple(-7));
        assert_round_trip(Score::simple(i64::MIN));
        assert_round_trip(Score::simple(i64::MAX));
        assert_round_trip(Score::simple(3).with_init(-1));
    }

    #[test]
    fn test_hard_soft() {
        assert_round_trip(Score::hard_soft(0, 0));
        assert_round_trip(Score::hard_soft(-999, -999));
        assert_round_trip(Score::hard_soft(0, -5).with_init(-2));
    }

    #[test]
    fn test_hard_medium_soft() {
        assert_round_trip(Score::hard_medium_soft(0, -20, -300));
        assert_round_trip(Score::hard_medium_soft(-1, 0, 1).with_init(-4));
    }

    #[test]
    fn test_bendable() {
        assert_round_trip(Score::bendable(vec![-1, -2], vec![-3]));
        assert_round_trip(Score::bendable(vec![0], vec![0]));
        assert_round_trip(Score::bendable(vec![], vec![-5, -6]));
        assert_round_trip(Score::bendable(vec![-1], vec![]));
        assert_round_trip(Score::bendable(vec![1, 2, 3], vec![4, 5]).with_init(-9));
    }

    #[test]
    fn test_decimal_variants() {
        assert_round_trip(Score::simple_decimal(dec("-0.5")));
        assert_round_trip(Score::hard_soft_decimal(dec("-30.5"), dec("-208.25")));
        assert_round_trip(Score::hard_medium_soft_decimal(
            dec("0"),
            dec("-1.001"),
            dec("2.50"),
        ));
        assert_round_trip(Score::bendable_decimal(
            vec![dec("-1.5")],
            vec![dec("0.25"), dec("-3")],
        ));
    }
}

// ============================================================================
// Concrete wire-format scenarios
// ============================================================================

mod scenarios {
    use super::*;

    #[test]
    fn test_hard_soft_negatives() {
        let score = Score::hard_soft(-999, -999);
        assert_eq!(
            encode_field(&score, &ShapeDescriptor::hard_soft()).unwrap(),
            "-999hard/-999soft"
        );
    }

    #[test]
    fn test_hard_soft_with_init() {
        let score = Score::hard_soft(0, -5).with_init(-2);
        assert_eq!(
            encode_field(&score, &ShapeDescriptor::hard_soft()).unwrap(),
            "-2init/0hard/-5soft"
        );
    }

    #[test]
    fn test_bendable_positional() {
        let score = Score::bendable(vec![-1, -2], vec![-3]);
        assert_eq!(
            encode_field(&score, &ShapeDescriptor::bendable(2, 1)).unwrap(),
            "-1/-2/-3"
        );
        assert_eq!(
            decode_field("-1/-2/-3", &ShapeDescriptor::bendable(2, 1)).unwrap(),
            score
        );
    }

    #[test]
    fn test_simple_plain_number() {
        assert_eq!(
            encode_field(&Score::simple(42), &ShapeDescriptor::simple()).unwrap(),
            "42"
        );
    }

    #[test]
    fn test_zero_levels_are_written() {
        // A level of exactly 0 is written as "0", never omitted.
        assert_eq!(
            encode_field(&Score::hard_soft(0, 0), &ShapeDescriptor::hard_soft()).unwrap(),
            "0hard/0soft"
        );
    }
}

// ============================================================================
// Canonical minimality: init segment only when init != 0
// ============================================================================

mod canonical_minimality {
    use super::*;

    #[test]
    fn test_zero_init_never_emitted() {
        let text = encode_field(&Score::hard_soft(-1, -2), &ShapeDescriptor::hard_soft()).unwrap();
        assert!(!text.contains("init"), "got '{text}'");
    }

    #[test]
    fn test_explicit_zero_init_still_decodes() {
        let descriptor = ShapeDescriptor::hard_soft();
        let score = decode_field("0init/-1hard/-2soft", &descriptor).unwrap();
        assert_eq!(score, Score::hard_soft(-1, -2));
        // Re-encoding produces the minimal form.
        assert_eq!(encode_field(&score, &descriptor).unwrap(), "-1hard/-2soft");
    }
}

// ============================================================================
// Shape rejection
// ============================================================================

mod shape_rejection {
    use super::*;

    #[test]
    fn test_two_levels_against_three_level_descriptor() {
        assert!(matches!(
            decode_field("-1hard/-2soft", &ShapeDescriptor::hard_medium_soft()),
            Err(ScoreTextError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_bendable_dimensionality() {
        assert!(matches!(
            decode_field("-1/-2/-3", &ShapeDescriptor::bendable(1, 1)),
            Err(ScoreTextError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_bendable_same_total_different_split_is_distinct() {
        let a = decode_field("-1/-2/-3", &ShapeDescriptor::bendable(2, 1)).unwrap();
        let b = decode_field("-1/-2/-3", &ShapeDescriptor::bendable(1, 2)).unwrap();
        assert_ne!(a, b);
    }
}

// ============================================================================
// Malformed input rejection
// ============================================================================

mod malformed_rejection {
    use super::*;

    #[test]
    fn test_rejections_against_hard_soft() {
        let descriptor = ShapeDescriptor::hard_soft();
        for text in ["", "hard/5soft", "5", "-5hard//3soft"] {
            assert!(
                matches!(
                    decode_field(text, &descriptor),
                    Err(ScoreTextError::MalformedScore { .. })
                ),
                "'{text}' should be malformed"
            );
        }
    }

    #[test]
    fn test_error_names_the_offending_token() {
        let err = decode_field("-5hard/x3soft", &ShapeDescriptor::hard_soft()).unwrap_err();
        match err {
            ScoreTextError::MalformedScore { index, token, .. } => {
                assert_eq!(index, 1);
                assert_eq!(token, "x3soft");
            }
            other => panic!("expected MalformedScore, got {other:?}"),
        }
    }
}

// ============================================================================
// Decimal variant wire format
// ============================================================================

mod decimal_variant {
    use super::*;

    #[test]
    fn test_encode() {
        let descriptor = ShapeDescriptor::hard_soft().decimal();
        let score = Score::hard_soft_decimal(dec("-30.5"), dec("-208.25"));
        assert_eq!(
            encode_field(&score, &descriptor).unwrap(),
            "-30.5hard/-208.25soft"
        );
    }

    #[test]
    fn test_integer_looking_decimals() {
        let descriptor = ShapeDescriptor::simple().decimal();
        assert_eq!(
            decode_field("-2", &descriptor).unwrap(),
            Score::simple_decimal(dec("-2"))
        );
    }

    #[test]
    fn test_init_magnitude_must_be_integral() {
        let descriptor = ShapeDescriptor::hard_soft().decimal();
        assert!(matches!(
            decode_field("-1.5init/0hard/0soft", &descriptor),
            Err(ScoreTextError::MalformedScore { .. })
        ));
    }
}

// ============================================================================
// Score::parse convenience
// ============================================================================

#[test]
fn test_score_parse_delegates_to_dispatch() {
    assert_eq!(
        Score::parse("0hard/0medium/-7soft", &ShapeDescriptor::hard_medium_soft()).unwrap(),
        Score::hard_medium_soft(0, 0, -7)
    );
}
