//! serde integration: field hooks for embedding scores in larger documents.
//!
//! A document-serialization framework calls the codec once per field. With
//! serde that takes three forms:
//!
//! - [`Score`] implements [`Serialize`] directly, writing its intrinsic
//!   canonical string.
//! - Fields whose shape is fixed at compile time use the
//!   [`simple`], [`hard_soft`] and [`hard_medium_soft`] modules with
//!   `#[serde(with = "...")]`.
//! - Fields whose shape is only known at runtime (bendable in particular,
//!   since its level counts come from configuration) deserialize through
//!   [`ScoreSeed`], a [`DeserializeSeed`] carrying the descriptor.

use std::fmt;

use serde::de::{self, DeserializeSeed, Visitor};
use serde::{Deserializer, Serialize, Serializer};

use crate::dispatch::{decode_field, encode_field};
use crate::score::Score;
use crate::shape::ShapeDescriptor;

impl Serialize for Score {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Descriptor-carrying deserialization seed.
///
/// serde `with`-modules cannot receive runtime parameters, so a field whose
/// descriptor is resolved at runtime deserializes through a seed:
///
/// ```
/// use serde::de::DeserializeSeed;
/// use scorefmt::{Score, ScoreSeed, ShapeDescriptor};
///
/// let mut de = serde_json::Deserializer::from_str("\"-1/-2/-3\"");
/// let score = ScoreSeed(ShapeDescriptor::bendable(2, 1)).deserialize(&mut de).unwrap();
/// assert_eq!(score, Score::bendable(vec![-1, -2], vec![-3]));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ScoreSeed(pub ShapeDescriptor);

impl<'de> DeserializeSeed<'de> for ScoreSeed {
    type Value = Score;

    fn deserialize<D>(self, deserializer: D) -> Result<Score, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ScoreVisitor(ShapeDescriptor);

        impl Visitor<'_> for ScoreVisitor {
            type Value = Score;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a canonical score string for a {} field", self.0.shape())
            }

            fn visit_str<E>(self, value: &str) -> Result<Score, E>
            where
                E: de::Error,
            {
                decode_field(value, &self.0).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(ScoreVisitor(self.0))
    }
}

macro_rules! fixed_shape_module {
    ($mod_name:ident, $descriptor:expr, $doc:literal) => {
        #[doc = $doc]
        ///
        /// For use with `#[serde(with = "...")]` on a [`Score`] field.
        /// Integer variant; decimal-variant and bendable fields go through
        /// [`ScoreSeed`].
        pub mod $mod_name {
            use super::*;

            pub fn serialize<S>(score: &Score, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                let text = encode_field(score, &$descriptor).map_err(serde::ser::Error::custom)?;
                serializer.serialize_str(&text)
            }

            pub fn deserialize<'de, D>(deserializer: D) -> Result<Score, D::Error>
            where
                D: Deserializer<'de>,
            {
                ScoreSeed($descriptor).deserialize(deserializer)
            }
        }
    };
}

fixed_shape_module!(
    simple,
    ShapeDescriptor::simple(),
    "Field hook for simple score fields."
);
fixed_shape_module!(
    hard_soft,
    ShapeDescriptor::hard_soft(),
    "Field hook for hard/soft score fields."
);
fixed_shape_module!(
    hard_medium_soft,
    ShapeDescriptor::hard_medium_soft(),
    "Field hook for hard/medium/soft score fields."
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Plan {
        name: String,
        #[serde(with = "hard_soft")]
        score: Score,
    }

    #[test]
    fn test_score_serializes_as_canonical_string() {
        let score = Score::hard_soft(0, -5).with_init(-2);
        assert_eq!(
            serde_json::to_string(&score).unwrap(),
            "\"-2init/0hard/-5soft\""
        );
    }

    #[test]
    fn test_field_hook_round_trip() {
        let plan = Plan {
            name: "shift rota".to_string(),
            score: Score::hard_soft(0, -100),
        };
        let json = serde_json::to_string(&plan).unwrap();
        assert_eq!(json, "{\"name\":\"shift rota\",\"score\":\"0hard/-100soft\"}");
        assert_eq!(serde_json::from_str::<Plan>(&json).unwrap(), plan);
    }

    #[test]
    fn test_field_hook_rejects_wrong_shape() {
        let json = "{\"name\":\"x\",\"score\":\"0hard/0medium/0soft\"}";
        assert!(serde_json::from_str::<Plan>(json).is_err());
    }

    #[test]
    fn test_seed_decodes_bendable() {
        let mut de = serde_json::Deserializer::from_str("\"-2init/-1/-2/-3\"");
        let score = ScoreSeed(ShapeDescriptor::bendable(2, 1))
            .deserialize(&mut de)
            .unwrap();
        assert_eq!(
            score,
            Score::bendable(vec![-1, -2], vec![-3]).with_init(-2)
        );
    }

    #[test]
    fn test_seed_surfaces_malformed_input() {
        let mut de = serde_json::Deserializer::from_str("\"-5hard//3soft\"");
        let err = ScoreSeed(ShapeDescriptor::hard_soft())
            .deserialize(&mut de)
            .unwrap_err();
        assert!(err.to_string().contains("malformed score text"));
    }
}
