//! Score shape metadata: shape tags, numeric variants, and descriptors.

use std::fmt;

use crate::error::{Result, ScoreTextError};

/// Semantic label attached to a level in a labeled score string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LevelLabel {
    /// Hard constraints - must be satisfied for feasibility.
    Hard,
    /// Medium constraints - secondary priority.
    Medium,
    /// Soft constraints - optimization objectives.
    Soft,
}

impl LevelLabel {
    /// The label's canonical text suffix.
    pub const fn as_str(self) -> &'static str {
        match self {
            LevelLabel::Hard => "hard",
            LevelLabel::Medium => "medium",
            LevelLabel::Soft => "soft",
        }
    }

    pub(crate) fn from_suffix(suffix: &str) -> Option<LevelLabel> {
        match suffix {
            "hard" => Some(LevelLabel::Hard),
            "medium" => Some(LevelLabel::Medium),
            "soft" => Some(LevelLabel::Soft),
            _ => None,
        }
    }
}

impl fmt::Display for LevelLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which of the supported score shapes a value belongs to.
///
/// A closed set: the dispatch layer matches exhaustively, so adding a shape
/// is a compile-checked change rather than a runtime registration.
///
/// Bendable level counts live on the tag itself. A bendable score therefore
/// knows its own dimensionality, and two bendable scores with the same
/// flattened levels but a different hard/soft split are distinct values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    /// One level, no label.
    Simple,
    /// Two labeled levels: hard, soft.
    HardSoft,
    /// Three labeled levels: hard, medium, soft.
    HardMediumSoft,
    /// A caller-configured number of positional hard and soft levels.
    Bendable {
        hard_levels: usize,
        soft_levels: usize,
    },
}

impl ShapeKind {
    /// Returns the number of levels a value of this shape carries.
    pub const fn levels_count(&self) -> usize {
        match self {
            ShapeKind::Simple => 1,
            ShapeKind::HardSoft => 2,
            ShapeKind::HardMediumSoft => 3,
            ShapeKind::Bendable {
                hard_levels,
                soft_levels,
            } => *hard_levels + *soft_levels,
        }
    }

    /// Short name for diagnostics and logging.
    pub const fn name(&self) -> &'static str {
        match self {
            ShapeKind::Simple => "simple",
            ShapeKind::HardSoft => "hard_soft",
            ShapeKind::HardMediumSoft => "hard_medium_soft",
            ShapeKind::Bendable { .. } => "bendable",
        }
    }

    /// The expected label sequence, or `None` for positional shapes.
    pub(crate) const fn labels(&self) -> Option<&'static [LevelLabel]> {
        match self {
            ShapeKind::Simple | ShapeKind::Bendable { .. } => None,
            ShapeKind::HardSoft => Some(&[LevelLabel::Hard, LevelLabel::Soft]),
            ShapeKind::HardMediumSoft => {
                Some(&[LevelLabel::Hard, LevelLabel::Medium, LevelLabel::Soft])
            }
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Bendable {
                hard_levels,
                soft_levels,
            } => write!(f, "bendable({hard_levels} hard/{soft_levels} soft)"),
            other => f.write_str(other.name()),
        }
    }
}

/// Numeric variant of a score's levels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NumericVariant {
    /// Signed 64-bit integer levels. Decimal points are rejected on parse.
    #[default]
    Integer,
    /// Fixed-point decimal levels with exact digit-scale round-trip.
    Decimal,
}

impl fmt::Display for NumericVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericVariant::Integer => f.write_str("integer"),
            NumericVariant::Decimal => f.write_str("decimal"),
        }
    }
}

/// Per-field shape metadata: which shape a field's scores have and which
/// numeric variant their levels use.
///
/// Resolved once per field at codec-setup time and reused for every
/// encode/decode call on that field; never mutated. The codec does not
/// invent bendable level counts: they are supplied here by the caller and
/// are authoritative, because the bendable wire form does not embed them
/// (see [`ShapeDescriptor::bendable`]).
///
/// # Examples
///
/// ```
/// use scorefmt::{NumericVariant, ShapeDescriptor};
///
/// let descriptor = ShapeDescriptor::hard_soft();
/// assert_eq!(descriptor.levels_count(), 2);
///
/// let decimal = ShapeDescriptor::hard_soft().decimal();
/// assert_eq!(decimal.variant(), NumericVariant::Decimal);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeDescriptor {
    shape: ShapeKind,
    variant: NumericVariant,
}

impl ShapeDescriptor {
    /// Creates a descriptor from its parts.
    pub const fn new(shape: ShapeKind, variant: NumericVariant) -> Self {
        ShapeDescriptor { shape, variant }
    }

    /// Integer-variant descriptor for the one-level simple shape.
    pub const fn simple() -> Self {
        ShapeDescriptor::new(ShapeKind::Simple, NumericVariant::Integer)
    }

    /// Integer-variant descriptor for the hard/soft shape.
    pub const fn hard_soft() -> Self {
        ShapeDescriptor::new(ShapeKind::HardSoft, NumericVariant::Integer)
    }

    /// Integer-variant descriptor for the hard/medium/soft shape.
    pub const fn hard_medium_soft() -> Self {
        ShapeDescriptor::new(ShapeKind::HardMediumSoft, NumericVariant::Integer)
    }

    /// Integer-variant descriptor for a bendable shape with the given level
    /// counts.
    ///
    /// The canonical bendable string carries no embedded counts: the same
    /// text decodes differently under descriptors with a different hard/soft
    /// split. That ambiguity is part of the format. The caller is responsible
    /// for supplying the counts the field was configured with; the codec
    /// never infers them from the string.
    pub const fn bendable(hard_levels: usize, soft_levels: usize) -> Self {
        ShapeDescriptor::new(
            ShapeKind::Bendable {
                hard_levels,
                soft_levels,
            },
            NumericVariant::Integer,
        )
    }

    /// Switches this descriptor to the fixed-point decimal variant.
    pub const fn decimal(self) -> Self {
        ShapeDescriptor::new(self.shape, NumericVariant::Decimal)
    }

    /// Resolves a descriptor for a field configured by shape name.
    ///
    /// Recognized names: `"simple"`, `"hard_soft"`, `"hard_medium_soft"`,
    /// `"bendable"`. Bendable fields carry their level counts in the same
    /// configuration entry, so `"bendable"` requires `bendable_counts`.
    /// Any other name is a configuration error and fails with
    /// [`ScoreTextError::UnsupportedShape`].
    pub fn for_field(name: &str, bendable_counts: Option<(usize, usize)>) -> Result<Self> {
        let shape = match (name, bendable_counts) {
            ("simple", _) => ShapeKind::Simple,
            ("hard_soft", _) => ShapeKind::HardSoft,
            ("hard_medium_soft", _) => ShapeKind::HardMediumSoft,
            ("bendable", Some((hard_levels, soft_levels))) => ShapeKind::Bendable {
                hard_levels,
                soft_levels,
            },
            ("bendable", None) => {
                return Err(ScoreTextError::UnsupportedShape {
                    name: "bendable (level counts missing)".to_string(),
                })
            }
            _ => {
                return Err(ScoreTextError::UnsupportedShape {
                    name: name.to_string(),
                })
            }
        };
        Ok(ShapeDescriptor::new(shape, NumericVariant::Integer))
    }

    /// Returns the shape tag.
    pub const fn shape(&self) -> ShapeKind {
        self.shape
    }

    /// Returns the numeric variant.
    pub const fn variant(&self) -> NumericVariant {
        self.variant
    }

    /// Returns the number of levels a value of this shape carries.
    pub const fn levels_count(&self) -> usize {
        self.shape.levels_count()
    }
}
