//! The Score value type.

use std::cmp::Ordering;
use std::fmt;

use rust_decimal::Decimal;

use crate::error::Result;
use crate::level::{LevelValue, LevelVec};
use crate::shape::{NumericVariant, ShapeDescriptor, ShapeKind};

/// An immutable score ranking one candidate solution.
///
/// A score is an `init_score` (how many mandatory setup constraints are
/// still unsatisfied, `<= 0` by convention, 0 when fully initialized) plus
/// an ordered vector of signed levels, tagged with the shape the value
/// belongs to. The level count always matches the shape tag; constructors
/// enforce that, so every `Score` in existence is well-formed.
///
/// Equality is structural: shape tag, init score, and all levels must match
/// pairwise. In particular, two bendable scores with the same flattened
/// levels but a different hard/soft split are unequal.
///
/// Ordering is what the optimization engine ranks candidates by: first by
/// `init_score`, then by the levels lexicographically in priority order.
/// It is total, with the shape tag as a final tiebreak so that unrelated
/// shapes still order deterministically.
///
/// # Examples
///
/// ```
/// use scorefmt::Score;
///
/// let infeasible = Score::hard_soft(-1, 0);
/// let feasible = Score::hard_soft(0, -1000);
/// assert!(feasible > infeasible);
/// assert!(feasible.is_feasible());
///
/// // Display is the canonical wire form.
/// assert_eq!(Score::hard_soft(0, -5).with_init(-2).to_string(), "-2init/0hard/-5soft");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Score {
    init_score: i32,
    shape: ShapeKind,
    levels: LevelVec,
}

impl Score {
    /// Creates a one-level simple score.
    pub fn simple(score: i64) -> Score {
        Score::from_parts(0, ShapeKind::Simple, LevelVec::Int(vec![score]))
    }

    /// Creates a one-level simple score with fixed-point levels.
    pub fn simple_decimal(score: Decimal) -> Score {
        Score::from_parts(0, ShapeKind::Simple, LevelVec::Decimal(vec![score]))
    }

    /// Creates a hard/soft score.
    pub fn hard_soft(hard: i64, soft: i64) -> Score {
        Score::from_parts(0, ShapeKind::HardSoft, LevelVec::Int(vec![hard, soft]))
    }

    /// Creates a hard/soft score with fixed-point levels.
    pub fn hard_soft_decimal(hard: Decimal, soft: Decimal) -> Score {
        Score::from_parts(0, ShapeKind::HardSoft, LevelVec::Decimal(vec![hard, soft]))
    }

    /// Creates a hard/medium/soft score.
    pub fn hard_medium_soft(hard: i64, medium: i64, soft: i64) -> Score {
        Score::from_parts(
            0,
            ShapeKind::HardMediumSoft,
            LevelVec::Int(vec![hard, medium, soft]),
        )
    }

    /// Creates a hard/medium/soft score with fixed-point levels.
    pub fn hard_medium_soft_decimal(hard: Decimal, medium: Decimal, soft: Decimal) -> Score {
        Score::from_parts(
            0,
            ShapeKind::HardMediumSoft,
            LevelVec::Decimal(vec![hard, medium, soft]),
        )
    }

    /// Creates a bendable score. The level counts are taken from the vector
    /// lengths and become part of the value's shape tag.
    pub fn bendable(hard: Vec<i64>, soft: Vec<i64>) -> Score {
        let shape = ShapeKind::Bendable {
            hard_levels: hard.len(),
            soft_levels: soft.len(),
        };
        let mut levels = hard;
        levels.extend(soft);
        Score::from_parts(0, shape, LevelVec::Int(levels))
    }

    /// Creates a bendable score with fixed-point levels.
    pub fn bendable_decimal(hard: Vec<Decimal>, soft: Vec<Decimal>) -> Score {
        let shape = ShapeKind::Bendable {
            hard_levels: hard.len(),
            soft_levels: soft.len(),
        };
        let mut levels = hard;
        levels.extend(soft);
        Score::from_parts(0, shape, LevelVec::Decimal(levels))
    }

    /// Returns this score with the given init score.
    ///
    /// By convention `init_score <= 0`; the engine owns that rule and the
    /// codec does not enforce it.
    pub fn with_init(mut self, init_score: i32) -> Score {
        self.init_score = init_score;
        self
    }

    pub(crate) fn from_parts(init_score: i32, shape: ShapeKind, levels: LevelVec) -> Score {
        debug_assert_eq!(levels.len(), shape.levels_count());
        Score {
            init_score,
            shape,
            levels,
        }
    }

    /// Decodes a canonical string under the given descriptor.
    ///
    /// Convenience for [`decode_field`](crate::decode_field).
    pub fn parse(text: &str, descriptor: &ShapeDescriptor) -> Result<Score> {
        crate::dispatch::decode_field(text, descriptor)
    }

    /// Returns the init score: 0 when fully initialized, more negative the
    /// more mandatory setup constraints remain unsatisfied.
    pub const fn init_score(&self) -> i32 {
        self.init_score
    }

    /// Returns the shape tag, including bendable level counts.
    pub const fn shape(&self) -> ShapeKind {
        self.shape
    }

    /// Returns the numeric variant of the levels.
    pub const fn variant(&self) -> NumericVariant {
        self.levels.variant()
    }

    /// Returns the level vector, highest priority first.
    pub const fn levels(&self) -> &LevelVec {
        &self.levels
    }

    /// Returns the descriptor this value intrinsically belongs to.
    pub const fn descriptor(&self) -> ShapeDescriptor {
        ShapeDescriptor::new(self.shape, self.levels.variant())
    }

    /// Returns true if the score is fully initialized and all hard levels
    /// are satisfied.
    pub fn is_feasible(&self) -> bool {
        if self.init_score != 0 {
            return false;
        }
        let hard_levels = match self.shape {
            ShapeKind::Simple | ShapeKind::HardSoft | ShapeKind::HardMediumSoft => 1,
            ShapeKind::Bendable { hard_levels, .. } => hard_levels,
        };
        (0..hard_levels).all(|i| {
            self.levels
                .get(i)
                .map(|v| v.is_non_negative())
                .unwrap_or(false)
        })
    }

    /// Returns all levels in order.
    pub fn level_values(&self) -> Vec<LevelValue> {
        self.levels.to_values()
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        self.init_score
            .cmp(&other.init_score)
            .then_with(|| self.levels.cmp(&other.levels))
            .then_with(|| self.shape.cmp(&other.shape))
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Score({}: {})", self.shape, self)
    }
}

impl fmt::Display for Score {
    /// The canonical wire form. Encoding from the value alone is infallible
    /// because the shape tag and variant are carried by the value itself.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::codec::encode(self))
    }
}
