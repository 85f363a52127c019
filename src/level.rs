//! Level vectors: the ordered signed magnitudes that make up a score.

use std::fmt;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::error::{Result, ScoreTextError};
use crate::shape::NumericVariant;

/// One signed score level.
///
/// Either a 64-bit integer (the integer variant) or a fixed-point decimal
/// (the decimal variant). The levels of a single score are always
/// homogeneous: constructors on [`Score`](crate::Score) only build
/// one-variant level vectors, and the tokenizer parses under a single
/// declared variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LevelValue {
    Int(i64),
    Decimal(Decimal),
}

impl LevelValue {
    /// Returns the numeric variant this value belongs to.
    pub const fn variant(&self) -> NumericVariant {
        match self {
            LevelValue::Int(_) => NumericVariant::Integer,
            LevelValue::Decimal(_) => NumericVariant::Decimal,
        }
    }

    /// Returns true if the value is zero or positive.
    pub fn is_non_negative(&self) -> bool {
        match self {
            LevelValue::Int(v) => *v >= 0,
            LevelValue::Decimal(d) => !d.is_sign_negative() || d.is_zero(),
        }
    }

    /// Converts a binary float into a decimal level.
    ///
    /// This is the boundary where non-finite numbers can approach the codec:
    /// NaN and infinities have no canonical text form and fail with
    /// [`ScoreTextError::UnencodableValue`], as does a magnitude beyond the
    /// fixed-point precision.
    pub fn from_f64(value: f64) -> Result<LevelValue> {
        if !value.is_finite() {
            return Err(ScoreTextError::UnencodableValue {
                reason: format!("non-finite level value {value}"),
            });
        }
        Decimal::from_f64(value)
            .map(LevelValue::Decimal)
            .ok_or_else(|| ScoreTextError::UnencodableValue {
                reason: format!("level value {value} exceeds fixed-point precision"),
            })
    }
}

impl fmt::Display for LevelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelValue::Int(v) => write!(f, "{v}"),
            LevelValue::Decimal(d) => write!(f, "{d}"),
        }
    }
}

impl From<i64> for LevelValue {
    fn from(value: i64) -> Self {
        LevelValue::Int(value)
    }
}

impl From<Decimal> for LevelValue {
    fn from(value: Decimal) -> Self {
        LevelValue::Decimal(value)
    }
}

/// A homogeneous, ordered sequence of score levels.
///
/// Pure data: structural equality and lexicographic ordering, nothing else.
/// The variant is part of the structure, so an integer vector and a decimal
/// vector never compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LevelVec {
    Int(Vec<i64>),
    Decimal(Vec<Decimal>),
}

impl LevelVec {
    /// Returns the number of levels.
    pub fn len(&self) -> usize {
        match self {
            LevelVec::Int(v) => v.len(),
            LevelVec::Decimal(v) => v.len(),
        }
    }

    /// Returns true if there are no levels.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the numeric variant of the levels.
    pub const fn variant(&self) -> NumericVariant {
        match self {
            LevelVec::Int(_) => NumericVariant::Integer,
            LevelVec::Decimal(_) => NumericVariant::Decimal,
        }
    }

    /// Returns the level at the given index, if present.
    pub fn get(&self, index: usize) -> Option<LevelValue> {
        match self {
            LevelVec::Int(v) => v.get(index).copied().map(LevelValue::Int),
            LevelVec::Decimal(v) => v.get(index).copied().map(LevelValue::Decimal),
        }
    }

    /// Returns all levels in order, highest priority first.
    pub fn to_values(&self) -> Vec<LevelValue> {
        match self {
            LevelVec::Int(v) => v.iter().copied().map(LevelValue::Int).collect(),
            LevelVec::Decimal(v) => v.iter().copied().map(LevelValue::Decimal).collect(),
        }
    }

    /// Creates an empty vector of the given variant.
    pub(crate) fn new(variant: NumericVariant) -> LevelVec {
        match variant {
            NumericVariant::Integer => LevelVec::Int(Vec::new()),
            NumericVariant::Decimal => LevelVec::Decimal(Vec::new()),
        }
    }

    /// Appends a level.
    ///
    /// # Panics
    /// Panics if the value's variant differs from the vector's. Callers
    /// parse under a single declared variant, so a mix is a programming
    /// error, not an input error.
    pub(crate) fn push(&mut self, value: LevelValue) {
        match (self, value) {
            (LevelVec::Int(v), LevelValue::Int(x)) => v.push(x),
            (LevelVec::Decimal(v), LevelValue::Decimal(x)) => v.push(x),
            _ => panic!("mixed numeric variants in one level vector"),
        }
    }
}
