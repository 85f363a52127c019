//! Tokenizer for the canonical score grammar, shared by every shape.
//!
//! ```text
//! score        = [init-part] level-part *("/" level-part)
//! init-part    = signed-int "init/"            ; only when init_score != 0
//! level-part   = signed-number label
//! label        = "hard" | "soft" | "medium" | ""   ; "" = positional
//! signed-number= ["-"] 1*DIGIT ["." 1*DIGIT]   ; "." only in decimal variant
//! ```
//!
//! The tokenizer is strict: no surrounding whitespace, no empty tokens, no
//! `+` signs, no unknown labels. Every rejection names the token index and
//! the offending substring so callers can surface an exact diagnostic.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{Result, ScoreTextError};
use crate::level::{LevelValue, LevelVec};
use crate::shape::{LevelLabel, NumericVariant};

/// One parsed level token, kept alongside its source text for diagnostics.
#[derive(Debug)]
pub(crate) struct LevelToken<'a> {
    /// Zero-based position among the level tokens (the init segment does
    /// not count).
    pub index: usize,
    /// The full token text, verbatim.
    pub raw: &'a str,
    /// The parsed label suffix, if the token carried one.
    pub label: Option<LevelLabel>,
}

/// The result of tokenizing one canonical score string.
#[derive(Debug)]
pub(crate) struct TokenizedScore<'a> {
    pub init_score: i32,
    /// Parsed level values, one per token, in token order.
    pub levels: LevelVec,
    pub tokens: Vec<LevelToken<'a>>,
}

/// Tokenizes `text` under the given numeric variant.
///
/// Handles the optional leading init segment (absence means init 0), splits
/// the remainder on `/`, and parses each token into a signed number plus an
/// optional label suffix. Label discipline (which labels are required or
/// forbidden, and in what order) is the shape codec's concern; see
/// [`expect_labels`] and [`expect_positional`].
pub(crate) fn tokenize(text: &str, variant: NumericVariant) -> Result<TokenizedScore<'_>> {
    if text.is_empty() {
        return Err(malformed(0, text, "a non-empty score string"));
    }
    if text != text.trim() {
        return Err(malformed(
            0,
            text,
            "a score string without leading or trailing whitespace",
        ));
    }

    let (init_score, rest) = match text.split_once('/') {
        Some((head, tail)) if head.ends_with("init") => {
            let number = head.strip_suffix("init").unwrap_or(head);
            let init = i32::from_str(number)
                .map_err(|_| malformed(0, head, "a signed integer before 'init'"))?;
            (init, tail)
        }
        _ => {
            if !text.contains('/') && text.ends_with("init") {
                return Err(malformed(
                    0,
                    text,
                    "at least one level after the 'init/' segment",
                ));
            }
            (0, text)
        }
    };

    let mut levels = LevelVec::new(variant);
    let mut tokens = Vec::new();
    for (index, raw) in rest.split('/').enumerate() {
        if raw.is_empty() {
            return Err(malformed(index, raw, "a level value (empty token)"));
        }
        let (number, suffix) = split_numeric(raw);
        if number.is_empty() || number == "-" {
            return Err(malformed(index, raw, "a signed number"));
        }
        let label = match suffix {
            "" => None,
            _ => Some(LevelLabel::from_suffix(suffix).ok_or_else(|| {
                malformed(index, raw, "a level label 'hard', 'medium' or 'soft'")
            })?),
        };
        levels.push(parse_number(number, variant, index, raw)?);
        tokens.push(LevelToken { index, raw, label });
    }

    Ok(TokenizedScore {
        init_score,
        levels,
        tokens,
    })
}

/// Label discipline for labeled shapes, checked in three stages so the
/// error kind matches the actual problem: a bare number in a labeled field
/// is malformed, a fully labeled string of the wrong length is a shape
/// mismatch, and known labels in the wrong order are malformed.
pub(crate) fn expect_labels(
    parsed: &TokenizedScore<'_>,
    expected: &[LevelLabel],
    shape_name: &str,
) -> Result<()> {
    for token in &parsed.tokens {
        if token.label.is_none() {
            return Err(malformed(
                token.index,
                token.raw,
                "a labeled level such as '0hard'",
            ));
        }
    }
    if parsed.tokens.len() != expected.len() {
        return Err(shape_mismatch(shape_name, expected.len(), parsed.tokens.len()));
    }
    for (token, want) in parsed.tokens.iter().zip(expected) {
        if token.label != Some(*want) {
            return Err(malformed(
                token.index,
                token.raw,
                &format!("the '{want}' level at this position"),
            ));
        }
    }
    Ok(())
}

/// Label discipline for positional shapes: labels are forbidden and the
/// token count must match the descriptor exactly.
pub(crate) fn expect_positional(
    parsed: &TokenizedScore<'_>,
    expected_len: usize,
    shape_name: &str,
) -> Result<()> {
    for token in &parsed.tokens {
        if token.label.is_some() {
            return Err(malformed(
                token.index,
                token.raw,
                "an unlabeled level (this shape's levels are positional)",
            ));
        }
    }
    if parsed.tokens.len() != expected_len {
        return Err(shape_mismatch(shape_name, expected_len, parsed.tokens.len()));
    }
    Ok(())
}

fn malformed(index: usize, token: &str, expected: &str) -> ScoreTextError {
    ScoreTextError::MalformedScore {
        index,
        token: token.to_string(),
        expected: expected.to_string(),
    }
}

fn shape_mismatch(shape_name: &str, expected: usize, found: usize) -> ScoreTextError {
    ScoreTextError::ShapeMismatch {
        expected: format!("{expected} levels for a {shape_name} score"),
        found: format!("{found} levels"),
    }
}

/// Splits a token at the boundary between its numeric prefix and whatever
/// follows. The numeric prefix is a leading `-` plus digits and dots; full
/// validation happens in [`parse_number`].
fn split_numeric(raw: &str) -> (&str, &str) {
    let mut end = 0;
    for (i, c) in raw.char_indices() {
        let numeric = c.is_ascii_digit() || c == '.' || (c == '-' && i == 0);
        if !numeric {
            break;
        }
        end = i + c.len_utf8();
    }
    raw.split_at(end)
}

/// Returns true for `-?DIGIT+(.DIGIT+)?` with at most one dot.
fn is_canonical_number(number: &str) -> bool {
    let unsigned = number.strip_prefix('-').unwrap_or(number);
    let mut halves = unsigned.splitn(2, '.');
    let int_part = halves.next().unwrap_or("");
    let frac_part = halves.next();
    !int_part.is_empty()
        && int_part.bytes().all(|b| b.is_ascii_digit())
        && frac_part.map_or(true, |frac| {
            !frac.is_empty() && frac.bytes().all(|b| b.is_ascii_digit())
        })
}

fn parse_number(
    number: &str,
    variant: NumericVariant,
    index: usize,
    raw: &str,
) -> Result<LevelValue> {
    match variant {
        NumericVariant::Integer => {
            if number.contains('.') {
                return Err(malformed(
                    index,
                    raw,
                    "an integer level (decimal points are only valid for decimal-variant fields)",
                ));
            }
            if !is_canonical_number(number) {
                return Err(malformed(index, raw, "a signed integer level"));
            }
            i64::from_str(number)
                .map(LevelValue::Int)
                .map_err(|_| malformed(index, raw, "a signed 64-bit integer level"))
        }
        NumericVariant::Decimal => {
            if !is_canonical_number(number) {
                return Err(malformed(
                    index,
                    raw,
                    "a fixed-point level with digits on both sides of the decimal point",
                ));
            }
            Decimal::from_str(number)
                .map(LevelValue::Decimal)
                .map_err(|_| {
                    malformed(
                        index,
                        raw,
                        "a fixed-point decimal level within supported precision",
                    )
                })
        }
    }
}
