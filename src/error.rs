//! Error types for the score text codec.

use thiserror::Error;

/// Errors produced while encoding or decoding score text.
///
/// Every variant carries enough context to surface a precise diagnostic to
/// the caller. The codec never recovers silently and has no fallback value
/// policy: ambiguous or malformed input always fails loudly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreTextError {
    /// The input text violates the canonical score grammar.
    #[error("malformed score text at token {index} ('{token}'): expected {expected}")]
    MalformedScore {
        /// Zero-based index of the offending level token.
        index: usize,
        /// The offending substring, verbatim.
        token: String,
        /// What the grammar expected at this position.
        expected: String,
    },

    /// The level count or bendable dimensionality does not match the
    /// caller-supplied shape descriptor.
    ///
    /// This usually indicates a configuration or data-corruption problem
    /// upstream, such as a string produced for a different field shape.
    #[error("score shape mismatch: expected {expected}, found {found}")]
    ShapeMismatch { expected: String, found: String },

    /// A shape tag outside the supported set was requested by name.
    ///
    /// This is a programming or configuration error, never retried.
    #[error("unsupported score shape '{name}'")]
    UnsupportedShape { name: String },

    /// The value cannot be represented in the canonical text form.
    #[error("value cannot be encoded: {reason}")]
    UnencodableValue { reason: String },
}

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, ScoreTextError>;
