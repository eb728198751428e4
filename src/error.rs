//! Error types shared by the checked entry points.

use thiserror::Error;

use crate::ternary::Trit;

/// Errors raised by checked trit and trit-string operations.
///
/// The unchecked operations never fail: they clamp positions and drop
/// carries instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TritError {
    #[error("trit position {position} is outside the {capacity}-trit capacity")]
    IndexOutOfRange { position: usize, capacity: usize },

    #[error("carry {carry:?} overflowed past the most significant trit")]
    Overflow { carry: Trit },

    #[error("invalid trit value: {0} (must be -1, 0, or 1)")]
    InvalidTritValue(i64),

    #[error("value {value} does not fit in {length} trits")]
    ValueOutOfRange { value: i64, length: u8 },

    #[error("unknown gate: {0}")]
    UnknownGate(String),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, TritError>;
