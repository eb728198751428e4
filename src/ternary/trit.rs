//! Single balanced ternary digit (trit).
//!
//! A trit can hold one of three values: -1, 0, or +1, read as logic values
//! FALSE, NIL and TRUE. The digit is stored with the same two-field encoding
//! used by [`TritString`](crate::ternary::TritString):
//! - `low = 0`             = 0 (NIL), whatever `sign` holds
//! - `low = 1, sign = 0`   = -1 (FALSE)
//! - `low = 1, sign = 1`   = +1 (TRUE)

use std::fmt;
use serde::{Serialize, Deserialize};

use crate::error::{Result, TritError};

/// A single balanced ternary digit.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i8)]
pub enum Trit {
    /// Negative (-1), logic FALSE
    N = -1,
    /// Zero (0), logic NIL
    O = 0,
    /// Positive (+1), logic TRUE
    P = 1,
}

impl Trit {
    /// All possible trit values in order: N, O, P
    pub const ALL: [Trit; 3] = [Trit::N, Trit::O, Trit::P];

    /// Logic FALSE.
    pub const FALSE: Trit = Trit::N;
    /// Logic NIL.
    pub const NIL: Trit = Trit::O;
    /// Logic TRUE.
    pub const TRUE: Trit = Trit::P;

    /// Decode a trit from its two encoding bits.
    ///
    /// A clear `low` bit always means NIL, the `sign` bit is then ignored.
    #[inline]
    pub const fn from_bits(low: bool, sign: bool) -> Self {
        match (low, sign) {
            (false, _) => Trit::O,
            (true, false) => Trit::N,
            (true, true) => Trit::P,
        }
    }

    /// Encoding bits as `(low, sign)`. `sign` is never set without `low`.
    #[inline]
    pub const fn bits(self) -> (bool, bool) {
        match self {
            Trit::N => (true, false),
            Trit::O => (false, false),
            Trit::P => (true, true),
        }
    }

    /// Map any integer to a trit by its sign: positive is TRUE, negative is
    /// FALSE, zero is NIL.
    #[inline]
    pub const fn from_sign(value: i64) -> Self {
        if value > 0 {
            Trit::P
        } else if value < 0 {
            Trit::N
        } else {
            Trit::O
        }
    }

    /// Strict conversion from an integer in {-1, 0, 1}.
    pub fn try_from_i8(value: i8) -> Result<Self> {
        match value {
            -1 => Ok(Trit::N),
            0 => Ok(Trit::O),
            1 => Ok(Trit::P),
            _ => Err(TritError::InvalidTritValue(value as i64)),
        }
    }

    /// Convert to integer value.
    #[inline]
    pub const fn to_i8(self) -> i8 {
        self as i8
    }

    /// Row/column index in a 3x3 gate table: N = 0, O = 1, P = 2.
    #[inline]
    pub const fn index(self) -> usize {
        (self as i8 + 1) as usize
    }

    #[inline]
    pub const fn is_true(self) -> bool {
        matches!(self, Trit::P)
    }

    #[inline]
    pub const fn is_nil(self) -> bool {
        matches!(self, Trit::O)
    }

    #[inline]
    pub const fn is_false(self) -> bool {
        matches!(self, Trit::N)
    }

    /// Arithmetic negation (flip N and P, O stays O).
    #[inline]
    pub const fn neg(self) -> Self {
        match self {
            Trit::N => Trit::P,
            Trit::O => Trit::O,
            Trit::P => Trit::N,
        }
    }

    /// Half adder: `self + other` as `(sum, carry)`.
    #[inline]
    pub const fn half_add(self, other: Self) -> (Self, Self) {
        match self.to_i8() + other.to_i8() {
            -2 => (Trit::P, Trit::N),
            -1 => (Trit::N, Trit::O),
            1 => (Trit::P, Trit::O),
            2 => (Trit::N, Trit::P),
            _ => (Trit::O, Trit::O),
        }
    }

    /// Full adder: adds three trits (a, b, c_in), returns (sum, carry_out).
    #[inline]
    pub const fn full_add(self, other: Self, carry_in: Self) -> (Self, Self) {
        let (sum, carry) = digit_carry(self.to_i8() + other.to_i8() + carry_in.to_i8());
        (Trit::from_sign(sum as i64), Trit::from_sign(carry as i64))
    }

    /// Single-trit multiplication (never carries).
    #[inline]
    pub const fn mul(self, other: Self) -> Self {
        Trit::from_sign((self.to_i8() * other.to_i8()) as i64)
    }

    /// Numeric symbol: "-1", "0", "1".
    pub const fn symbol_numeric(self) -> &'static str {
        match self {
            Trit::N => "-1",
            Trit::O => "0",
            Trit::P => "1",
        }
    }

    /// Logic symbol: "%false", "%nil", "%true".
    pub const fn symbol_logic(self) -> &'static str {
        match self {
            Trit::N => "%false",
            Trit::O => "%nil",
            Trit::P => "%true",
        }
    }

    /// Trit symbol: '-', '0', '+'.
    pub const fn symbol(self) -> char {
        match self {
            Trit::N => '-',
            Trit::O => '0',
            Trit::P => '+',
        }
    }

    /// Single-letter symbol: 'M' (minus), 'N' (nil), 'P' (plus).
    pub const fn symbol_char(self) -> char {
        match self {
            Trit::N => 'M',
            Trit::O => 'N',
            Trit::P => 'P',
        }
    }
}

/// Split a column sum in [-3, 3] into `(digit, carry)`, both in {-1, 0, 1}.
///
/// `digit + 3 * carry == sum` for every row.
#[inline]
pub const fn digit_carry(sum: i8) -> (i8, i8) {
    match sum {
        -3 => (0, -1),
        -2 => (1, -1),
        -1 => (-1, 0),
        1 => (1, 0),
        2 => (-1, 1),
        3 => (0, 1),
        _ => (0, 0),
    }
}

/// 3 raised to `n`, for `n` up to the 32-trit capacity.
pub const fn pow3(n: u32) -> i64 {
    let mut r: i64 = 1;
    let mut i = 0;
    while i < n {
        r *= 3;
        i += 1;
    }
    r
}

impl Default for Trit {
    fn default() -> Self {
        Trit::O
    }
}

impl fmt::Debug for Trit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trit::N => write!(f, "N"),
            Trit::O => write!(f, "O"),
            Trit::P => write!(f, "P"),
        }
    }
}

impl fmt::Display for Trit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::ops::Neg for Trit {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Trit::neg(self)
    }
}

impl From<i8> for Trit {
    fn from(value: i8) -> Self {
        Trit::from_sign(value as i64)
    }
}

impl From<Trit> for i8 {
    fn from(trit: Trit) -> Self {
        trit.to_i8()
    }
}
