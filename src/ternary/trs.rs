//! Packed balanced ternary integers of up to 32 trits.
//!
//! A [`TritString`] keeps its digits in two parallel `u32` bitfields. For
//! every position `p` (0 = least significant):
//! - `low[p] == 0`                  -> NIL (0)
//! - `low[p] == 1 && sign[p] == 0`  -> FALSE (-1)
//! - `low[p] == 1 && sign[p] == 1`  -> TRUE (+1)
//!
//! `sign[p]` is never set while `low[p]` is clear. Every writer updates both
//! fields together to keep it that way.
//!
//! The declared length `len` is the number of significant positions used by
//! whole-number operations (sign, add, sub, integer conversion). Bits at or
//! above `len` may still be present in the fields, e.g. after a left shift,
//! but are not part of the number.

use std::fmt;
use std::ops;
use serde::Serialize;

use crate::error::{Result, TritError};
use crate::ternary::gates::{BinaryFn, UnaryFn};
use crate::ternary::trit::pow3;
use crate::ternary::Trit;

/// A fixed-capacity balanced ternary integer.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct TritString {
    /// Declared number of significant trits, at most [`TritString::CAPACITY`].
    len: u8,
    /// Set where the trit is non-zero.
    low: u32,
    /// Set where the trit is TRUE. Always a subset of `low`.
    sign: u32,
}

impl TritString {
    /// Hard ceiling on the number of trit positions.
    pub const CAPACITY: u8 = 32;

    /// Create an all-NIL value with the given declared length.
    ///
    /// Lengths above [`TritString::CAPACITY`] are clamped.
    #[inline]
    pub const fn new(len: u8) -> Self {
        Self { len: clamp_len(len), low: 0, sign: 0 }
    }

    /// An all-NIL value of length 0.
    #[inline]
    pub const fn zero() -> Self {
        Self::new(0)
    }

    /// Build from raw encoding fields. Sign bits without a matching low bit
    /// are dropped.
    #[inline]
    pub const fn from_bits(len: u8, low: u32, sign: u32) -> Self {
        Self { len: clamp_len(len), low, sign: sign & low }
    }

    /// Raw non-zero field.
    #[inline]
    pub const fn low_bits(&self) -> u32 {
        self.low
    }

    /// Raw TRUE field.
    #[inline]
    pub const fn sign_bits(&self) -> u32 {
        self.sign
    }

    #[inline]
    pub const fn len(&self) -> u8 {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Change the declared length, clamped to capacity. Digits are untouched.
    #[inline]
    pub fn set_len(&mut self, len: u8) {
        self.len = clamp_len(len);
    }

    /// Same value with a different declared length.
    #[inline]
    pub const fn with_len(self, len: u8) -> Self {
        Self { len: clamp_len(len), ..self }
    }

    /// Zero both fields and the length.
    pub fn clear_all(&mut self) {
        *self = Self::zero();
    }

    /// Zero both fields, keeping the declared length.
    pub fn clear_digits(&mut self) {
        self.low = 0;
        self.sign = 0;
    }

    /// True if no position in `[0, len)` holds a non-zero trit.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.low & len_mask(self.len) == 0
    }

    // ------------------------------------------------------------------------
    // Per-position access
    // ------------------------------------------------------------------------

    /// Read the trit at `p`. Positions outside the capacity read as NIL.
    #[inline]
    pub const fn get(&self, p: usize) -> Trit {
        match bit(p) {
            Some(m) => Trit::from_bits(self.low & m != 0, self.sign & m != 0),
            None => Trit::O,
        }
    }

    /// Read the trit at `p` as an integer in {-1, 0, 1}.
    #[inline]
    pub const fn get_trit(&self, p: usize) -> i8 {
        self.get(p).to_i8()
    }

    /// Write `t` at `p`. Positions outside the capacity are ignored.
    #[inline]
    pub fn set(&mut self, p: usize, t: Trit) {
        if let Some(m) = bit(p) {
            let (low, sign) = t.bits();
            self.low = if low { self.low | m } else { self.low & !m };
            self.sign = if sign { self.sign | m } else { self.sign & !m };
        }
    }

    /// Write the sign of `v` at `p`: positive is TRUE, negative FALSE.
    #[inline]
    pub fn set_trit(&mut self, p: usize, v: i8) {
        self.set(p, Trit::from(v));
    }

    #[inline]
    pub fn set_true(&mut self, p: usize) {
        self.set(p, Trit::P);
    }

    #[inline]
    pub fn set_nil(&mut self, p: usize) {
        self.set(p, Trit::O);
    }

    #[inline]
    pub fn set_false(&mut self, p: usize) {
        self.set(p, Trit::N);
    }

    /// Alias for [`set_nil`](Self::set_nil).
    #[inline]
    pub fn clear(&mut self, p: usize) {
        self.set_nil(p);
    }

    /// Copy of `self` with `t` written at `p`.
    #[inline]
    pub fn with(mut self, p: usize, t: Trit) -> Self {
        self.set(p, t);
        self
    }

    /// Read the trit at `p`, failing for positions outside the capacity.
    pub fn try_get(&self, p: usize) -> Result<Trit> {
        check_position(p)?;
        Ok(self.get(p))
    }

    /// Write the trit at `p`, failing for positions outside the capacity.
    pub fn try_set(&mut self, p: usize, t: Trit) -> Result<()> {
        check_position(p)?;
        self.set(p, t);
        Ok(())
    }

    #[inline]
    pub const fn is_true(&self, p: usize) -> bool {
        self.get(p).is_true()
    }

    #[inline]
    pub const fn is_nil(&self, p: usize) -> bool {
        self.get(p).is_nil()
    }

    #[inline]
    pub const fn is_false(&self, p: usize) -> bool {
        self.get(p).is_false()
    }

    /// Digit at `p` as seen by whole-number operations: NIL at or above `len`.
    #[inline]
    pub const fn digit(&self, p: usize) -> Trit {
        if p < self.len as usize {
            self.get(p)
        } else {
            Trit::O
        }
    }

    /// The significant digits, least significant first.
    pub fn trits(&self) -> impl Iterator<Item = Trit> + '_ {
        (0..self.len as usize).map(move |p| self.get(p))
    }

    // ------------------------------------------------------------------------
    // Whole-number operations
    // ------------------------------------------------------------------------

    /// Sign of the number: the most significant non-NIL trit in `[0, len)`,
    /// or NIL if there is none.
    pub fn sign(&self) -> Trit {
        for p in (0..self.len as usize).rev() {
            let t = self.get(p);
            if !t.is_nil() {
                return t;
            }
        }
        Trit::O
    }

    /// Apply a one-input gate to every position in `[0, len)`.
    pub fn map(&self, gate: UnaryFn) -> Self {
        let mut result = Self::new(self.len);
        for p in 0..self.len as usize {
            result.set(p, gate(self.get(p)));
        }
        result
    }

    /// Apply a two-input gate position by position over the longer of the two
    /// declared lengths. Both operands are read from their raw fields, so bits
    /// above the shorter operand's length take part.
    pub fn zip_with(&self, other: &Self, gate: BinaryFn) -> Self {
        let len = self.len.max(other.len);
        let mut result = Self::new(len);
        for p in 0..len as usize {
            result.set(p, gate(self.get(p), other.get(p)));
        }
        result
    }

    /// Arithmetic negation: every digit flipped.
    pub fn neg(&self) -> Self {
        self.map(Trit::neg)
    }

    /// Raw shift of both fields by `|d|` positions.
    ///
    /// `d > 0` moves digits toward position 0, `d < 0` toward the top. Digits
    /// leaving the 32-bit fields are lost and vacated positions read NIL.
    /// Shifting by 32 or more clears everything. The length is unchanged.
    pub fn shift(&self, d: i32) -> Self {
        let n = d.unsigned_abs();
        let (low, sign) = if d > 0 {
            (self.low.checked_shr(n).unwrap_or(0), self.sign.checked_shr(n).unwrap_or(0))
        } else if d < 0 {
            (self.low.checked_shl(n).unwrap_or(0), self.sign.checked_shl(n).unwrap_or(0))
        } else {
            (self.low, self.sign)
        };
        Self { len: self.len, low, sign }
    }

    // ------------------------------------------------------------------------
    // Integer conversion
    // ------------------------------------------------------------------------

    /// Largest magnitude representable in `len` trits: (3^len - 1) / 2.
    pub const fn max_value(len: u8) -> i64 {
        (pow3(clamp_len(len) as u32) - 1) / 2
    }

    /// Encode `value` into `len` trits.
    pub fn from_i64(value: i64, len: u8) -> Result<Self> {
        let len = clamp_len(len);
        let max = Self::max_value(len);
        if value > max || value < -max {
            return Err(TritError::ValueOutOfRange { value, length: len });
        }

        let mut result = Self::new(len);
        let mut rest = value;
        let mut p = 0;
        while rest != 0 {
            let (digit, next) = match rest.rem_euclid(3) {
                1 => (Trit::P, (rest - 1) / 3),
                2 => (Trit::N, (rest + 1) / 3),
                _ => (Trit::O, rest / 3),
            };
            result.set(p, digit);
            rest = next;
            p += 1;
        }
        Ok(result)
    }

    /// Decimal value of the digits in `[0, len)`.
    pub fn to_i64(&self) -> i64 {
        self.trits()
            .enumerate()
            .map(|(p, t)| t.to_i8() as i64 * pow3(p as u32))
            .sum()
    }

    // ------------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------------

    fn render<F: Fn(Trit) -> String>(&self, sep: &str, f: F) -> String {
        (0..self.len as usize)
            .rev()
            .map(|p| f(self.get(p)))
            .collect::<Vec<_>>()
            .join(sep)
    }

    /// '-', '0', '+' per digit, most significant first.
    pub fn to_symbols(&self) -> String {
        self.render("", |t| t.symbol().to_string())
    }

    /// 'M', 'N', 'P' per digit, most significant first.
    pub fn to_chars(&self) -> String {
        self.render("", |t| t.symbol_char().to_string())
    }

    /// "-1", "0", "1" per digit, space separated, most significant first.
    pub fn to_numeric(&self) -> String {
        self.render(" ", |t| t.symbol_numeric().to_string())
    }

    /// "%false", "%nil", "%true" per digit, most significant first.
    pub fn to_logic(&self) -> String {
        self.render(" ", |t| t.symbol_logic().to_string())
    }
}

#[inline]
const fn clamp_len(len: u8) -> u8 {
    if len > TritString::CAPACITY {
        TritString::CAPACITY
    } else {
        len
    }
}

#[inline]
const fn len_mask(len: u8) -> u32 {
    if len >= TritString::CAPACITY {
        u32::MAX
    } else {
        (1u32 << len) - 1
    }
}

#[inline]
const fn bit(p: usize) -> Option<u32> {
    if p < TritString::CAPACITY as usize {
        Some(1u32 << p)
    } else {
        None
    }
}

fn check_position(p: usize) -> Result<()> {
    if p < TritString::CAPACITY as usize {
        Ok(())
    } else {
        Err(TritError::IndexOutOfRange { position: p, capacity: TritString::CAPACITY as usize })
    }
}

impl fmt::Debug for TritString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TritString[{}](0t{} = {})", self.len, self.to_symbols(), self.to_i64())
    }
}

impl fmt::Display for TritString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0t{}", self.to_symbols())
    }
}

impl ops::Neg for TritString {
    type Output = Self;

    fn neg(self) -> Self::Output {
        TritString::neg(&self)
    }
}

impl ops::Add for TritString {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        crate::ternary::arith::add(&self, &rhs)
    }
}

impl ops::Sub for TritString {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        crate::ternary::arith::sub(&self, &rhs)
    }
}

impl ops::BitAnd for TritString {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        crate::ternary::arith::and(&self, &rhs)
    }
}

impl ops::BitOr for TritString {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        crate::ternary::arith::or(&self, &rhs)
    }
}

impl ops::BitXor for TritString {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        crate::ternary::arith::xor(&self, &rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(len: u8, digits: &[i8]) -> TritString {
        let mut ts = TritString::new(len);
        for (p, &d) in digits.iter().enumerate() {
            ts.set_trit(p, d);
        }
        ts
    }

    #[test]
    fn test_new_is_nil() {
        let ts = TritString::new(9);
        assert_eq!(ts.len(), 9);
        assert!(ts.is_zero());
        assert!((0..32).all(|p| ts.is_nil(p)));
        assert_eq!(TritString::zero().len(), 0);
    }

    #[test]
    fn test_length_clamped() {
        assert_eq!(TritString::new(200).len(), 32);
        let mut ts = TritString::new(3);
        ts.set_len(40);
        assert_eq!(ts.len(), 32);
    }

    #[test]
    fn test_encoding_fields() {
        let ts = pattern(3, &[1, 0, -1]);
        assert_eq!(ts.low_bits(), 0b101);
        assert_eq!(ts.sign_bits(), 0b001);
    }

    #[test]
    fn test_from_bits_drops_orphan_sign() {
        let ts = TritString::from_bits(4, 0b0011, 0b1110);
        assert_eq!(ts.sign_bits(), 0b0010);
        assert_eq!(ts.get(0), Trit::N);
        assert_eq!(ts.get(1), Trit::P);
        assert_eq!(ts.get(3), Trit::O);
    }

    #[test]
    fn test_set_overwrites_both_fields() {
        let mut ts = TritString::new(1);
        ts.set_true(0);
        ts.set_false(0);
        assert_eq!(ts.sign_bits(), 0);
        assert!(ts.is_false(0));
        ts.clear(0);
        assert_eq!((ts.low_bits(), ts.sign_bits()), (0, 0));
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let mut ts = pattern(32, &[1]);
        let before = ts;
        ts.set_true(32);
        ts.set_false(1000);
        assert_eq!(ts, before);
        assert_eq!(ts.get(32), Trit::O);
        assert_eq!(ts.get_trit(usize::MAX), 0);
    }

    #[test]
    fn test_checked_index() {
        let mut ts = TritString::new(32);
        assert!(ts.try_set(31, Trit::P).is_ok());
        assert_eq!(ts.try_get(31), Ok(Trit::P));
        assert_eq!(
            ts.try_set(32, Trit::P),
            Err(TritError::IndexOutOfRange { position: 32, capacity: 32 })
        );
        assert!(ts.try_get(99).is_err());
    }

    #[test]
    fn test_sign_most_significant_wins() {
        assert_eq!(pattern(3, &[1, 0, -1]).sign(), Trit::N);
        assert_eq!(pattern(3, &[-1, 1, 0]).sign(), Trit::P);
        assert_eq!(TritString::new(3).sign(), Trit::O);
    }

    #[test]
    fn test_sign_ignores_digits_past_len() {
        let mut ts = pattern(2, &[1]);
        ts.set_false(5);
        assert_eq!(ts.sign(), Trit::P);
        assert_eq!(ts.with_len(6).sign(), Trit::N);
    }

    #[test]
    fn test_integer_roundtrip() {
        for v in [-9841i64, -42, -1, 0, 1, 8, 42, 9841] {
            assert_eq!(TritString::from_i64(v, 9).unwrap().to_i64(), v);
        }
        let max = TritString::max_value(32);
        assert_eq!(TritString::from_i64(max, 32).unwrap().to_i64(), max);
        assert_eq!(TritString::from_i64(-max, 32).unwrap().to_i64(), -max);
    }

    #[test]
    fn test_integer_out_of_range() {
        assert_eq!(
            TritString::from_i64(9842, 9),
            Err(TritError::ValueOutOfRange { value: 9842, length: 9 })
        );
        assert!(TritString::from_i64(1, 0).is_err());
        assert_eq!(TritString::from_i64(0, 0).unwrap().to_i64(), 0);
    }

    #[test]
    fn test_known_digits() {
        // 8 = 9 - 1 = 0t+0-
        let ts = TritString::from_i64(8, 3).unwrap();
        assert_eq!(ts.to_symbols(), "+0-");
        assert_eq!(ts.to_chars(), "PNM");
        assert_eq!(ts.to_numeric(), "1 0 -1");
        assert_eq!(ts.to_logic(), "%true %nil %false");
        assert_eq!(format!("{}", ts), "0t+0-");
        assert_eq!(format!("{:?}", ts), "TritString[3](0t+0- = 8)");
    }

    #[test]
    fn test_neg() {
        let ts = TritString::from_i64(-123, 9).unwrap();
        assert_eq!((-ts).to_i64(), 123);
    }

    #[test]
    fn test_shift_directions() {
        let one = TritString::from_i64(1, 9).unwrap();
        assert_eq!(one.shift(-2).to_i64(), 9);
        assert_eq!(TritString::from_i64(27, 9).unwrap().shift(3).to_i64(), 1);
        assert_eq!(one.shift(0), one);
    }

    #[test]
    fn test_shift_saturates() {
        let ts = pattern(32, &[1, -1, 1]).with(31, Trit::P);
        for d in [32, 33, 127, -32, -40, i32::MIN, i32::MAX] {
            let shifted = ts.shift(d);
            assert_eq!((shifted.low_bits(), shifted.sign_bits()), (0, 0), "shift by {}", d);
            assert_eq!(shifted.len(), 32);
        }
        assert!(ts.shift(-1).is_nil(0));
        assert_eq!(ts.shift(31).get(0), Trit::P);
    }

    #[test]
    fn test_zip_with_length() {
        let a = pattern(2, &[1, 1]);
        let b = pattern(5, &[-1, 0, 0, 0, 1]);
        let r = a.zip_with(&b, crate::ternary::gates::or);
        assert_eq!(r.len(), 5);
        assert_eq!(r.to_symbols(), "+00++");
    }

    #[test]
    fn test_zip_with_reads_bits_past_shorter_len() {
        let mut x = TritString::new(2);
        x.set_true(4);
        let mut y = TritString::new(5);
        y.set_true(4);
        y.set_false(3);
        x.set_true(3);

        let min = x.zip_with(&y, crate::ternary::gates::and);
        assert_eq!(min.get(4), Trit::P);
        assert_eq!(min.get(3), Trit::N);
        let max = x.zip_with(&y, crate::ternary::gates::or);
        assert_eq!(max.get(3), Trit::P);
    }

    #[test]
    fn test_clear_all_zeroes_length() {
        let mut ts = pattern(7, &[1, -1, 0, 1]).with(20, Trit::N);
        ts.clear_all();
        assert_eq!((ts.low_bits(), ts.sign_bits(), ts.len()), (0, 0, 0));
        assert_eq!(ts, TritString::zero());
    }

    #[test]
    fn test_clear_digits_keeps_length() {
        let mut ts = pattern(7, &[1, -1, 0, 1]).with(20, Trit::P);
        ts.clear_digits();
        assert_eq!((ts.low_bits(), ts.sign_bits()), (0, 0));
        assert_eq!(ts.len(), 7);
        assert_eq!(ts, TritString::new(7));
    }
}
