//! Multi-trit arithmetic on packed trit-strings.
//!
//! Provides ripple-carry addition and subtraction, tritwise logic and
//! shifting. Every function takes its operands by reference and returns a
//! new value.
//!
//! The plain [`add`] and [`sub`] drop a carry out of the top position, like
//! a fixed-width register would. [`overflowing_add`] and [`overflowing_sub`]
//! hand that carry back, and [`checked_add`] and [`checked_sub`] turn it into
//! [`TritError::Overflow`].

use crate::error::{Result, TritError};
use crate::ternary::gates;
use crate::ternary::trit::digit_carry;
use crate::ternary::{Trit, TritString};

/// Ripple `x + y` (or `x - y`) across the longer declared length.
///
/// Returns the digits and the carry out of the last position.
fn ripple(x: &TritString, y: &TritString, subtract: bool) -> (TritString, Trit) {
    let len = x.len().max(y.len());
    let mut result = TritString::new(len);
    let mut carry: i8 = 0;

    for p in 0..len as usize {
        let a = x.digit(p).to_i8();
        let b = y.digit(p).to_i8();
        let b = if subtract { -b } else { b };
        let (digit, carry_out) = digit_carry(a + b + carry);
        result.set_trit(p, digit);
        carry = carry_out;
    }

    (result, Trit::from(carry))
}

/// Add two trit-strings, returning (result, carry_out).
pub fn overflowing_add(x: &TritString, y: &TritString) -> (TritString, Trit) {
    ripple(x, y, false)
}

/// Subtract two trit-strings (x - y), returning (result, borrow_out).
pub fn overflowing_sub(x: &TritString, y: &TritString) -> (TritString, Trit) {
    ripple(x, y, true)
}

/// `x + y`, silently dropping any carry past the top position.
#[inline]
pub fn add(x: &TritString, y: &TritString) -> TritString {
    overflowing_add(x, y).0
}

/// `x - y`, silently dropping any borrow past the top position.
#[inline]
pub fn sub(x: &TritString, y: &TritString) -> TritString {
    overflowing_sub(x, y).0
}

/// `x + y`, failing if a carry leaves the top position.
pub fn checked_add(x: &TritString, y: &TritString) -> Result<TritString> {
    no_carry(overflowing_add(x, y))
}

/// `x - y`, failing if a borrow leaves the top position.
pub fn checked_sub(x: &TritString, y: &TritString) -> Result<TritString> {
    no_carry(overflowing_sub(x, y))
}

fn no_carry((result, carry): (TritString, Trit)) -> Result<TritString> {
    if carry.is_nil() {
        Ok(result)
    } else {
        tracing::debug!(?carry, len = result.len(), "carry overflowed trit-string");
        Err(TritError::Overflow { carry })
    }
}

/// Tritwise AND (minimum).
#[inline]
pub fn and(x: &TritString, y: &TritString) -> TritString {
    x.zip_with(y, gates::and)
}

/// Tritwise OR (maximum).
#[inline]
pub fn or(x: &TritString, y: &TritString) -> TritString {
    x.zip_with(y, gates::or)
}

/// Tritwise XOR.
#[inline]
pub fn xor(x: &TritString, y: &TritString) -> TritString {
    x.zip_with(y, gates::xor)
}

/// Negate every digit.
#[inline]
pub fn negate(x: &TritString) -> TritString {
    x.neg()
}

/// Shift by `d` positions: `d > 0` toward position 0, `d < 0` toward the top.
#[inline]
pub fn shift(x: &TritString, d: i32) -> TritString {
    x.shift(d)
}

/// Sign of `x`, as an integer in {-1, 0, 1}.
#[inline]
pub fn sign(x: &TritString) -> i8 {
    x.sign().to_i8()
}
