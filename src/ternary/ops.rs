//! Tritwise operations trait.
//!
//! Lets any gate from [`gates`](crate::ternary::gates) be applied the same
//! way to a single trit or to every digit of a trit-string.

use crate::ternary::gates::{self, BinaryFn, Gate, UnaryFn, UnaryGate};
use crate::ternary::{Trit, TritString};

/// Trait for types that support tritwise operations.
pub trait TritOps {
    /// The output type for operations that return a value of the same shape.
    type Output;

    /// Apply a one-input gate to every trit.
    fn tritwise_unary(&self, gate: UnaryFn) -> Self::Output;

    /// Apply a two-input gate to every pair of trits.
    fn tritwise(&self, other: &Self, gate: BinaryFn) -> Self::Output;

    /// Apply a catalog gate by name.
    fn apply_gate(&self, other: &Self, gate: Gate) -> Self::Output {
        self.tritwise(other, gate.func())
    }

    /// Apply a catalog unary gate.
    fn apply_unary(&self, gate: UnaryGate) -> Self::Output {
        self.tritwise_unary(gate.func())
    }

    /// Flip every trit (ternary NOT).
    fn ternary_not(&self) -> Self::Output {
        self.tritwise_unary(gates::not)
    }

    /// Tritwise minimum (ternary AND).
    fn ternary_min(&self, other: &Self) -> Self::Output {
        self.tritwise(other, gates::and)
    }

    /// Tritwise maximum (ternary OR).
    fn ternary_max(&self, other: &Self) -> Self::Output {
        self.tritwise(other, gates::or)
    }

    /// Tritwise XOR.
    fn ternary_xor(&self, other: &Self) -> Self::Output {
        self.tritwise(other, gates::xor)
    }
}

impl TritOps for Trit {
    type Output = Trit;

    #[inline]
    fn tritwise_unary(&self, gate: UnaryFn) -> Trit {
        gate(*self)
    }

    #[inline]
    fn tritwise(&self, other: &Self, gate: BinaryFn) -> Trit {
        gate(*self, *other)
    }
}

impl TritOps for TritString {
    type Output = TritString;

    fn tritwise_unary(&self, gate: UnaryFn) -> TritString {
        self.map(gate)
    }

    fn tritwise(&self, other: &Self, gate: BinaryFn) -> TritString {
        self.zip_with(other, gate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trit_ops_match_gates() {
        for a in Trit::ALL {
            assert_eq!(a.ternary_not(), gates::not(a));
            assert_eq!(a.apply_unary(UnaryGate::Neg), gates::neg(a));
            for b in Trit::ALL {
                assert_eq!(a.ternary_min(&b), gates::and(a, b));
                assert_eq!(a.ternary_max(&b), gates::or(a, b));
                assert_eq!(a.apply_gate(&b, Gate::Webb), gates::webb(a, b));
            }
        }
    }

    #[test]
    fn test_trit_string_min_max() {
        let a = TritString::from_i64(42, 9).unwrap();
        let b = TritString::from_i64(-10, 9).unwrap();
        let min = a.ternary_min(&b);
        let max = a.ternary_max(&b);

        for i in 0..9 {
            assert_eq!(min.get(i), a.get(i).ternary_min(&b.get(i)));
            assert_eq!(max.get(i), a.get(i).ternary_max(&b.get(i)));
        }
    }

    #[test]
    fn test_trit_string_any_gate() {
        let a = TritString::from_i64(12345, 18).unwrap();
        let b = TritString::from_i64(-6789, 18).unwrap();

        for &gate in Gate::ALL {
            let r = a.apply_gate(&b, gate);
            assert_eq!(r.len(), 18);
            for i in 0..18 {
                assert_eq!(r.get(i), gate.apply(a.get(i), b.get(i)), "{} at {}", gate.name(), i);
            }
        }
    }

    #[test]
    fn test_not_is_negation() {
        let a = TritString::from_i64(-2024, 9).unwrap();
        assert_eq!(a.ternary_not().to_i64(), 2024);
        assert_eq!(a.ternary_xor(&a), a.apply_gate(&a, Gate::Xor));
    }
}
