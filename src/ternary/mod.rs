//! Balanced ternary number system primitives.
//!
//! This module provides the core types for working with balanced ternary:
//! - [`Trit`] - A single balanced ternary digit (-1, 0, +1)
//! - [`gates`] - Truth tables for the ternary logic operators
//! - [`TritString`] - A packed integer of up to 32 trits

mod trit;
mod trs;
mod ops;
pub mod gates;
pub mod arith;

pub use trit::{Trit, digit_carry, pow3};
pub use trs::TritString;
pub use ops::TritOps;
pub use gates::{Gate, UnaryGate};
pub use arith::{add, sub, checked_add, checked_sub, overflowing_add, overflowing_sub, shift};
