//! # Trit Arithmetic
//!
//! Balanced ternary arithmetic and logic at two levels:
//! single trits with a catalog of ternary logic gates, and packed integers
//! of up to 32 trits with sign, tritwise logic, shifting and carry-propagating
//! addition and subtraction.
//!
//! A small register file modelled on the Soviet Setun (1958) shows the
//! packed type in use.

pub mod ternary;
pub mod config;
pub mod error;
pub mod machine;

// Re-export commonly used types
pub use ternary::{Trit, TritString, TritOps, Gate, UnaryGate};
pub use config::{ArithConfig, IndexPolicy, CarryPolicy};
pub use error::{TritError, Result};
pub use machine::Registers;
