//! Register scaffold for the Setun-1958 machine.
//!
//! The registers are owned by a caller-constructed [`Registers`] value
//! rather than living in process-wide state.

pub mod registers;

pub use registers::Registers;
