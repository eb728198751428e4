//! Setun-1958 register file, laid out in front-panel order.
//!
//! Every register is a [`TritString`] with a fixed declared length:
//! - K(1:9): instruction code / memory cell address
//! - F(1:5): index register
//! - C(1:5): program counter
//! - W(1:1): sign of the last result
//! - PH1, PH2 (1:1): overflow digits
//! - S(1:18): accumulator
//! - R(1:18): multiplier register
//! - MB(1:4): magnetic drum zone
//! - MR(1:9): scratch register for exchanging values
//!
//! The registers hold state only; nothing here decodes or runs instructions.

use serde::Serialize;

use crate::ternary::{Trit, TritString};

/// Declared lengths, in trits.
pub mod width {
    pub const K: u8 = 9;
    pub const F: u8 = 5;
    pub const C: u8 = 5;
    pub const W: u8 = 1;
    pub const PH1: u8 = 1;
    pub const PH2: u8 = 1;
    pub const S: u8 = 18;
    pub const R: u8 = 18;
    pub const MB: u8 = 4;
    pub const MR: u8 = 9;
}

/// The Setun-1958 register file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Registers {
    pub k: TritString,
    pub f: TritString,
    pub c: TritString,
    pub w: TritString,
    pub ph1: TritString,
    pub ph2: TritString,
    pub s: TritString,
    pub r: TritString,
    pub mb: TritString,
    pub mr: TritString,
}

impl Registers {
    /// Register names in front-panel order.
    pub const NAMES: [&'static str; 10] = ["K", "F", "C", "W", "PH1", "PH2", "S", "R", "MB", "MR"];

    /// Create a new register file with all values zeroed.
    pub fn new() -> Self {
        Self {
            k: TritString::new(width::K),
            f: TritString::new(width::F),
            c: TritString::new(width::C),
            w: TritString::new(width::W),
            ph1: TritString::new(width::PH1),
            ph2: TritString::new(width::PH2),
            s: TritString::new(width::S),
            r: TritString::new(width::R),
            mb: TritString::new(width::MB),
            mr: TritString::new(width::MR),
        }
    }

    /// Zero every register and restore its declared length.
    pub fn reset(&mut self) {
        let registers = [
            (&mut self.k, width::K),
            (&mut self.f, width::F),
            (&mut self.c, width::C),
            (&mut self.w, width::W),
            (&mut self.ph1, width::PH1),
            (&mut self.ph2, width::PH2),
            (&mut self.s, width::S),
            (&mut self.r, width::R),
            (&mut self.mb, width::MB),
            (&mut self.mr, width::MR),
        ];
        for (reg, len) in registers {
            reg.clear_all();
            reg.set_len(len);
        }
        tracing::debug!("register file reset");
    }

    /// Look up a register by its panel name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&TritString> {
        match name.to_ascii_uppercase().as_str() {
            "K" => Some(&self.k),
            "F" => Some(&self.f),
            "C" => Some(&self.c),
            "W" => Some(&self.w),
            "PH1" => Some(&self.ph1),
            "PH2" => Some(&self.ph2),
            "S" => Some(&self.s),
            "R" => Some(&self.r),
            "MB" => Some(&self.mb),
            "MR" => Some(&self.mr),
            _ => None,
        }
    }

    /// Mutable lookup by panel name (case-insensitive).
    pub fn get_mut(&mut self, name: &str) -> Option<&mut TritString> {
        match name.to_ascii_uppercase().as_str() {
            "K" => Some(&mut self.k),
            "F" => Some(&mut self.f),
            "C" => Some(&mut self.c),
            "W" => Some(&mut self.w),
            "PH1" => Some(&mut self.ph1),
            "PH2" => Some(&mut self.ph2),
            "S" => Some(&mut self.s),
            "R" => Some(&mut self.r),
            "MB" => Some(&mut self.mb),
            "MR" => Some(&mut self.mr),
            _ => None,
        }
    }

    /// `(name, register)` pairs in front-panel order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &TritString)> + '_ {
        Self::NAMES.into_iter().filter_map(move |name| self.get(name).map(|reg| (name, reg)))
    }

    /// Store the sign of `value` in W.
    pub fn set_sign_from(&mut self, value: &TritString) {
        self.w.set(0, value.sign());
    }

    /// The single W trit.
    pub fn sign(&self) -> Trit {
        self.w.get(0)
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ternary::arith;

    #[test]
    fn test_declared_lengths() {
        let regs = Registers::new();
        let lengths: Vec<u8> = regs.iter().map(|(_, r)| r.len()).collect();
        assert_eq!(lengths, vec![9, 5, 5, 1, 1, 1, 18, 18, 4, 9]);
        assert!(regs.iter().all(|(_, r)| r.is_zero()));
    }

    #[test]
    fn test_reset_restores_lengths() {
        let mut regs = Registers::new();
        regs.s = TritString::from_i64(12345, 18).unwrap();
        regs.k.set_len(0);
        regs.mb.set_true(3);
        regs.w.set_false(0);
        regs.mr = regs.mr.shift(-30).with(31, Trit::P).with_len(32);
        regs.reset();
        assert!(regs.iter().all(|(_, r)| r.low_bits() == 0 && r.sign_bits() == 0));
        assert_eq!(regs, Registers::new());
        assert_eq!(regs.k.len(), 9);
    }

    #[test]
    fn test_lookup_by_name() {
        let mut regs = Registers::new();
        regs.get_mut("ph1").unwrap().set_false(0);
        assert_eq!(regs.get("PH1").unwrap().get(0), Trit::N);
        assert!(regs.get("X").is_none());
    }

    #[test]
    fn test_accumulator_roundtrip() {
        let mut regs = Registers::new();
        regs.k.set_true(0);
        let s = arith::add(&regs.k, &regs.k);
        regs.s = s;
        regs.set_sign_from(&s);
        assert_eq!(regs.sign(), Trit::P);

        let s = arith::sub(&regs.s, &regs.s);
        regs.s = s;
        regs.set_sign_from(&s);
        assert!(regs.s.is_zero());
        assert_eq!(regs.sign(), Trit::O);
    }

    #[test]
    fn test_serializes_by_name() {
        let json = serde_json::to_value(Registers::new()).unwrap();
        assert_eq!(json["s"]["len"], 18);
        assert_eq!(json["mb"]["low"], 0);
    }
}
