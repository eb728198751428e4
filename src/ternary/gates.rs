//! Ternary logic gate tables.
//!
//! Every gate is a literal 3x3 (or 3x1) truth table. Tables are indexed by
//! [`Trit::index`], so rows are the first operand and columns the second,
//! both in the order `-`, `0`, `+`. Nothing is derived from anything else:
//! each table can be checked on its own against the reference below.

use std::fmt;
use std::str::FromStr;

use crate::error::TritError;
use crate::ternary::Trit;

/// Signature of a two-input gate.
pub type BinaryFn = fn(Trit, Trit) -> Trit;

/// Signature of a one-input gate.
pub type UnaryFn = fn(Trit) -> Trit;

/// A 3x3 truth table, `table[a.index()][b.index()]`.
pub type Table = [[Trit; 3]; 3];

const F: Trit = Trit::N;
const Z: Trit = Trit::O;
const T: Trit = Trit::P;

#[inline]
const fn lookup(table: &Table, a: Trit, b: Trit) -> Trit {
    table[a.index()][b.index()]
}

// ============================================================================
// Unary gates
// ============================================================================

const NOT: [Trit; 3] = [T, Z, F];

/// Ternary complement. Not arithmetic negation: `-` stays `-`.
const NEG: [Trit; 3] = [F, T, Z];

/// Ternary NOT: `-` and `+` swap, `0` stays.
#[inline]
pub const fn not(a: Trit) -> Trit {
    NOT[a.index()]
}

/// Ternary complement: `-` -> `-`, `0` -> `+`, `+` -> `0`.
#[inline]
pub const fn neg(a: Trit) -> Trit {
    NEG[a.index()]
}

/// Named one-input gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryGate {
    Not,
    Neg,
}

impl UnaryGate {
    pub const ALL: [UnaryGate; 2] = [UnaryGate::Not, UnaryGate::Neg];

    pub const fn name(self) -> &'static str {
        match self {
            UnaryGate::Not => "not",
            UnaryGate::Neg => "neg",
        }
    }

    pub const fn func(self) -> UnaryFn {
        match self {
            UnaryGate::Not => not,
            UnaryGate::Neg => neg,
        }
    }

    #[inline]
    pub fn apply(self, a: Trit) -> Trit {
        (self.func())(a)
    }
}

// ============================================================================
// Binary gates
// ============================================================================

macro_rules! gate_catalog {
    ($(
        $(#[$doc:meta])*
        $variant:ident, $func:ident, $name:literal, $table:ident = $rows:expr;
    )*) => {
        $(
            const $table: Table = $rows;

            $(#[$doc])*
            #[inline]
            pub const fn $func(a: Trit, b: Trit) -> Trit {
                lookup(&$table, a, b)
            }
        )*

        /// Named two-input gates, one per truth table in this module.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Gate {
            $($variant,)*
        }

        impl Gate {
            /// Every binary gate, in catalog order.
            pub const ALL: &'static [Gate] = &[$(Gate::$variant,)*];

            /// Stable lowercase name, used by the CLI.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Gate::$variant => $name,)*
                }
            }

            /// The gate's full truth table.
            pub const fn table(self) -> &'static Table {
                match self {
                    $(Gate::$variant => &$table,)*
                }
            }

            /// The gate as a plain function pointer.
            pub const fn func(self) -> BinaryFn {
                match self {
                    $(Gate::$variant => $func,)*
                }
            }
        }
    };
}

gate_catalog! {
    /// AND = MIN(a, b).
    And, and, "and", AND = [
        [F, F, F],
        [F, Z, Z],
        [F, Z, T],
    ];
    /// OR = MAX(a, b).
    Or, or, "or", OR = [
        [F, Z, T],
        [Z, Z, T],
        [T, T, T],
    ];
    /// XOR: `0` absorbs, equal extremes give `-`, differing give `+`.
    Xor, xor, "xor", XOR = [
        [F, Z, T],
        [Z, Z, Z],
        [T, Z, F],
    ];
    /// EQV = NOT(XOR(a, b)).
    Eqv, eqv, "eqv", EQV = [
        [T, Z, F],
        [Z, Z, Z],
        [F, Z, T],
    ];
    /// NAND = NOT(AND(a, b)).
    Nand, nand, "nand", NAND = [
        [T, T, T],
        [T, Z, Z],
        [T, Z, F],
    ];
    /// NOR = NOT(OR(a, b)).
    Nor, nor, "nor", NOR = [
        [T, Z, F],
        [Z, Z, F],
        [F, F, F],
    ];
    Imp, imp, "imp", IMP = [
        [T, T, T],
        [Z, Z, Z],
        [F, Z, T],
    ];
    /// MAX(a, b) when the operands differ. Equal operands give `-`.
    Xmax, xmax, "xmax", XMAX = [
        [F, Z, T],
        [Z, F, T],
        [T, T, F],
    ];
    Ixmax, ixmax, "ixmax", IXMAX = [
        [T, F, F],
        [F, T, Z],
        [F, Z, T],
    ];
    /// How "middle" the operands are: `+` for two zeros, `0` if one is zero.
    Mean, mean, "mean", MEAN = [
        [F, Z, F],
        [Z, T, Z],
        [F, Z, F],
    ];
    /// Comparison: `-` if a < b, `0` if a = b, `+` if a > b. Not symmetric.
    Magnitude, magnitude, "magnitude", MAGNITUDE = [
        [Z, F, F],
        [T, Z, F],
        [T, T, Z],
    ];
    /// Sum digit of a + b modulo 3.
    AddMod, add_mod, "add-mod", ADD_MOD = [
        [T, F, Z],
        [F, Z, T],
        [Z, T, F],
    ];
    /// Carry of a + b modulo 3.
    CarryAddMod, carry_add_mod, "carry-add-mod", CARRY_ADD_MOD = [
        [F, Z, Z],
        [Z, Z, Z],
        [Z, Z, T],
    ];
    /// a + b clamped to a single trit.
    AddSaturating, add_saturating, "add-sat", ADD_SATURATING = [
        [F, F, Z],
        [F, Z, T],
        [Z, T, T],
    ];
    Webb, webb, "webb", WEBB = [
        [Z, T, F],
        [T, T, F],
        [F, F, F],
    ];
    IdentityStrict, identity_strict, "identity-strict", IDENTITY_STRICT = [
        [T, F, F],
        [F, T, F],
        [F, F, T],
    ];
    /// Weak identity, the same shape as multiplication.
    IdentityWeak, identity_weak, "identity-weak", IDENTITY_WEAK = [
        [T, Z, F],
        [Z, Z, Z],
        [F, Z, T],
    ];
    /// Strong Lukasiewicz conjunction.
    LukasiewiczAnd, lukasiewicz_and, "lukasiewicz-and", LUKASIEWICZ_AND = [
        [F, F, F],
        [F, F, Z],
        [F, Z, T],
    ];
    LukasiewiczImp, lukasiewicz_imp, "lukasiewicz-imp", LUKASIEWICZ_IMP = [
        [T, Z, F],
        [T, T, Z],
        [T, T, T],
    ];
    KleeneAnd, kleene_and, "kleene-and", KLEENE_AND = [
        [F, Z, F],
        [Z, Z, Z],
        [F, Z, T],
    ];
    KleeneImp, kleene_imp, "kleene-imp", KLEENE_IMP = [
        [T, T, T],
        [Z, Z, Z],
        [F, Z, T],
    ];
    /// Goedel intuitionistic implication.
    GoedelImp, goedel_imp, "goedel-imp", GOEDEL_IMP = [
        [T, F, F],
        [T, T, Z],
        [T, T, T],
    ];
    MaterialImp, material_imp, "material-imp", MATERIAL_IMP = [
        [T, Z, F],
        [T, Z, Z],
        [T, T, T],
    ];
    /// Brusentsov's "following" function.
    Following, following, "following", FOLLOWING = [
        [T, Z, F],
        [Z, Z, Z],
        [Z, Z, T],
    ];
    /// Trit product, never carries.
    Mul, mul, "mul", MUL = [
        [T, Z, F],
        [Z, Z, Z],
        [F, Z, T],
    ];
}

impl Gate {
    /// Look up a gate by its [`name`](Gate::name).
    pub fn from_name(name: &str) -> Option<Gate> {
        Gate::ALL.iter().copied().find(|g| g.name() == name)
    }

    #[inline]
    pub fn apply(self, a: Trit, b: Trit) -> Trit {
        lookup(self.table(), a, b)
    }

    /// True if `f(a, b) == f(b, a)` for every input pair.
    pub fn is_commutative(self) -> bool {
        let t = self.table();
        (0..3).all(|i| (0..3).all(|j| t[i][j] == t[j][i]))
    }
}

impl FromStr for Gate {
    type Err = TritError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gate::from_name(&s.to_ascii_lowercase()).ok_or_else(|| TritError::UnknownGate(s.to_string()))
    }
}

impl fmt::Display for Gate {
    /// Renders the truth table, operand `a` down the side.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name())?;
        writeln!(f, "  | -  0  +")?;
        writeln!(f, "--+---------")?;
        for a in Trit::ALL {
            write!(f, "{} |", a)?;
            for b in Trit::ALL {
                write!(f, " {} ", self.apply(a, b))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
