//! Policies for the two silent behaviors of the packed arithmetic.
//!
//! Out-of-range trit positions and carries past the top position are
//! silently absorbed by default. [`ArithConfig`] lets a caller opt into
//! typed errors for either one.

use std::path::Path;
use serde::{Serialize, Deserialize};

use crate::error::{Result, TritError};
use crate::ternary::{arith, Trit, TritString};

/// What to do with a trit position outside the 32-trit capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexPolicy {
    /// Reads return NIL, writes are ignored.
    #[default]
    Clamp,
    /// Fail with [`TritError::IndexOutOfRange`].
    Strict,
}

/// What to do with a carry out of the most significant declared position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarryPolicy {
    /// Discard it.
    #[default]
    Drop,
    /// Fail with [`TritError::Overflow`].
    Checked,
}

/// Arithmetic configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArithConfig {
    pub index_policy: IndexPolicy,
    pub carry_policy: CarryPolicy,
}

impl ArithConfig {
    /// Both policies set to fail loudly.
    pub const fn strict() -> Self {
        Self {
            index_policy: IndexPolicy::Strict,
            carry_policy: CarryPolicy::Checked,
        }
    }

    /// Parse a JSON document such as `{"index_policy": "strict"}`.
    /// Missing fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| TritError::Config(e.to_string()))
    }

    /// Read a JSON configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| TritError::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_json(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded arithmetic config");
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| TritError::Config(e.to_string()))
    }

    /// Read the trit at `p` under the index policy.
    pub fn get_trit(&self, ts: &TritString, p: usize) -> Result<Trit> {
        match self.index_policy {
            IndexPolicy::Clamp => Ok(ts.get(p)),
            IndexPolicy::Strict => ts.try_get(p).map_err(trace_error),
        }
    }

    /// Write the trit at `p` under the index policy.
    pub fn set_trit(&self, ts: &mut TritString, p: usize, t: Trit) -> Result<()> {
        match self.index_policy {
            IndexPolicy::Clamp => {
                ts.set(p, t);
                Ok(())
            }
            IndexPolicy::Strict => ts.try_set(p, t).map_err(trace_error),
        }
    }

    /// `x + y` under the carry policy.
    pub fn add(&self, x: &TritString, y: &TritString) -> Result<TritString> {
        match self.carry_policy {
            CarryPolicy::Drop => Ok(arith::add(x, y)),
            CarryPolicy::Checked => arith::checked_add(x, y),
        }
    }

    /// `x - y` under the carry policy.
    pub fn sub(&self, x: &TritString, y: &TritString) -> Result<TritString> {
        match self.carry_policy {
            CarryPolicy::Drop => Ok(arith::sub(x, y)),
            CarryPolicy::Checked => arith::checked_sub(x, y),
        }
    }
}

fn trace_error(e: TritError) -> TritError {
    tracing::debug!(error = %e, "strict index policy rejected access");
    e
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_lenient() {
        let config = ArithConfig::default();
        let mut ts = TritString::new(4);
        assert_eq!(config.get_trit(&ts, 40), Ok(Trit::O));
        assert!(config.set_trit(&mut ts, 40, Trit::P).is_ok());
        assert!(ts.is_zero());

        let max = TritString::from_i64(40, 4).unwrap();
        let one = TritString::from_i64(1, 4).unwrap();
        assert_eq!(config.add(&max, &one).unwrap().to_i64(), 41 - 81);
    }

    #[test]
    fn test_strict_policies() {
        let config = ArithConfig::strict();
        let mut ts = TritString::new(4);
        assert!(matches!(
            config.get_trit(&ts, 32),
            Err(TritError::IndexOutOfRange { position: 32, .. })
        ));
        assert!(config.set_trit(&mut ts, 3, Trit::N).is_ok());
        assert!(config.set_trit(&mut ts, 32, Trit::N).is_err());

        let max = TritString::from_i64(40, 4).unwrap();
        let one = TritString::from_i64(1, 4).unwrap();
        assert_eq!(config.add(&max, &one), Err(TritError::Overflow { carry: Trit::P }));
        assert_eq!(config.sub(&max, &one).unwrap().to_i64(), 39);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = ArithConfig::from_json(r#"{"carry_policy": "checked"}"#).unwrap();
        assert_eq!(config.index_policy, IndexPolicy::Clamp);
        assert_eq!(config.carry_policy, CarryPolicy::Checked);

        let text = ArithConfig::strict().to_json().unwrap();
        assert_eq!(ArithConfig::from_json(&text).unwrap(), ArithConfig::strict());
    }

    #[test]
    fn test_json_rejects_unknown_policy() {
        assert!(matches!(
            ArithConfig::from_json(r#"{"index_policy": "wrap"}"#),
            Err(TritError::Config(_))
        ));
    }
}
