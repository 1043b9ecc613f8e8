//! BridgingKey - the value combination a bridging statement is authored for.

use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{ValidationError, ValueId};

/// An order-independent set of one or two value ids.
///
/// `fairness+freedom` and `freedom+fairness` are the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BridgingKey(Vec<ValueId>);

impl BridgingKey {
    /// Key for a single top value.
    pub fn single(value_id: ValueId) -> Self {
        Self(vec![value_id])
    }

    /// Key for a pair of values. A pair of identical ids collapses to a single key.
    pub fn pair(a: ValueId, b: ValueId) -> Self {
        let mut ids = vec![a, b];
        ids.sort();
        ids.dedup();
        Self(ids)
    }

    pub fn value_ids(&self) -> &[ValueId] {
        &self.0
    }

    pub fn is_pair(&self) -> bool {
        self.0.len() == 2
    }
}

impl fmt::Display for BridgingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<&str> = self.0.iter().map(ValueId::as_str).collect();
        write!(f, "{}", ids.join("+"))
    }
}

impl FromStr for BridgingKey {
    type Err = ValidationError;

    /// Parses `"a"` or `"a+b"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('+').map(str::trim).collect();
        match parts.as_slice() {
            [a] => Ok(Self::single(ValueId::try_new(*a)?)),
            [a, b] => Ok(Self::pair(ValueId::try_new(*a)?, ValueId::try_new(*b)?)),
            _ => Err(ValidationError::invalid_format(
                "bridging_key",
                format!("expected 'value' or 'value+value', got '{}'", s),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_is_order_independent() {
        let ab = BridgingKey::pair("truth".into(), "voice".into());
        let ba = BridgingKey::pair("voice".into(), "truth".into());

        assert_eq!(ab, ba);
        assert_eq!(ab.to_string(), "truth+voice");
        assert!(ab.is_pair());
    }

    #[test]
    fn pair_of_same_value_collapses() {
        let key = BridgingKey::pair("truth".into(), "truth".into());
        assert_eq!(key, BridgingKey::single("truth".into()));
    }

    #[test]
    fn parse_accepts_single_and_pair() {
        let single: BridgingKey = "fairness".parse().unwrap();
        let pair: BridgingKey = "freedom + fairness".parse().unwrap();

        assert_eq!(single, BridgingKey::single("fairness".into()));
        assert_eq!(pair.to_string(), "fairness+freedom");
    }

    #[test]
    fn parse_rejects_malformed_keys() {
        assert!("a+b+c".parse::<BridgingKey>().is_err());
        assert!("a+".parse::<BridgingKey>().is_err());
        assert!("".parse::<BridgingKey>().is_err());
    }
}
