use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum length of a registered account name.
pub const MAX_ACCOUNT_ID_LEN: usize = 17;
/// Minimum length of a registered account name.
pub const MIN_ACCOUNT_ID_LEN: usize = 2;

/// A human-readable account identifier as registered on chain.
///
/// This is the name a user types on the command line (`jack`,
/// `validator.one`); the chain address backing it is resolved through the
/// node's auth query, not derived locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AccountId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() < MIN_ACCOUNT_ID_LEN || s.len() > MAX_ACCOUNT_ID_LEN {
            return Err(Error::InvalidAccountId {
                id: s.to_string(),
                reason: format!(
                    "length must be {} to {} characters",
                    MIN_ACCOUNT_ID_LEN, MAX_ACCOUNT_ID_LEN
                ),
            });
        }
        if !s
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.')
        {
            return Err(Error::InvalidAccountId {
                id: s.to_string(),
                reason: "only lowercase letters, digits and '.' are allowed".to_string(),
            });
        }
        if s.starts_with('.') || s.ends_with('.') {
            return Err(Error::InvalidAccountId {
                id: s.to_string(),
                reason: "cannot start or end with '.'".to_string(),
            });
        }
        Ok(AccountId(s.to_string()))
    }
}

/// An opaque chain address, as returned by the node's account auth query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub fn new(addr: impl Into<String>) -> Self {
        Address(addr.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_names() {
        for name in ["jack", "validator.one", "a1", "cooper2025"] {
            assert!(AccountId::from_str(name).is_ok(), "rejected {}", name);
        }
    }

    #[test]
    fn rejects_bad_charset() {
        for name in ["Jack", "jack!", "jack jones", "jäck"] {
            assert!(AccountId::from_str(name).is_err(), "accepted {}", name);
        }
    }

    #[test]
    fn rejects_bad_lengths() {
        assert!(AccountId::from_str("j").is_err());
        assert!(AccountId::from_str("abcdefghijklmnopqr").is_err()); // 18 chars
        assert!(AccountId::from_str("abcdefghijklmnopq").is_ok()); // 17 chars
    }

    #[test]
    fn rejects_leading_trailing_dot() {
        assert!(AccountId::from_str(".jack").is_err());
        assert!(AccountId::from_str("jack.").is_err());
    }
}
