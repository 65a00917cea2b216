use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static COIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+)([a-z][a-z0-9/]{2,15})$").unwrap());

/// A single denominated token amount, e.g. `10stake`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub amount: u128,
    pub denom: String,
}

impl Coin {
    pub fn new(amount: u128, denom: impl Into<String>) -> Self {
        Coin {
            amount,
            denom: denom.into(),
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// A set of coins with distinct denominations.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coins(Vec<Coin>);

impl Coins {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coin> {
        self.0.iter()
    }

    /// Structural validity: every amount positive, denominations distinct.
    pub fn is_valid(&self) -> bool {
        for (i, coin) in self.0.iter().enumerate() {
            if coin.amount == 0 {
                return false;
            }
            if self.0[..i].iter().any(|c| c.denom == coin.denom) {
                return false;
            }
        }
        true
    }
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}

/// Parse a comma-separated coin list such as `10stake` or `10stake,5atom`.
///
/// An empty string parses to an empty set; submit-proposal uses this for a
/// proposal without an initial deposit.
pub fn parse_coins(s: &str) -> Result<Coins> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Ok(Coins::default());
    }

    let mut coins = Vec::new();
    for part in trimmed.split(',') {
        let caps = COIN_RE
            .captures(part.trim())
            .ok_or_else(|| Error::InvalidCoins(part.trim().to_string()))?;
        let amount: u128 = caps[1]
            .parse()
            .map_err(|_| Error::InvalidCoins(part.trim().to_string()))?;
        coins.push(Coin::new(amount, &caps[2]));
    }

    let coins = Coins(coins);
    if !coins.is_valid() {
        return Err(Error::InvalidCoins(trimmed.to_string()));
    }
    Ok(coins)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_coin() {
        let coins = parse_coins("10stake").unwrap();
        assert_eq!(coins.iter().count(), 1);
        assert_eq!(coins.to_string(), "10stake");
    }

    #[test]
    fn parses_multiple_coins() {
        let coins = parse_coins("10stake,5atom").unwrap();
        assert_eq!(coins.iter().count(), 2);
        assert!(coins.is_valid());
    }

    #[test]
    fn empty_string_is_empty_set() {
        let coins = parse_coins("").unwrap();
        assert!(coins.is_empty());
        assert!(coins.is_valid());
    }

    #[test]
    fn rejects_zero_amount() {
        assert!(parse_coins("0stake").is_err());
    }

    #[test]
    fn rejects_duplicate_denom() {
        assert!(parse_coins("10stake,5stake").is_err());
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in ["stake", "10", "10 stake", "ten-stake", "10Stake", "-5stake"] {
            assert!(parse_coins(bad).is_err(), "accepted {}", bad);
        }
    }

    #[test]
    fn rejects_short_denom() {
        // denom needs at least three characters
        assert!(parse_coins("10ab").is_err());
        assert!(parse_coins("10abc").is_ok());
    }
}
