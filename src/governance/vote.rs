use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A vote option on an active proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoteOption {
    Yes,
    Abstain,
    No,
    NoWithVeto,
}

impl VoteOption {
    /// Canonical chain-side name of the option.
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteOption::Yes => "Yes",
            VoteOption::Abstain => "Abstain",
            VoteOption::No => "No",
            VoteOption::NoWithVeto => "NoWithVeto",
        }
    }
}

impl fmt::Display for VoteOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Map user spellings onto the canonical option name before parsing.
///
/// Accepts the snake_case forms shown in command help plus the kebab and
/// collapsed variants users actually type. Unknown strings pass through
/// untouched so the parse error names the original input.
pub fn normalize_vote_option(option: &str) -> String {
    match option.to_ascii_lowercase().as_str() {
        "yes" => "Yes".to_string(),
        "abstain" => "Abstain".to_string(),
        "no" => "No".to_string(),
        "no_with_veto" | "no-with-veto" | "nowithveto" => "NoWithVeto".to_string(),
        _ => option.to_string(),
    }
}

impl FromStr for VoteOption {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_vote_option(s).as_str() {
            "Yes" => Ok(VoteOption::Yes),
            "Abstain" => Ok(VoteOption::Abstain),
            "No" => Ok(VoteOption::No),
            "NoWithVeto" => Ok(VoteOption::NoWithVeto),
            _ => Err(Error::InvalidVoteOption(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_options() {
        assert_eq!(VoteOption::from_str("yes").unwrap(), VoteOption::Yes);
        assert_eq!(VoteOption::from_str("no").unwrap(), VoteOption::No);
        assert_eq!(
            VoteOption::from_str("abstain").unwrap(),
            VoteOption::Abstain
        );
        assert_eq!(
            VoteOption::from_str("no_with_veto").unwrap(),
            VoteOption::NoWithVeto
        );
    }

    #[test]
    fn parses_case_and_synonyms() {
        assert_eq!(VoteOption::from_str("Yes").unwrap(), VoteOption::Yes);
        assert_eq!(VoteOption::from_str("YES").unwrap(), VoteOption::Yes);
        assert_eq!(
            VoteOption::from_str("no-with-veto").unwrap(),
            VoteOption::NoWithVeto
        );
        assert_eq!(
            VoteOption::from_str("NoWithVeto").unwrap(),
            VoteOption::NoWithVeto
        );
    }

    #[test]
    fn rejects_unknown_options() {
        for bad in ["maybe", "yess", "veto", ""] {
            let err = VoteOption::from_str(bad).unwrap_err();
            assert!(err.to_string().contains("not a valid vote option"));
        }
    }
}
