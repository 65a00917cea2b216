use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Maximum length of a proposal title.
pub const MAX_TITLE_LEN: usize = 140;
/// Maximum length of a proposal description.
pub const MAX_DESCRIPTION_LEN: usize = 10000;

/// Kind of governance proposal being submitted. Handlers for each kind live
/// in their owning modules; this CLI only tags the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalType {
    Text,
    ParameterChange,
    SoftwareUpgrade,
}

impl ProposalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProposalType::Text => "Text",
            ProposalType::ParameterChange => "ParameterChange",
            ProposalType::SoftwareUpgrade => "SoftwareUpgrade",
        }
    }
}

impl fmt::Display for ProposalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProposalType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "" | "text" => Ok(ProposalType::Text),
            "parameter_change" | "parameterchange" | "param_change" => {
                Ok(ProposalType::ParameterChange)
            }
            "software_upgrade" | "softwareupgrade" => Ok(ProposalType::SoftwareUpgrade),
            _ => Err(Error::InvalidProposalType(s.to_string())),
        }
    }
}

/// Proposal fields as given on the command line or in a `--proposal` JSON
/// file. Deposit stays a string here; it is parsed into coins by the
/// submit-proposal handler.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProposalRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "type")]
    pub proposal_type: String,
    #[serde(default)]
    pub deposit: String,
}

impl ProposalRequest {
    /// Load a proposal request from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let request: ProposalRequest = serde_json::from_str(&contents)?;
        Ok(request)
    }
}

/// The typed content carried inside a submit-proposal message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalContent {
    pub title: String,
    pub description: String,
    pub proposal_type: ProposalType,
}

impl ProposalContent {
    pub fn new(title: impl Into<String>, description: impl Into<String>, proposal_type: ProposalType) -> Self {
        ProposalContent {
            title: title.into(),
            description: description.into(),
            proposal_type,
        }
    }

    /// Structural checks shared with chain-side basic validation.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::InvalidMessage("proposal title cannot be blank".to_string()));
        }
        if self.title.len() > MAX_TITLE_LEN {
            return Err(Error::InvalidMessage(format!(
                "proposal title is longer than max length of {}",
                MAX_TITLE_LEN
            )));
        }
        if self.description.trim().is_empty() {
            return Err(Error::InvalidMessage(
                "proposal description cannot be blank".to_string(),
            ));
        }
        if self.description.len() > MAX_DESCRIPTION_LEN {
            return Err(Error::InvalidMessage(format!(
                "proposal description is longer than max length of {}",
                MAX_DESCRIPTION_LEN
            )));
        }
        Ok(())
    }
}
