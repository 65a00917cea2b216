use crate::error::{Error, Result};
use crate::governance::proposal::ProposalContent;
use crate::governance::vote::VoteOption;
use crate::types::{AccountId, Address, Coins};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Module route shared by all governance messages.
pub const ROUTE: &str = "gov";

/// A transaction message ready for the broadcast pipeline.
///
/// `validate` is the local structural check run before a message is handed
/// off; anything deeper (deposit thresholds, proposal state) is enforced
/// chain-side.
pub trait Msg {
    fn route(&self) -> &'static str {
        ROUTE
    }

    fn msg_type(&self) -> &'static str;

    fn validate(&self) -> Result<()>;

    /// Amino-style JSON wrapper: `{"type": "<route>/<type>", "value": ...}`.
    fn to_value(&self) -> Result<Value>;
}

fn wrap(route: &str, msg_type: &str, value: Value) -> Value {
    serde_json::json!({
        "type": format!("{}/{}", route, msg_type),
        "value": value,
    })
}

fn require_auth(auth: &Address, who: &str) -> Result<()> {
    if auth.is_empty() {
        return Err(Error::InvalidMessage(format!("{} auth address is empty", who)));
    }
    Ok(())
}

/// Submit a proposal together with an optional initial deposit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MsgSubmitProposal {
    pub proposer_auth: Address,
    pub content: ProposalContent,
    pub initial_deposit: Coins,
    pub proposer: AccountId,
}

impl MsgSubmitProposal {
    pub fn new(
        proposer_auth: Address,
        content: ProposalContent,
        initial_deposit: Coins,
        proposer: AccountId,
    ) -> Self {
        MsgSubmitProposal {
            proposer_auth,
            content,
            initial_deposit,
            proposer,
        }
    }
}

impl Msg for MsgSubmitProposal {
    fn msg_type(&self) -> &'static str {
        "MsgSubmitProposal"
    }

    fn validate(&self) -> Result<()> {
        require_auth(&self.proposer_auth, "proposer")?;
        self.content.validate()?;
        if !self.initial_deposit.is_valid() {
            return Err(Error::InvalidMessage(format!(
                "invalid initial deposit: {}",
                self.initial_deposit
            )));
        }
        Ok(())
    }

    fn to_value(&self) -> Result<Value> {
        Ok(wrap(self.route(), self.msg_type(), serde_json::to_value(self)?))
    }
}

/// Add tokens to the deposit of an active proposal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MsgDeposit {
    pub depositor_auth: Address,
    pub depositor: AccountId,
    pub proposal_id: u64,
    pub amount: Coins,
}

impl MsgDeposit {
    pub fn new(depositor_auth: Address, depositor: AccountId, proposal_id: u64, amount: Coins) -> Self {
        MsgDeposit {
            depositor_auth,
            depositor,
            proposal_id,
            amount,
        }
    }
}

impl Msg for MsgDeposit {
    fn msg_type(&self) -> &'static str {
        "MsgDeposit"
    }

    fn validate(&self) -> Result<()> {
        require_auth(&self.depositor_auth, "depositor")?;
        if self.amount.is_empty() || !self.amount.is_valid() {
            return Err(Error::InvalidMessage(format!(
                "invalid deposit amount: {}",
                self.amount
            )));
        }
        Ok(())
    }

    fn to_value(&self) -> Result<Value> {
        Ok(wrap(self.route(), self.msg_type(), serde_json::to_value(self)?))
    }
}

/// Cast a vote on an active proposal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MsgVote {
    pub voter_auth: Address,
    pub voter: AccountId,
    pub proposal_id: u64,
    pub option: VoteOption,
}

impl MsgVote {
    pub fn new(voter_auth: Address, voter: AccountId, proposal_id: u64, option: VoteOption) -> Self {
        MsgVote {
            voter_auth,
            voter,
            proposal_id,
            option,
        }
    }
}

impl Msg for MsgVote {
    fn msg_type(&self) -> &'static str {
        "MsgVote"
    }

    fn validate(&self) -> Result<()> {
        require_auth(&self.voter_auth, "voter")?;
        Ok(())
    }

    fn to_value(&self) -> Result<Value> {
        Ok(wrap(self.route(), self.msg_type(), serde_json::to_value(self)?))
    }
}

/// Release a validator jailed for downtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MsgUnjail {
    pub validator_auth: Address,
    pub validator: AccountId,
}

impl MsgUnjail {
    pub fn new(validator_auth: Address, validator: AccountId) -> Self {
        MsgUnjail {
            validator_auth,
            validator,
        }
    }
}

impl Msg for MsgUnjail {
    fn msg_type(&self) -> &'static str {
        "MsgUnjail"
    }

    fn validate(&self) -> Result<()> {
        require_auth(&self.validator_auth, "validator")?;
        Ok(())
    }

    fn to_value(&self) -> Result<Value> {
        Ok(wrap(self.route(), self.msg_type(), serde_json::to_value(self)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::governance::proposal::ProposalType;
    use crate::types::parse_coins;
    use std::str::FromStr;

    fn account(name: &str) -> AccountId {
        AccountId::from_str(name).unwrap()
    }

    #[test]
    fn submit_proposal_validates() {
        let msg = MsgSubmitProposal::new(
            Address::new("chain1qy352eufqy352eu"),
            ProposalContent::new("Test Proposal", "My awesome proposal", ProposalType::Text),
            parse_coins("10test").unwrap(),
            account("jack"),
        );
        assert!(msg.validate().is_ok());
        let value = msg.to_value().unwrap();
        assert_eq!(value["type"], "gov/MsgSubmitProposal");
    }

    #[test]
    fn submit_proposal_rejects_empty_auth() {
        let msg = MsgSubmitProposal::new(
            Address::new(""),
            ProposalContent::new("Test", "desc", ProposalType::Text),
            parse_coins("").unwrap(),
            account("jack"),
        );
        assert!(msg.validate().is_err());
    }

    #[test]
    fn deposit_requires_coins() {
        let msg = MsgDeposit::new(
            Address::new("chain1qy352eufqy352eu"),
            account("jack"),
            1,
            parse_coins("").unwrap(),
        );
        let err = msg.validate().unwrap_err();
        assert!(err.to_string().contains("deposit amount"));
    }

    #[test]
    fn vote_message_wraps_with_route() {
        let msg = MsgVote::new(
            Address::new("chain1qy352eufqy352eu"),
            account("jack"),
            7,
            VoteOption::NoWithVeto,
        );
        assert!(msg.validate().is_ok());
        let value = msg.to_value().unwrap();
        assert_eq!(value["type"], "gov/MsgVote");
        assert_eq!(value["value"]["proposal_id"], 7);
    }

    #[test]
    fn unjail_requires_auth() {
        let msg = MsgUnjail::new(Address::new(""), account("validator"));
        assert!(msg.validate().is_err());
    }
}
