//! Shared build-and-broadcast pipeline for transaction commands.
//!
//! Commands construct and validate their messages, then hand them here.
//! Signing happens node-side; this layer only assembles the envelope and
//! either prints it (`--generate-only`) or submits it.

use crate::client::{CliContext, NodeClient, OutputFormat};
use crate::error::{Error, Result};
use crate::governance::Msg;
use crate::types::AccountId;
use colored::Colorize;
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Unsigned transaction envelope submitted to the node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StdTx {
    pub chain_id: String,
    pub fee_payer: AccountId,
    #[serde(default)]
    pub memo: String,
    pub msgs: Vec<Value>,
}

/// Node response to a broadcast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TxResponse {
    #[serde(default)]
    pub height: u64,
    pub txhash: String,
    #[serde(default)]
    pub code: u32,
    #[serde(default)]
    pub raw_log: String,
}

/// Accumulates tx-level parameters from flags before the envelope is built.
#[derive(Debug, Clone)]
pub struct TxBuilder {
    chain_id: String,
    memo: String,
    fee_payer: Option<AccountId>,
}

impl TxBuilder {
    pub fn new(chain_id: impl Into<String>, memo: impl Into<String>, fee_payer: Option<AccountId>) -> Self {
        TxBuilder {
            chain_id: chain_id.into(),
            memo: memo.into(),
            fee_payer,
        }
    }

    pub fn fee_payer(&self) -> Option<&AccountId> {
        self.fee_payer.as_ref()
    }

    /// Set the fee payer. Commands use this to default the payer to their
    /// primary account argument when no explicit `--fee-payer` was given.
    pub fn with_payer(mut self, payer: AccountId) -> Self {
        self.fee_payer = Some(payer);
        self
    }

    fn build(self, msgs: &[&dyn Msg]) -> Result<StdTx> {
        let fee_payer = self
            .fee_payer
            .ok_or_else(|| Error::InvalidMessage("transaction has no fee payer".to_string()))?;
        let mut values = Vec::with_capacity(msgs.len());
        for msg in msgs {
            values.push(msg.to_value()?);
        }
        Ok(StdTx {
            chain_id: self.chain_id,
            fee_payer,
            memo: self.memo,
            msgs: values,
        })
    }
}

/// Build the envelope, then either print it or broadcast it to the node.
pub fn generate_or_broadcast(ctx: &CliContext, builder: TxBuilder, msgs: &[&dyn Msg]) -> Result<()> {
    let tx = builder.build(msgs)?;

    if ctx.generate_only {
        println!("{}", serde_json::to_string_pretty(&tx)?);
        return Ok(());
    }

    let client = NodeClient::new(ctx.node.clone())?;
    let response = client.broadcast_tx(&tx)?;
    info!("tx {} included at height {}", response.txhash, response.height);

    match ctx.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
        OutputFormat::Text => {
            println!("{} txhash: {}", "broadcast ok".green(), response.txhash);
            if response.height > 0 {
                println!("height: {}", response.height);
            }
            if !response.raw_log.is_empty() {
                println!("log: {}", response.raw_log);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::governance::{MsgVote, VoteOption};
    use crate::types::Address;
    use std::str::FromStr;

    fn vote_msg() -> MsgVote {
        MsgVote::new(
            Address::new("chain1qy352eufqy352eu"),
            AccountId::from_str("jack").unwrap(),
            1,
            VoteOption::Yes,
        )
    }

    #[test]
    fn builder_defaults_payer_via_with_payer() {
        let builder = TxBuilder::new("testing", "", None);
        assert!(builder.fee_payer().is_none());

        let builder = builder.with_payer(AccountId::from_str("jack").unwrap());
        assert_eq!(builder.fee_payer().unwrap().as_str(), "jack");
    }

    #[test]
    fn build_requires_fee_payer() {
        let builder = TxBuilder::new("testing", "", None);
        let msg = vote_msg();
        assert!(builder.build(&[&msg]).is_err());
    }

    #[test]
    fn build_assembles_envelope() {
        let builder = TxBuilder::new("testing", "memo", None)
            .with_payer(AccountId::from_str("jack").unwrap());
        let msg = vote_msg();
        let tx = builder.build(&[&msg]).unwrap();
        assert_eq!(tx.chain_id, "testing");
        assert_eq!(tx.memo, "memo");
        assert_eq!(tx.msgs.len(), 1);
        assert_eq!(tx.msgs[0]["type"], "gov/MsgVote");
    }

    #[test]
    fn tx_response_defaults_missing_fields() {
        let response: TxResponse = serde_json::from_str(r#"{"txhash": "ABC123"}"#).unwrap();
        assert_eq!(response.txhash, "ABC123");
        assert_eq!(response.code, 0);
        assert_eq!(response.height, 0);
    }
}
