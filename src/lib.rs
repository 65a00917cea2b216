pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod governance;
pub mod tx;
pub mod types;

pub use crate::error::{Error, Result};
pub use crate::governance::{Msg, MsgDeposit, MsgSubmitProposal, MsgUnjail, MsgVote, VoteOption};
pub use crate::types::{AccountId, Address, Coin, Coins};
