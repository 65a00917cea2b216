pub mod msgs;
pub mod proposal;
pub mod vote;

pub use msgs::{Msg, MsgDeposit, MsgSubmitProposal, MsgUnjail, MsgVote};
pub use proposal::{ProposalContent, ProposalRequest, ProposalType};
pub use vote::VoteOption;
