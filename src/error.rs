use thiserror::Error;

/// Errors produced while building or submitting a governance transaction.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid account id '{id}': {reason}")]
    InvalidAccountId { id: String, reason: String },

    #[error("invalid coin amount '{0}'")]
    InvalidCoins(String),

    #[error("proposal-id {0} not a valid uint, please input a valid proposal-id")]
    InvalidProposalId(String),

    #[error("'{0}' is not a valid vote option, options: yes/no/no_with_veto/abstain")]
    InvalidVoteOption(String),

    #[error("'{0}' is not a valid proposal type, types: text/parameter_change/software_upgrade")]
    InvalidProposalType(String),

    #[error("--proposal file cannot be combined with --{0}")]
    ProposalInputConflict(String),

    #[error("invalid message: {0}")]
    InvalidMessage(String),

    #[error("query account {account} auth error: {source}")]
    AccountAuthQuery {
        account: String,
        #[source]
        source: Box<Error>,
    },

    #[error("broadcast failed (code {code}): {raw_log}")]
    TxFailed { code: u32, raw_log: String },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("node request failed: {0}")]
    Node(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
