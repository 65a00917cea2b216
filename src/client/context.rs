use crate::error::{Error, Result};
use crate::types::AccountId;
use std::str::FromStr;
use url::Url;

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(Error::InvalidArgument(format!(
                "unknown output format '{}', expected text or json",
                s
            ))),
        }
    }
}

/// Per-invocation client context: where to reach the node and how to print.
#[derive(Debug, Clone)]
pub struct CliContext {
    pub node: Url,
    pub output: OutputFormat,
    pub generate_only: bool,
    pub from_account: Option<AccountId>,
}

impl CliContext {
    pub fn new(node: &str, output: OutputFormat) -> Result<Self> {
        let node = Url::parse(node)
            .map_err(|e| Error::InvalidArgument(format!("invalid node URL '{}': {}", node, e)))?;
        Ok(CliContext {
            node,
            output,
            generate_only: false,
            from_account: None,
        })
    }

    /// Print the unsigned envelope instead of broadcasting it.
    pub fn generate_only(mut self, generate_only: bool) -> Self {
        self.generate_only = generate_only;
        self
    }

    /// Record the account the transaction is sent on behalf of.
    pub fn with_from_account(mut self, account: AccountId) -> Self {
        self.from_account = Some(account);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_output_formats() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_str("yaml").is_err());
    }

    #[test]
    fn rejects_invalid_node_url() {
        assert!(CliContext::new("not a url", OutputFormat::Text).is_err());
        assert!(CliContext::new("http://127.0.0.1:1317", OutputFormat::Text).is_ok());
    }
}
