//! Blocking REST client for the chain node.
//!
//! One request per call; retry policy, if any, belongs to the caller's
//! shell loop, not this layer.

use crate::error::{Error, Result};
use crate::tx::{StdTx, TxResponse};
use crate::types::{AccountId, Address};
use log::debug;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize)]
struct AccountAuthResponse {
    address: String,
}

#[derive(Debug, Deserialize)]
struct NodeErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// Synchronous client for the node's REST endpoint.
pub struct NodeClient {
    base: Url,
    client: Client,
}

impl NodeClient {
    pub fn new(base: Url) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Node(format!("failed to create HTTP client: {}", e)))?;
        Ok(NodeClient { base, client })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .map_err(|e| Error::Node(format!("invalid endpoint path '{}': {}", path, e)))
    }

    /// Resolve a registered account name to the address its auth currently
    /// points at. Every tx command calls this exactly once before building
    /// its message.
    pub fn query_account_auth(&self, account: &AccountId) -> Result<Address> {
        let url = self.endpoint(&format!("accounts/{}/auth", account))?;
        debug!("querying account auth: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| self.wrap_auth_error(account, Error::Node(e.to_string())))?;

        let status = response.status();
        let body = response.text().unwrap_or_default();
        if !status.is_success() {
            let reason = extract_error_message(&body)
                .unwrap_or_else(|| format!("node returned status {}", status));
            return Err(self.wrap_auth_error(account, Error::Node(reason)));
        }

        let auth: AccountAuthResponse = serde_json::from_str(&body)
            .map_err(|e| self.wrap_auth_error(account, Error::Json(e)))?;
        if auth.address.is_empty() {
            return Err(self.wrap_auth_error(
                account,
                Error::Node("account auth has no address".to_string()),
            ));
        }

        debug!("account {} resolves to {}", account, auth.address);
        Ok(Address::new(auth.address))
    }

    /// Hand a transaction envelope to the node for signing and inclusion.
    pub fn broadcast_tx(&self, tx: &StdTx) -> Result<TxResponse> {
        let url = self.endpoint("txs")?;
        debug!("broadcasting tx to {}", url);

        let response = self
            .client
            .post(url)
            .json(tx)
            .send()
            .map_err(|e| Error::Node(e.to_string()))?;

        let status = response.status();
        let body = response.text().unwrap_or_default();
        if !status.is_success() {
            let reason = extract_error_message(&body)
                .unwrap_or_else(|| format!("node returned status {}", status));
            return Err(Error::Node(reason));
        }

        let tx_response: TxResponse = serde_json::from_str(&body)?;
        if tx_response.code != 0 {
            return Err(Error::TxFailed {
                code: tx_response.code,
                raw_log: tx_response.raw_log.clone(),
            });
        }
        Ok(tx_response)
    }

    fn wrap_auth_error(&self, account: &AccountId, source: Error) -> Error {
        Error::AccountAuthQuery {
            account: account.to_string(),
            source: Box::new(source),
        }
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    let parsed: NodeErrorBody = serde_json::from_str(body).ok()?;
    parsed.error.or(parsed.message).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_error_field() {
        assert_eq!(
            extract_error_message(r#"{"error": "account not found"}"#),
            Some("account not found".to_string())
        );
        assert_eq!(
            extract_error_message(r#"{"message": "internal"}"#),
            Some("internal".to_string())
        );
        assert_eq!(extract_error_message("not json"), None);
        assert_eq!(extract_error_message(r#"{"error": ""}"#), None);
    }
}
