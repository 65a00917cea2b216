use once_cell::sync::Lazy;
use std::env;

/// Resolved-once defaults for flags that are usually set per environment
/// rather than per invocation.
#[derive(Debug, Clone)]
pub struct Defaults {
    pub node: String,
    pub chain_id: String,
}

pub static DEFAULTS: Lazy<Defaults> = Lazy::new(|| Defaults {
    node: env::var("GOVCLI_NODE").unwrap_or_else(|_| "http://127.0.0.1:1317".to_string()),
    chain_id: env::var("GOVCLI_CHAIN_ID").unwrap_or_else(|_| "testing".to_string()),
});
