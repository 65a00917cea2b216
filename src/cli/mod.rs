pub mod gov;
pub mod tx;

pub use tx::{handle_tx_command, tx_command};
