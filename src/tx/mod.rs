pub mod builder;

pub use builder::{generate_or_broadcast, StdTx, TxBuilder, TxResponse};
