pub mod context;
pub mod rpc;

pub use context::{CliContext, OutputFormat};
pub use rpc::NodeClient;
