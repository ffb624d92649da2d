//! Stdio tool server
//!
//! Thin JSON-RPC framing around [`ToolExecutorPort`](rdw_application::ToolExecutorPort)
//! and [`ToolSchemaPort`](rdw_application::ToolSchemaPort).

pub mod protocol;
pub mod stdio;

pub use protocol::{JsonRpcRequest, JsonRpcResponse, RpcError};
pub use stdio::{ServerError, ServerInfo, StdioServer};
