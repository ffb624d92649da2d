//! Stdio tool server
//!
//! Reads one JSON-RPC message per line and writes one response per line.
//! Requests are handled in arrival order; logs never touch the output stream.
//!
//! ```text
//! stdin ──▶ handle_line() ──▶ initialize | tools/list | tools/call | ping
//!                                  │
//!                                  ▼
//! stdout ◀── JsonRpcResponse ◀── ToolExecutorPort / ToolSchemaPort
//! ```

use super::protocol::{
    CallToolResult, JsonRpcRequest, JsonRpcResponse, PROTOCOL_VERSION, RpcError,
};
use rdw_application::ports::{tool_executor::ToolExecutorPort, tool_schema::ToolSchemaPort};
use rdw_domain::ToolCall;
use serde_json::{Value, json};
use std::sync::Arc;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors that stop the server loop
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("I/O error on stdio: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Name and version reported by `initialize`
#[derive(Debug, Clone)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

impl Default for ServerInfo {
    fn default() -> Self {
        Self {
            name: "rdw-vehicle-mcp".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Line-delimited JSON-RPC server over any reader/writer pair
pub struct StdioServer {
    executor: Arc<dyn ToolExecutorPort>,
    schema: Arc<dyn ToolSchemaPort>,
    info: ServerInfo,
}

impl StdioServer {
    pub fn new(executor: Arc<dyn ToolExecutorPort>, schema: Arc<dyn ToolSchemaPort>) -> Self {
        Self {
            executor,
            schema,
            info: ServerInfo::default(),
        }
    }

    pub fn with_info(mut self, info: ServerInfo) -> Self {
        self.info = info;
        self
    }

    /// Serve until EOF on `reader` or until `cancel` fires.
    pub async fn run<R, W>(
        &self,
        reader: R,
        mut writer: W,
        cancel: CancellationToken,
    ) -> Result<(), ServerError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!(
            tools = self.executor.tool_spec().len(),
            "Tool server listening on stdio"
        );
        let mut lines = reader.lines();

        loop {
            let line = tokio::select! {
                _ = cancel.cancelled() => {
                    info!("Shutdown requested");
                    break;
                }
                line = lines.next_line() => line?,
            };
            let Some(line) = line else {
                debug!("Input closed");
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            if let Some(response) = self.handle_line(&line).await {
                let mut frame = serde_json::to_vec(&response)?;
                frame.push(b'\n');
                writer.write_all(&frame).await?;
                writer.flush().await?;
            }
        }

        Ok(())
    }

    /// Handle one raw input line; `None` means nothing is written back.
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let value: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                warn!("Unparsable message: {}", e);
                return Some(JsonRpcResponse::error(Value::Null, RpcError::parse_error(e)));
            }
        };

        let id = value.get("id").cloned().unwrap_or(Value::Null);
        let request: JsonRpcRequest = match serde_json::from_value(value) {
            Ok(request) => request,
            Err(e) => return Some(JsonRpcResponse::error(id, RpcError::invalid_request(e))),
        };

        if request.is_notification() {
            debug!(method = %request.method, "Notification received");
            return None;
        }

        let result = self.dispatch(&request.method, request.params).await;
        Some(match result {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(error) => JsonRpcResponse::error(id, error),
        })
    }

    async fn dispatch(&self, method: &str, params: Option<Value>) -> Result<Value, RpcError> {
        debug!(method, "Request received");
        match method {
            "initialize" => Ok(json!({
                "protocolVersion": PROTOCOL_VERSION,
                "serverInfo": {
                    "name": self.info.name,
                    "version": self.info.version,
                },
                "capabilities": { "tools": {} },
            })),
            "tools/list" | "list_tools" => Ok(json!({
                "tools": self.schema.all_tools_schema(self.executor.tool_spec()),
            })),
            "tools/call" | "call_tool" => self.call_tool(params).await,
            "ping" => Ok(json!({})),
            other => Err(RpcError::method_not_found(other)),
        }
    }

    async fn call_tool(&self, params: Option<Value>) -> Result<Value, RpcError> {
        let params = params.ok_or_else(|| RpcError::invalid_params("Missing params"))?;
        let call: ToolCall = serde_json::from_value(params)
            .map_err(|e| RpcError::invalid_params(format!("Invalid tool call: {}", e)))?;

        let result = self.executor.execute(&call).await.map_err(|e| {
            warn!(tool = %call.tool_name, "Tool invocation rejected: {}", e);
            RpcError::from(e)
        })?;

        serde_json::to_value(CallToolResult::from(result))
            .map_err(|e| RpcError::new(RpcError::INTERNAL_ERROR, format!("Internal error: {}", e)))
    }
}
