use crate::adapters::rpc::{RpcRequest, RpcResponse, INTERNAL_ERROR};
use crate::config::ServerInfo;
use crate::core::registry::ToolRegistry;
use crate::utils::error::ToolError;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinSet;

pub const PROTOCOL_VERSION: &str = "2024-11-05";

#[derive(Debug, Error)]
pub enum McpError {
    #[error("stdio I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize response: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("writer task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[derive(Debug, Deserialize)]
struct CallParams {
    name: String,
    #[serde(default)]
    arguments: Option<Value>,
}

/// MCP server：換行分隔的 JSON-RPC 2.0
pub struct McpServer {
    registry: Arc<ToolRegistry>,
    info: ServerInfo,
}

impl McpServer {
    pub fn new(registry: Arc<ToolRegistry>, info: ServerInfo) -> Self {
        Self { registry, info }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// 處理一行輸入。notification 回傳 None。
    pub async fn handle_message(&self, line: &str) -> Option<RpcResponse> {
        let raw: Value = match serde_json::from_str(line) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("❌ Failed to parse incoming message: {}", e);
                return Some(RpcResponse::parse_error(e));
            }
        };

        let request: RpcRequest = match serde_json::from_value(raw.clone()) {
            Ok(request) => request,
            Err(e) => {
                let id = raw.get("id").cloned();
                return Some(RpcResponse::invalid_request(id, format!("Invalid request: {e}")));
            }
        };

        let Some(id) = request.id.clone() else {
            tracing::debug!("📨 Notification: {}", request.method);
            return None;
        };

        if request.jsonrpc != "2.0" {
            return Some(RpcResponse::invalid_request(
                Some(id),
                "Unsupported jsonrpc version (expected 2.0)",
            ));
        }

        tracing::debug!("📨 Request {}: {}", id, request.method);

        let response = match request.method.as_str() {
            "initialize" => RpcResponse::success(Some(id), self.initialize_result()),
            "ping" => RpcResponse::success(Some(id), json!({})),
            "tools/list" => RpcResponse::success(
                Some(id),
                json!({ "tools": self.registry.list() }),
            ),
            "tools/call" => self.handle_tool_call(id, request.params).await,
            other => {
                tracing::warn!("Unknown JSON-RPC method: {}", other);
                RpcResponse::method_not_found(Some(id), other)
            }
        };

        Some(response)
    }

    fn initialize_result(&self) -> Value {
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": { "tools": {} },
            "serverInfo": {
                "name": self.info.name,
                "version": self.info.version,
            },
        })
    }

    async fn handle_tool_call(&self, id: Value, params: Option<Value>) -> RpcResponse {
        let params: CallParams = match params.map(serde_json::from_value::<CallParams>) {
            Some(Ok(params)) => params,
            Some(Err(e)) => {
                return RpcResponse::invalid_params(Some(id), format!("Invalid params: {e}"))
            }
            None => {
                return RpcResponse::invalid_params(Some(id), "Invalid params: missing tool name")
            }
        };

        let arguments = params
            .arguments
            .unwrap_or_else(|| Value::Object(Default::default()));

        match self.registry.call(&params.name, arguments).await {
            Ok(output) => RpcResponse::success(
                Some(id),
                json!({
                    "content": [{ "type": "text", "text": output.text }],
                    "isError": output.is_error,
                }),
            ),
            Err(e @ ToolError::UnknownTool(_)) => {
                RpcResponse::invalid_params(Some(id), e.to_string())
            }
            Err(e) => RpcResponse::error(Some(id), INTERNAL_ERROR, e.to_string()),
        }
    }

    /// 每則訊息一個 task，回應經由 channel 交給唯一的 writer
    pub async fn serve<R, W>(self: Arc<Self>, reader: R, writer: W) -> Result<(), McpError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<RpcResponse>();

        let writer_task = tokio::spawn(async move {
            let mut writer = writer;
            while let Some(response) = rx.recv().await {
                let mut payload = serde_json::to_vec(&response)?;
                payload.push(b'\n');
                writer.write_all(&payload).await?;
                writer.flush().await?;
            }
            Ok::<(), McpError>(())
        });

        let mut tasks = JoinSet::new();
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            // 已完成的 task 隨讀隨收，長連線不累積
            reap_finished(&mut tasks);
            if line.trim().is_empty() {
                continue;
            }
            let server = self.clone();
            let tx = tx.clone();
            tasks.spawn(async move {
                if let Some(response) = server.handle_message(&line).await {
                    if tx.send(response).is_err() {
                        tracing::error!("❌ Writer is gone, dropping response");
                    }
                }
            });
        }

        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                tracing::error!("❌ Request task failed: {}", e);
            }
        }

        drop(tx);
        writer_task.await??;
        tracing::info!("👋 Input closed, shutting down");
        Ok(())
    }

    pub async fn serve_stdio(self: Arc<Self>) -> Result<(), McpError> {
        tracing::info!(
            "🚀 {} {} serving {} tools on stdio",
            self.info.name,
            self.info.version,
            self.registry.len()
        );
        self.serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
            .await
    }
}

/// 收掉已結束的 task，不等待仍在執行的
fn reap_finished(tasks: &mut JoinSet<()>) -> usize {
    let mut reaped = 0;
    while let Some(joined) = tasks.try_join_next() {
        if let Err(e) = joined {
            tracing::error!("❌ Request task failed: {}", e);
        }
        reaped += 1;
    }
    reaped
}
