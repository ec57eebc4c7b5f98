//! Line-delimited JSON-RPC server over stdin/stdout.
//!
//! stdout carries only protocol frames; all logging goes to stderr.

use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, error, info};

use crate::error::Result;
use crate::mcp::protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
use crate::tools::{self, resources, ToolContext};

/// MCP protocol revision implemented by this server.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

pub struct McpServer {
    ctx: ToolContext,
}

impl McpServer {
    pub fn new(ctx: ToolContext) -> Self {
        McpServer { ctx }
    }

    /// Serve requests until stdin closes.
    pub async fn run(&self) -> Result<()> {
        info!("FPL MCP server listening on stdin");

        let mut reader = BufReader::new(tokio::io::stdin());
        let mut stdout = tokio::io::stdout();
        let mut line = String::new();

        loop {
            line.clear();
            match reader.read_line(&mut line).await {
                Ok(0) => {
                    debug!("stdin closed, shutting down");
                    break;
                }
                Ok(_) => {
                    let frame = line.trim();
                    if frame.is_empty() {
                        continue;
                    }
                    let Some(response) = self.handle_frame(frame).await else {
                        continue;
                    };
                    let payload = serde_json::to_string(&response).unwrap_or_else(|e| {
                        let fallback = JsonRpcResponse::error(
                            response.id.clone(),
                            JsonRpcError::internal_error(format!("serialization failed: {e}")),
                        );
                        serde_json::to_string(&fallback).unwrap_or_default()
                    });
                    if let Err(e) = write_frame(&mut stdout, &payload).await {
                        error!(error = %e, "failed to write response");
                        break;
                    }
                }
                Err(e) => {
                    error!(error = %e, "failed to read stdin");
                    break;
                }
            }
        }

        info!("FPL MCP server stopped");
        Ok(())
    }

    /// Handle one raw frame. Notifications produce no response.
    pub async fn handle_frame(&self, frame: &str) -> Option<JsonRpcResponse> {
        let request: JsonRpcRequest = match serde_json::from_str(frame) {
            Ok(request) => request,
            Err(e) => {
                return Some(JsonRpcResponse::error(
                    None,
                    JsonRpcError::parse_error(format!("Invalid JSON: {e}")),
                ));
            }
        };

        if request.jsonrpc != "2.0" {
            return Some(JsonRpcResponse::error(
                request.id,
                JsonRpcError::invalid_request("jsonrpc must be \"2.0\""),
            ));
        }

        if request.is_notification() {
            debug!(method = %request.method, "notification acknowledged");
            return None;
        }

        Some(self.dispatch(request).await)
    }

    async fn dispatch(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        let JsonRpcRequest {
            id, method, params, ..
        } = request;

        match method.as_str() {
            "initialize" => handle_initialize(id),
            "ping" => JsonRpcResponse::success(id, json!({})),
            "tools/list" => {
                JsonRpcResponse::success(id, json!({"tools": tools::tool_manifest()}))
            }
            "tools/call" => self.handle_tools_call(id, params).await,
            "resources/list" => {
                JsonRpcResponse::success(id, json!({"resources": resources::resource_manifest()}))
            }
            "resources/read" => self.handle_resources_read(id, params).await,
            other => JsonRpcResponse::error(id, JsonRpcError::method_not_found(other)),
        }
    }

    async fn handle_tools_call(&self, id: Option<Value>, params: Value) -> JsonRpcResponse {
        let Some(name) = params.get("name").and_then(Value::as_str) else {
            return JsonRpcResponse::error(id, JsonRpcError::invalid_params("missing 'name' field"));
        };
        let arguments = params
            .get("arguments")
            .cloned()
            .unwrap_or_else(|| json!({}));

        debug!(tool = name, "tools/call");
        match tools::dispatch(&self.ctx, name, arguments).await {
            Ok(result) => {
                let text =
                    serde_json::to_string_pretty(&result).unwrap_or_else(|_| result.to_string());
                JsonRpcResponse::success(id, json!({"content": [{"type": "text", "text": text}]}))
            }
            Err(err) => {
                error!(tool = name, error = %err, "tool call failed");
                JsonRpcResponse::error(id, JsonRpcError::from_fpl_error(&err))
            }
        }
    }

    async fn handle_resources_read(&self, id: Option<Value>, params: Value) -> JsonRpcResponse {
        let Some(uri) = params.get("uri").and_then(Value::as_str) else {
            return JsonRpcResponse::error(id, JsonRpcError::invalid_params("missing 'uri' field"));
        };

        debug!(uri, "resources/read");
        match resources::read_resource(&self.ctx, uri).await {
            Ok(text) => JsonRpcResponse::success(
                id,
                json!({
                    "contents": [{"uri": uri, "mimeType": "text/plain", "text": text}]
                }),
            ),
            Err(err) => {
                error!(uri, error = %err, "resource read failed");
                JsonRpcResponse::error(id, JsonRpcError::from_fpl_error(&err))
            }
        }
    }
}

fn handle_initialize(id: Option<Value>) -> JsonRpcResponse {
    JsonRpcResponse::success(
        id,
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "serverInfo": {
                "name": "fpl-mcp",
                "version": env!("CARGO_PKG_VERSION"),
            },
            "capabilities": {
                "tools": {},
                "resources": {},
            }
        }),
    )
}

async fn write_frame<W: AsyncWrite + Unpin>(writer: &mut W, payload: &str) -> std::io::Result<()> {
    writer.write_all(payload.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await
}
