//! JSON-RPC 2.0 request and response types for the MCP transport.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FplError;

/// An incoming JSON-RPC request or notification.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: Value,
    /// Absent for notifications, which never get a response.
    #[serde(default)]
    pub id: Option<Value>,
}

impl JsonRpcRequest {
    /// Notifications carry no id and expect no reply.
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// An outgoing JSON-RPC response, success or error.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
    pub id: Option<Value>,
}

impl JsonRpcResponse {
    pub fn success(id: Option<Value>, result: Value) -> Self {
        JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            result: Some(result),
            error: None,
            id,
        }
    }

    pub fn error(id: Option<Value>, error: JsonRpcError) -> Self {
        JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(error),
            id,
        }
    }
}

/// A JSON-RPC error object.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcError {
    pub fn parse_error(message: impl Into<String>) -> Self {
        JsonRpcError {
            code: -32700,
            message: message.into(),
            data: None,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        JsonRpcError {
            code: -32600,
            message: message.into(),
            data: None,
        }
    }

    pub fn method_not_found(method: &str) -> Self {
        JsonRpcError {
            code: -32601,
            message: format!("Method not found: {method}"),
            data: None,
        }
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        JsonRpcError {
            code: -32602,
            message: message.into(),
            data: None,
        }
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        JsonRpcError {
            code: -32603,
            message: message.into(),
            data: None,
        }
    }

    /// Map a domain error onto the JSON-RPC code space.
    ///
    /// Validation failures use the standard invalid-params code; the FPL
    /// failure modes get codes in the implementation-defined range so
    /// clients can tell a missing player from a broken login.
    pub fn from_fpl_error(err: &FplError) -> Self {
        let code = match err {
            FplError::Validation { .. } | FplError::InvalidPosition { .. } => -32602,
            FplError::PlayerNotFound { .. } | FplError::TeamNotFound { .. } => -32001,
            FplError::Config { .. } => -32002,
            FplError::Authentication { .. } => -32003,
            FplError::RemoteFetch { .. } => -32004,
            _ => -32603,
        };
        JsonRpcError {
            code,
            message: err.to_string(),
            data: None,
        }
    }
}
