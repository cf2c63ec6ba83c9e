//! JSON-RPC request handling for the `/api/rpc` endpoint.

use axum::{body::Bytes, Json};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
struct RpcRequest {
    jsonrpc: String,
    method: String,
    #[serde(default)]
    id: Option<Value>,
}

/// JSON-RPC 2.0 endpoint.
///
/// Failed procedures are logged with the procedure name; the wire response
/// carries only the standard error envelope.
pub async fn rpc_endpoint(body: Bytes) -> Json<Value> {
    let parsed: RpcRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(_) => return Json(rpc_error(None, -32700, "Parse error")),
    };

    if parsed.jsonrpc != "2.0" || parsed.method.trim().is_empty() {
        return Json(rpc_error(parsed.id, -32600, "Invalid Request"));
    }

    match parsed.method.as_str() {
        "ping" => Json(json!({
            "jsonrpc": "2.0",
            "id": parsed.id,
            "result": {}
        })),
        "server.info" => Json(json!({
            "jsonrpc": "2.0",
            "id": parsed.id,
            "result": {
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION")
            }
        })),
        method => {
            tracing::error!(procedure = %method, "Error in RPC handler: method not found");
            Json(rpc_error(parsed.id, -32601, "Method not found"))
        }
    }
}

fn rpc_error(id: Option<Value>, code: i32, message: &str) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {
            "code": code,
            "message": message
        }
    })
}
