pub mod notes;
pub mod resources;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use crate::protocol::{
    InitializeParams, JsonRpcError, JsonRpcRequest, JsonRpcResponse, McpError,
    ReadResourceParams, ToolCallParams, ToolResult,
};
use crate::schema::validate_arguments;
use crate::store::NoteStore;
use crate::tools::Tool;

/// Name reported in `serverInfo`.
pub const SERVER_NAME: &str = "notes-manager";

/// Dispatch a JSON-RPC request to the appropriate handler.
///
/// Returns `None` for notifications (no response required).
pub fn dispatch(req: &JsonRpcRequest, store: &mut NoteStore) -> Option<JsonRpcResponse> {
    if req.method.starts_with("notifications/") {
        return None;
    }

    let outcome = match req.method.as_str() {
        "initialize" => {
            log_client(req);
            Ok(json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {
                    "tools": {},
                    "resources": {}
                },
                "serverInfo": {
                    "name": SERVER_NAME,
                    "version": env!("CARGO_PKG_VERSION")
                }
            }))
        }

        "ping" => Ok(json!({})),

        "tools/list" => {
            let tools: Vec<Value> = Tool::ALL.iter().map(Tool::descriptor).collect();
            Ok(json!({ "tools": tools }))
        }

        "tools/call" => parse_params::<ToolCallParams>(req)
            .and_then(|params| dispatch_tool_call(&params, store).map_err(DispatchError::from))
            .and_then(|result| to_json(&result)),

        "resources/list" => to_json(&resources::list(store)),

        "resources/read" => parse_params::<ReadResourceParams>(req)
            .and_then(|params| resources::read(&params.uri, store).map_err(DispatchError::from))
            .and_then(|result| to_json(&result)),

        _ => {
            tracing::warn!(method = %req.method, "unknown method");
            Err(DispatchError::from(JsonRpcError::method_not_found(&req.method)))
        }
    };

    if req.is_notification() {
        return None;
    }

    Some(match outcome {
        Ok(result) => JsonRpcResponse::success(req.id.clone(), result),
        Err(DispatchError::Protocol(err)) => JsonRpcResponse::error(req.id.clone(), err),
        Err(DispatchError::Mcp(err)) => {
            tracing::debug!(method = %req.method, code = ?err.code, "{}", err.message);
            JsonRpcResponse::error(req.id.clone(), err.into())
        }
    })
}

fn log_client(req: &JsonRpcRequest) {
    let params = req
        .params
        .as_ref()
        .and_then(|v| serde_json::from_value::<InitializeParams>(v.clone()).ok());
    if let Some(params) = params {
        let client = params.client_info.as_ref();
        tracing::info!(
            client = client.and_then(|c| c.name.as_deref()).unwrap_or("unknown"),
            client_version = client.and_then(|c| c.version.as_deref()).unwrap_or("unknown"),
            protocol = params.protocol_version.as_deref().unwrap_or("unspecified"),
            "initialize"
        );
    }
}

/// Route a `tools/call` to its tool handler.
pub fn dispatch_tool_call(
    params: &ToolCallParams,
    store: &mut NoteStore,
) -> Result<ToolResult, McpError> {
    let tool = Tool::from_name(&params.name)
        .ok_or_else(|| McpError::method_not_found(format!("Unknown tool: {}", params.name)))?;
    tracing::debug!(tool = tool.name(), "tool call");

    let arguments = params.arguments.clone().unwrap_or_else(|| json!({}));

    match tool {
        Tool::AddNote => notes::add_note(tool_arguments(tool, arguments)?, store),
        Tool::ListNotes => {
            check_arguments(tool, &arguments)?;
            notes::list_notes(store)
        }
        Tool::SearchNotes => notes::search_notes(tool_arguments(tool, arguments)?, store),
        Tool::DeleteNote => notes::delete_note(tool_arguments(tool, arguments)?, store),
    }
}

/// Validate tool arguments against the advertised schema, then deserialize
/// them into the tool's parameter struct.
fn tool_arguments<T: DeserializeOwned>(tool: Tool, arguments: Value) -> Result<T, McpError> {
    check_arguments(tool, &arguments)?;
    serde_json::from_value(arguments).map_err(|e| invalid_arguments(tool, e))
}

fn check_arguments(tool: Tool, arguments: &Value) -> Result<(), McpError> {
    validate_arguments(tool, arguments).map_err(|e| invalid_arguments(tool, e))
}

fn invalid_arguments(tool: Tool, detail: impl std::fmt::Display) -> McpError {
    McpError::invalid_request(format!("Invalid arguments for {}: {detail}", tool.name()))
}

/// Failure while handling a request: either a JSON-RPC envelope problem or
/// an MCP-level error raised by a handler.
enum DispatchError {
    Protocol(JsonRpcError),
    Mcp(McpError),
}

impl From<JsonRpcError> for DispatchError {
    fn from(err: JsonRpcError) -> Self {
        Self::Protocol(err)
    }
}

impl From<McpError> for DispatchError {
    fn from(err: McpError) -> Self {
        Self::Mcp(err)
    }
}

fn parse_params<T: DeserializeOwned>(req: &JsonRpcRequest) -> Result<T, DispatchError> {
    let value = req.params.as_ref().ok_or_else(|| {
        JsonRpcError::invalid_params(format!("Missing params for {}", req.method))
    })?;
    serde_json::from_value(value.clone()).map_err(|e| {
        DispatchError::from(JsonRpcError::invalid_params(format!(
            "Invalid {} params: {e}",
            req.method
        )))
    })
}

fn to_json<T: Serialize>(result: &T) -> Result<Value, DispatchError> {
    serde_json::to_value(result).map_err(|e| {
        tracing::error!("Serialization failed: {e}");
        DispatchError::from(McpError::internal("Internal error"))
    })
}
