pub mod request;
pub mod response;

pub use request::{
    AddNoteParams, ClientInfo, DeleteNoteParams, InitializeParams, JsonRpcRequest,
    ReadResourceParams, RpcId, SearchNotesParams, ToolCallParams,
};
pub use response::{
    JsonRpcError, JsonRpcResponse, ListResourcesResult, McpError, McpErrorCode,
    McpErrorResponse, ReadResourceResult, ResourceContents, ResourceDescriptor, ToolResult,
    ToolResultContent,
};
