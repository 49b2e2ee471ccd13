//! MCP server for a small in-memory note collection.
//!
//! Exposes `add_note`, `list_notes`, `search_notes`, and `delete_note` tools
//! plus `notes://list` and `notes://note/{id}` resources over JSON-RPC 2.0
//! stdio transport, compatible with any MCP-aware AI agent.

pub mod config;
pub mod handlers;
pub mod protocol;
pub mod server;
pub mod store;
pub mod tools;

pub mod schema;
