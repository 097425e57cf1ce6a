// 對外的協定層：JSON-RPC 型別與 MCP stdio server
pub mod mcp;
pub mod rpc;

pub use mcp::{McpError, McpServer};
