//! Model Context Protocol surface: JSON-RPC types and the stdio server.

pub mod protocol;
pub mod server;
