//! MCP server implementation for the contact book.
//!
//! This module exposes the contact service to AI assistants through the
//! Model Context Protocol, one tool per service operation.

pub mod handlers;

pub use handlers::ContactBookServer;

use crate::error::{ContactBookError, ContactBookResult};
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the contact book server with stdio transport.
///
/// Communicates via stdin/stdout using the MCP protocol and returns when the
/// client disconnects.
pub async fn run_server(server: ContactBookServer) -> ContactBookResult<()> {
    let service = server
        .serve(stdio())
        .await
        .map_err(|e| ContactBookError::Transport(e.to_string()))?;

    service
        .waiting()
        .await
        .map_err(|e| ContactBookError::Transport(e.to_string()))?;

    Ok(())
}
