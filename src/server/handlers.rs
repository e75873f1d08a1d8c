//! MCP tool handlers for the contact book server.
//!
//! This module implements all the MCP tools using the rmcp SDK's tool_router pattern.
//! Unknown contact IDs are reported inside the JSON payload, not as protocol errors.

use crate::models::ContactDetails;
use crate::services::ContactService;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The MCP server that exposes the contact book as tools.
///
/// The service itself does no locking, so every tool goes through one
/// `RwLock` guarding the whole collection.
#[derive(Clone)]
pub struct ContactBookServer {
    service: Arc<RwLock<ContactService>>,
    name: String,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for ContactBookServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: self.name.clone(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("In-memory contact book - create, list, look up, update, delete and search contacts by name, email, phone or company.".into()),
        }
    }
}

// Helper structs for tool parameters
#[derive(Debug, Deserialize, JsonSchema)]
struct AddContactToolParams {
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    company: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ContactIdParams {
    contact_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct UpdateContactToolParams {
    contact_id: String,
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    company: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SearchContactsParams {
    query: String,
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn json_result(value: serde_json::Value) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(&value).map_err(to_mcp_error)?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

// Tool router implementation
#[tool_router]
impl ContactBookServer {
    /// Create a server owning `service`.
    pub fn new(service: ContactService, name: impl Into<String>) -> Self {
        Self::with_shared(Arc::new(RwLock::new(service)), name)
    }

    /// Create a server around a service the caller also holds.
    pub fn with_shared(service: Arc<RwLock<ContactService>>, name: impl Into<String>) -> Self {
        Self {
            service,
            name: name.into(),
            tool_router: Self::tool_router(),
        }
    }

    /// Create a new contact.
    #[tool(description = "Create a new contact. A unique ID is generated and returned with the stored record.")]
    async fn add_contact(
        &self,
        params: Parameters<AddContactToolParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let details = ContactDetails {
            name: params.name,
            email: params.email,
            phone: params.phone,
            company: params.company,
        };

        let contact = self.service.write().await.add_contact(details);
        tracing::debug!(contact_id = %contact.id(), "MCP Handler: add_contact completed");

        json_result(serde_json::to_value(&contact).map_err(to_mcp_error)?)
    }

    /// List every contact in insertion order.
    #[tool(description = "List every contact in the order they were added")]
    async fn list_contacts(&self) -> Result<CallToolResult, McpError> {
        let contacts = self.service.read().await.get_all_contacts();

        json_result(serde_json::json!({
            "count": contacts.len(),
            "contacts": contacts,
        }))
    }

    /// Retrieve a single contact by ID.
    #[tool(description = "Retrieve a contact by its exact ID. Reports found=false when no contact has that ID.")]
    async fn get_contact(
        &self,
        params: Parameters<ContactIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let found = self.service.read().await.get_contact_by_id(&params.contact_id);

        let response = match found {
            Some(contact) => serde_json::json!({
                "found": true,
                "contact": contact,
            }),
            None => serde_json::json!({
                "found": false,
                "contact_id": params.contact_id,
            }),
        };

        json_result(response)
    }

    /// Overwrite the name, email, phone and company of a contact.
    #[tool(description = "Replace the name, email, phone and company of an existing contact. Reports updated=false when no contact has that ID.")]
    async fn update_contact(
        &self,
        params: Parameters<UpdateContactToolParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let details = ContactDetails {
            name: params.name,
            email: params.email,
            phone: params.phone,
            company: params.company,
        };

        let updated = self
            .service
            .write()
            .await
            .update_contact(&params.contact_id, details);

        json_result(serde_json::json!({
            "contact_id": params.contact_id,
            "updated": updated,
        }))
    }

    /// Delete a contact.
    #[tool(description = "Delete a contact by ID. Reports deleted=false when no contact has that ID.")]
    async fn delete_contact(
        &self,
        params: Parameters<ContactIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let deleted = self
            .service
            .write()
            .await
            .delete_contact(&params.contact_id);

        json_result(serde_json::json!({
            "contact_id": params.contact_id,
            "deleted": deleted,
        }))
    }

    /// Substring search over name, email, company and phone.
    #[tool(
        description = "Search contacts by substring. Name, email and company match case-insensitively; phone numbers match exactly. An empty query returns every contact."
    )]
    async fn search_contacts(
        &self,
        params: Parameters<SearchContactsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let results = self.service.read().await.search_contacts(&params.query);

        json_result(serde_json::json!({
            "query": params.query,
            "result_count": results.len(),
            "results": results,
        }))
    }
}
