//! Application service layer.
//!
//! The contact service owns the contact collection and holds all CRUD and search
//! logic. Outer layers (the MCP server, the demo binary) call into it directly.

mod contact_service;

pub use contact_service::{demo_contact_details, ContactService};

// Re-export common types used by services
pub use crate::models::{Contact, ContactDetails};
