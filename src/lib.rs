//! Contact Book - an in-memory contact book with CRUD and substring search.
//!
//! The [`ContactService`] owns an insertion-ordered collection of [`Contact`]
//! records. Lookups by unknown ID are ordinary outcomes (`None` / `false`),
//! never errors. The same service can be driven directly, through the `demo`
//! binary, or over the Model Context Protocol via [`ContactBookServer`].
//!
//! # Architecture
//!
//! - **domain**: The generated contact identifier
//! - **models**: The contact record and its editable details
//! - **services**: CRUD and search over the contact collection
//! - **server**: MCP tools mapping one-to-one onto service operations
//! - **config**: Configuration management from environment variables
//! - **error**: Error types for configuration and serving
//! - **observability**: Logging setup

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;
pub mod server;
pub mod services;

pub use config::Config;
pub use domain::ContactId;
pub use error::{ConfigError, ContactBookError};
pub use models::{Contact, ContactDetails};
pub use server::ContactBookServer;
pub use services::{demo_contact_details, ContactService};
