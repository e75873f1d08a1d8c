//! Domain value objects and types.
//!
//! Contact fields are free-form strings and are never validated; the only value
//! object is the generated contact identifier.

pub mod contact_id;

pub use contact_id::ContactId;
