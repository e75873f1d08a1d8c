//! ContactId value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A type-safe wrapper for contact IDs.
///
/// IDs are random v4 UUIDs rendered in their hyphenated string form. They are
/// produced once when a contact is created and never change afterwards.
///
/// # Example
///
/// ```
/// use contact_book::domain::ContactId;
///
/// let id = ContactId::generate();
/// assert_eq!(id.as_str().len(), 36);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(String);

impl ContactId {
    /// Generate a fresh, unique ContactId.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for ContactId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ContactId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ContactId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// Display support
impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
