//! Contact model representing a person in the contact book.

use crate::domain::ContactId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The editable part of a contact: everything except its identity and timestamps.
///
/// Used both to create contacts and to overwrite the fields of an existing one.
/// No field is validated; empty strings are accepted as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    /// Full name
    pub name: String,

    /// Email address
    pub email: String,

    /// Phone number, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Company/organization
    pub company: String,
}

impl ContactDetails {
    /// Create details without a phone number.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: None,
            company: company.into(),
        }
    }

    /// Attach a phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

/// A contact in the contact book.
///
/// The `id` is assigned at construction and has no setter. Every other field can be
/// read and written independently; writes refresh `updated_at`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contact {
    id: ContactId,
    name: String,
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
    company: String,
    /// When the contact was created (RFC 3339 timestamp)
    created_at: String,
    /// When any field was last written (RFC 3339 timestamp)
    updated_at: String,
}

impl Contact {
    /// Create a new contact with a freshly generated ID.
    pub fn new(details: ContactDetails) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: ContactId::generate(),
            name: details.name,
            email: details.email,
            phone: details.phone,
            company: details.company,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    pub fn id(&self) -> &ContactId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    pub fn updated_at(&self) -> &str {
        &self.updated_at
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.touch();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
        self.touch();
    }

    pub fn set_phone(&mut self, phone: Option<String>) {
        self.phone = phone;
        self.touch();
    }

    pub fn set_company(&mut self, company: impl Into<String>) {
        self.company = company.into();
        self.touch();
    }

    /// Overwrite all four editable fields at once.
    pub fn apply(&mut self, details: ContactDetails) {
        self.name = details.name;
        self.email = details.email;
        self.phone = details.phone;
        self.company = details.company;
        self.touch();
    }

    /// Copy the editable fields back out.
    pub fn details(&self) -> ContactDetails {
        ContactDetails {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            company: self.company.clone(),
        }
    }

    /// Whether this contact matches a search term.
    ///
    /// Name, email and company match case-insensitively; the phone number matches
    /// case-sensitively and only when present.
    pub fn matches(&self, term: &str) -> bool {
        self.matches_term(term, &term.to_lowercase())
    }

    /// Same as [`Contact::matches`] with the lower-cased term computed by the caller.
    pub(crate) fn matches_term(&self, term: &str, term_lower: &str) -> bool {
        self.name.to_lowercase().contains(term_lower)
            || self.email.to_lowercase().contains(term_lower)
            || self.company.to_lowercase().contains(term_lower)
            || self
                .phone
                .as_deref()
                .map(|phone| phone.contains(term))
                .unwrap_or(false)
    }

    fn touch(&mut self) {
        self.updated_at = chrono::Utc::now().to_rfc3339();
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} <{}> phone: {} company: {} [id: {}]",
            self.name,
            self.email,
            self.phone.as_deref().unwrap_or("-"),
            self.company,
            self.id
        )
    }
}
