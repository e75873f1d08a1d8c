//! Test fixtures and sample data.
//!
//! Reusable contact details and a helper for building a populated service.

use contact_book::{Contact, ContactDetails, ContactService};

/// Create sample contact details with an email derived from the name.
pub fn sample_details(name: &str, company: &str) -> ContactDetails {
    let local = name.to_lowercase().replace(' ', ".");
    ContactDetails::new(name, format!("{}@example.com", local), company)
}

/// Create sample contact details with a phone number.
#[allow(dead_code)]
pub fn sample_details_with_phone(name: &str, company: &str, phone: &str) -> ContactDetails {
    sample_details(name, company).with_phone(phone)
}

/// Build a service holding the given contacts, returning the created records too.
#[allow(dead_code)]
pub fn service_with(details: Vec<ContactDetails>) -> (ContactService, Vec<Contact>) {
    let mut service = ContactService::new();
    let created = details
        .into_iter()
        .map(|d| service.add_contact(d))
        .collect();
    (service, created)
}

/// IDs of the given contacts, in order.
#[allow(dead_code)]
pub fn ids(contacts: &[Contact]) -> Vec<String> {
    contacts.iter().map(|c| c.id().to_string()).collect()
}
