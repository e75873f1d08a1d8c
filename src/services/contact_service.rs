//! Contact service layer.
//!
//! CRUD and substring search over an in-memory, insertion-ordered collection.

use crate::models::{Contact, ContactDetails};
use tracing::{debug, info};

/// The three contacts used by the demo binary and by `CONTACT_BOOK_SEED_DEMO`.
pub fn demo_contact_details() -> [ContactDetails; 3] {
    [
        ContactDetails::new("Alina Sharma", "alina.sharma@example.com", "Tech Innovators")
            .with_phone("98765 43210"),
        ContactDetails::new("Ravi Verma", "ravi.verma@consult.net", "Global Consult")
            .with_phone("99001 23456"),
        ContactDetails::new("Priya Singh", "priya.singh@design.org", "Creative Hub")
            .with_phone("87654 32109"),
    ]
}

/// Owns every contact and exposes CRUD + search over them.
///
/// Reads hand out clones, so nothing a caller does to a returned value reaches the
/// stored records. Lookups are linear scans by exact ID. The service has no internal
/// locking; callers sharing it across tasks wrap it themselves.
#[derive(Debug, Default)]
pub struct ContactService {
    contacts: Vec<Contact>,
}

impl ContactService {
    /// Create an empty contact service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service pre-populated with [`demo_contact_details`].
    pub fn with_demo_contacts() -> Self {
        let mut service = Self::new();
        for details in demo_contact_details() {
            service.add_contact(details);
        }
        service
    }

    /// Create a contact with a fresh ID and append it to the collection.
    pub fn add_contact(&mut self, details: ContactDetails) -> Contact {
        let contact = Contact::new(details);
        info!("Added contact: {}", contact);
        self.contacts.push(contact.clone());
        contact
    }

    /// Snapshot of every contact in insertion order.
    pub fn get_all_contacts(&self) -> Vec<Contact> {
        self.contacts.clone()
    }

    /// Find a contact by exact, case-sensitive ID.
    pub fn get_contact_by_id(&self, id: &str) -> Option<Contact> {
        let found = self.contacts.iter().find(|c| c.id() == id).cloned();
        if found.is_none() {
            debug!(contact_id = %id, "Contact not found");
        }
        found
    }

    /// Overwrite all editable fields of a contact.
    ///
    /// Returns `false` without touching anything when no contact has this ID.
    pub fn update_contact(&mut self, id: &str, details: ContactDetails) -> bool {
        match self.contacts.iter_mut().find(|c| c.id() == id) {
            Some(contact) => {
                contact.apply(details);
                info!("Updated contact: {}", contact);
                true
            }
            None => {
                debug!(contact_id = %id, "Update skipped, contact not found");
                false
            }
        }
    }

    /// Remove a contact, shifting later contacts down by one.
    ///
    /// Returns `false` when no contact has this ID.
    pub fn delete_contact(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(index) => {
                self.contacts.remove(index);
                info!("Deleted contact with ID: {}", id);
                true
            }
            None => {
                debug!(contact_id = %id, "Delete skipped, contact not found");
                false
            }
        }
    }

    /// All contacts matching `term`, in insertion order.
    ///
    /// See [`Contact::matches`] for the matching rules. An empty term matches everything.
    pub fn search_contacts(&self, term: &str) -> Vec<Contact> {
        let term_lower = term.to_lowercase();
        let results: Vec<Contact> = self
            .contacts
            .iter()
            .filter(|c| c.matches_term(term, &term_lower))
            .cloned()
            .collect();

        debug!(
            term = %term,
            result_count = results.len(),
            "Search completed"
        );
        results
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.contacts.iter().position(|c| c.id() == id)
    }
}
