//! Scripted walkthrough of the contact service.
//!
//! Adds three contacts, lists them, searches, updates one, deletes one and prints
//! the final list. Listings go to stdout; progress logging goes to stderr.

use anyhow::Result;
use contact_book::observability::init_tracing;
use contact_book::{demo_contact_details, Config, Contact, ContactDetails, ContactService};

fn print_contacts(title: &str, contacts: &[Contact]) {
    println!("\n{}", title);
    for contact in contacts {
        println!("  {}", contact);
    }
}

fn main() -> Result<()> {
    let config = Config::from_env()?;
    init_tracing(&config.log_level);

    let mut service = ContactService::new();

    println!("=== Contact Manager Demo ===");

    let [alina, ravi, priya] = demo_contact_details();
    let alina = service.add_contact(alina);
    let ravi = service.add_contact(ravi);
    service.add_contact(priya);

    print_contacts("All Contacts:", &service.get_all_contacts());
    print_contacts("Search results for 'tech':", &service.search_contacts("tech"));

    service.update_contact(
        alina.id().as_str(),
        ContactDetails::new("Alina Sharma", "alina.sharma@newcompany.com", "New Tech Corp")
            .with_phone("98765 43210"),
    );

    service.delete_contact(ravi.id().as_str());

    print_contacts("Final Contacts:", &service.get_all_contacts());
    Ok(())
}
