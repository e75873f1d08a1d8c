//! The demo walkthrough as a test: three contacts, a search, an update and a delete.

use contact_book::{demo_contact_details, ContactDetails, ContactService};

#[test]
fn test_demo_walkthrough() {
    let mut service = ContactService::new();
    let [alina, ravi, priya] = demo_contact_details();
    let alina = service.add_contact(alina);
    let ravi = service.add_contact(ravi);
    let priya = service.add_contact(priya);

    let tech = service.search_contacts("tech");
    assert_eq!(tech.len(), 1);
    assert_eq!(tech[0].id(), alina.id());

    assert!(service.update_contact(
        alina.id().as_str(),
        ContactDetails::new("Alina Sharma", "alina.sharma@newcompany.com", "New Tech Corp")
            .with_phone("98765 43210"),
    ));
    let updated = service.get_contact_by_id(alina.id().as_str()).unwrap();
    assert_eq!(updated.email(), "alina.sharma@newcompany.com");
    assert_eq!(updated.company(), "New Tech Corp");

    assert!(service.delete_contact(ravi.id().as_str()));

    let remaining = service.get_all_contacts();
    assert_eq!(remaining.len(), 2);
    assert_eq!(remaining[0].id(), alina.id());
    assert_eq!(remaining[1].id(), priya.id());
}

#[test]
fn test_demo_phone_search() {
    let service = ContactService::with_demo_contacts();

    let results = service.search_contacts("99001");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name(), "Ravi Verma");
}
