use pulsebook_core::{
    prefill, submit_edit, submit_new, Contact, ContactDraft, ContactStatus, ContactStore,
    DeleteConfirmation, FormError, MemoryStorage,
};
use uuid::Uuid;

fn seeded_store() -> (ContactStore<MemoryStorage>, Contact) {
    let mut store = ContactStore::hydrate(MemoryStorage::new());
    let contact = Contact::new(
        "Jane Doe",
        "jane@x.com",
        "12345678",
        Some("1 Main St".to_string()),
        ContactStatus::Active,
    );
    store.add(contact.clone()).unwrap();
    (store, contact)
}

#[test]
fn delete_request_then_cancel_leaves_collection_unchanged() {
    let (mut store, contact) = seeded_store();
    let mut confirmation = DeleteConfirmation::new();

    confirmation.request(contact.id);
    assert!(confirmation.is_pending());
    assert_eq!(confirmation.pending(), Some(contact.id));

    confirmation.cancel();
    assert!(!confirmation.is_pending());
    assert_eq!(store.len(), 1);

    // A cleared confirmation applies nothing.
    let confirmed = confirmation.confirm(&mut store).unwrap();
    assert_eq!(confirmed, None);
    assert_eq!(store.len(), 1);
}

#[test]
fn delete_request_then_confirm_removes_target() {
    let (mut store, contact) = seeded_store();
    let mut confirmation = DeleteConfirmation::new();

    confirmation.request(contact.id);
    let confirmed = confirmation.confirm(&mut store).unwrap();

    assert_eq!(confirmed, Some(contact.id));
    assert!(!confirmation.is_pending());
    assert!(store.get(contact.id).is_none());
}

#[test]
fn second_request_replaces_pending_target() {
    let (mut store, first) = seeded_store();
    let second = Contact::new(
        "Bob",
        "bob@x.com",
        "87654321",
        None,
        ContactStatus::Inactive,
    );
    store.add(second.clone()).unwrap();

    let mut confirmation = DeleteConfirmation::new();
    confirmation.request(first.id);
    confirmation.request(second.id);

    let confirmed = confirmation.confirm(&mut store).unwrap();
    assert_eq!(confirmed, Some(second.id));
    assert!(store.get(first.id).is_some());
}

#[test]
fn submit_new_appends_validated_contact() {
    let mut store = ContactStore::hydrate(MemoryStorage::new());
    let draft = ContactDraft {
        name: "Jane Doe".to_string(),
        email: "jane@x.com".to_string(),
        phone: "12345678".to_string(),
        address: String::new(),
        status: "active".to_string(),
    };

    let id = submit_new(&mut store, &draft).unwrap();

    let stored = store.get(id).unwrap();
    assert_eq!(stored.name, "Jane Doe");
    assert_eq!(stored.address, None);
    assert_eq!(stored.status, ContactStatus::Active);
    assert_eq!(store.len(), 1);
}

#[test]
fn invalid_draft_blocks_submission() {
    let mut store = ContactStore::hydrate(MemoryStorage::new());
    let draft = ContactDraft {
        phone: "123".to_string(),
        ..ContactDraft::default()
    };

    let err = submit_new(&mut store, &draft).unwrap_err();
    match err {
        FormError::Validation(errors) => assert!(errors.contains_key("phone")),
        other => panic!("expected validation error, got {other}"),
    }
    assert!(store.is_empty());
}

#[test]
fn submit_edit_preserves_the_id() {
    let (mut store, contact) = seeded_store();
    let mut draft = prefill(&store, contact.id).unwrap();
    draft.phone = "87654321".to_string();

    submit_edit(&mut store, contact.id, &draft).unwrap();

    let stored = store.get(contact.id).unwrap();
    assert_eq!(stored.id, contact.id);
    assert_eq!(stored.phone, "87654321");
    assert_eq!(stored.name, "Jane Doe");
    assert_eq!(stored.email, "jane@x.com");
    assert_eq!(store.len(), 1);
}

#[test]
fn submit_edit_of_unknown_id_is_accepted_but_changes_nothing() {
    let (mut store, _) = seeded_store();
    let unknown = Uuid::parse_str("00000000-0000-7000-8000-0000000000ff").unwrap();
    let draft = ContactDraft {
        name: "Zed".to_string(),
        email: "zed@x.com".to_string(),
        phone: "12345678".to_string(),
        address: String::new(),
        status: "inactive".to_string(),
    };

    submit_edit(&mut store, unknown, &draft).unwrap();

    assert_eq!(store.len(), 1);
    assert!(store.get(unknown).is_none());
}

#[test]
fn prefill_round_trips_the_stored_record() {
    let (store, contact) = seeded_store();

    let draft = prefill(&store, contact.id).unwrap();
    assert_eq!(draft.name, "Jane Doe");
    assert_eq!(draft.email, "jane@x.com");
    assert_eq!(draft.phone, "12345678");
    assert_eq!(draft.address, "1 Main St");
    assert_eq!(draft.status, "active");

    let unknown = Uuid::parse_str("00000000-0000-7000-8000-0000000000ff").unwrap();
    assert!(prefill(&store, unknown).is_none());
}

#[test]
fn prefill_renders_absent_address_as_blank_input() {
    let mut store = ContactStore::hydrate(MemoryStorage::new());
    let contact = Contact::new("Bob", "bob@x.com", "12345678", None, ContactStatus::Inactive);
    store.add(contact.clone()).unwrap();

    let draft = prefill(&store, contact.id).unwrap();
    assert_eq!(draft.address, "");
    assert_eq!(draft.status, "inactive");
}
