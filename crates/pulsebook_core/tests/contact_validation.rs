use pulsebook_core::form::validator::{
    validate_contact, ContactDraft, FIELD_ADDRESS, FIELD_EMAIL, FIELD_NAME, FIELD_PHONE,
    FIELD_STATUS,
};
use pulsebook_core::ContactStatus;

fn valid_draft() -> ContactDraft {
    ContactDraft {
        name: "Jane Doe".to_string(),
        email: "jane@x.com".to_string(),
        phone: "12345678".to_string(),
        address: String::new(),
        status: "active".to_string(),
    }
}

#[test]
fn accepts_valid_draft_and_normalizes_it() {
    let validated = validate_contact(&valid_draft()).expect("draft should validate");
    assert_eq!(validated.name, "Jane Doe");
    assert_eq!(validated.email, "jane@x.com");
    assert_eq!(validated.phone, "12345678");
    assert_eq!(validated.address, None);
    assert_eq!(validated.status, ContactStatus::Active);
}

#[test]
fn accepts_boundary_lengths() {
    let mut draft = valid_draft();
    draft.name = "Jo".to_string();
    draft.address = "a".repeat(255);
    draft.phone = "1234567890".to_string();
    assert!(validate_contact(&draft).is_ok());

    draft.name = "x".repeat(50);
    draft.phone = "12345678".to_string();
    assert!(validate_contact(&draft).is_ok());
}

#[test]
fn rejects_empty_name() {
    let mut draft = valid_draft();
    draft.name = String::new();
    let errors = validate_contact(&draft).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[FIELD_NAME], "Name is required");
}

#[test]
fn rejects_too_short_and_too_long_name() {
    let mut draft = valid_draft();
    draft.name = "J".to_string();
    let errors = validate_contact(&draft).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[FIELD_NAME], "Name must be at least 2 characters long");

    draft.name = "x".repeat(51);
    let errors = validate_contact(&draft).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[FIELD_NAME], "Name cannot exceed 50 characters");
}

#[test]
fn rejects_missing_and_malformed_email() {
    let mut draft = valid_draft();
    draft.email = String::new();
    let errors = validate_contact(&draft).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[FIELD_EMAIL], "Email is required");

    draft.email = "jane-at-x.com".to_string();
    let errors = validate_contact(&draft).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[FIELD_EMAIL], "Invalid email format");
}

#[test]
fn rejects_overlong_email() {
    let mut draft = valid_draft();
    // 95 + 1 + 5 = 101 characters, syntactically valid.
    draft.email = format!("{}@x.com", "a".repeat(95));
    let errors = validate_contact(&draft).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[FIELD_EMAIL], "Email cannot exceed 100 characters");
}

#[test]
fn phone_violation_is_keyed_to_the_phone_field_only() {
    let mut draft = valid_draft();
    draft.phone = "123".to_string();
    let errors = validate_contact(&draft).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[FIELD_PHONE], "Phone number must be 8-10 digits long");
}

#[test]
fn rejects_nondigit_and_out_of_range_phones() {
    let mut draft = valid_draft();
    for phone in ["1234567", "12345678901", "1234567a", "+12345678"] {
        draft.phone = phone.to_string();
        let errors = validate_contact(&draft).unwrap_err();
        assert_eq!(errors[FIELD_PHONE], "Phone number must be 8-10 digits long");
    }

    draft.phone = String::new();
    let errors = validate_contact(&draft).unwrap_err();
    assert_eq!(errors[FIELD_PHONE], "Phone number is required");
}

#[test]
fn address_is_optional_but_bounded() {
    let mut draft = valid_draft();
    draft.address = "1 Main St".to_string();
    let validated = validate_contact(&draft).unwrap();
    assert_eq!(validated.address.as_deref(), Some("1 Main St"));

    draft.address = "a".repeat(256);
    let errors = validate_contact(&draft).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[FIELD_ADDRESS], "Address cannot exceed 255 characters");
}

#[test]
fn rejects_unknown_and_missing_status() {
    let mut draft = valid_draft();
    draft.status = "pending".to_string();
    let errors = validate_contact(&draft).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[FIELD_STATUS],
        "Status must be either \"active\" or \"inactive\""
    );

    draft.status = String::new();
    let errors = validate_contact(&draft).unwrap_err();
    assert_eq!(errors[FIELD_STATUS], "Status is required");
}

#[test]
fn status_matching_is_exact() {
    let mut draft = valid_draft();
    draft.status = "Active".to_string();
    assert!(validate_contact(&draft).is_err());

    draft.status = "inactive".to_string();
    let validated = validate_contact(&draft).unwrap();
    assert_eq!(validated.status, ContactStatus::Inactive);
}

#[test]
fn errors_accumulate_across_fields_one_message_each() {
    let draft = ContactDraft {
        name: String::new(),
        email: "bad".to_string(),
        phone: "123".to_string(),
        address: String::new(),
        status: "unknown".to_string(),
    };

    let errors = validate_contact(&draft).unwrap_err();
    assert_eq!(errors.len(), 4);
    assert!(errors.contains_key(FIELD_NAME));
    assert!(errors.contains_key(FIELD_EMAIL));
    assert!(errors.contains_key(FIELD_PHONE));
    assert!(errors.contains_key(FIELD_STATUS));
    assert!(!errors.contains_key(FIELD_ADDRESS));
}

#[test]
fn lengths_are_counted_in_characters_not_bytes() {
    let mut draft = valid_draft();
    // Two characters, six UTF-8 bytes.
    draft.name = "日本".to_string();
    assert!(validate_contact(&draft).is_ok());
}
