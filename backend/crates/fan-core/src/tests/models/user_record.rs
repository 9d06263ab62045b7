use crate::tests::{document, personal_record};
use crate::{AddressPatch, DocumentStatus, UserRecord, UserRecordPatch};

use googletest::prelude::*;

#[test]
fn given_address_patch_with_one_key_when_applied_then_siblings_are_kept() {
    // Given
    let mut record = UserRecord::default();
    record.apply(UserRecordPatch {
        address: Some(AddressPatch {
            street: Some("Rua Augusta".to_string()),
            city: Some("São Paulo".to_string()),
            ..AddressPatch::default()
        }),
        ..UserRecordPatch::default()
    });

    // When
    record.apply(UserRecordPatch {
        address: Some(AddressPatch {
            state: Some("SP".to_string()),
            ..AddressPatch::default()
        }),
        ..UserRecordPatch::default()
    });

    // Then
    assert_that!(record.address.street, eq("Rua Augusta"));
    assert_that!(record.address.city, eq("São Paulo"));
    assert_that!(record.address.state, eq("SP"));
}

#[test]
fn given_patch_with_name_only_when_applied_then_other_fields_untouched() {
    let mut record = personal_record();

    record.apply(UserRecordPatch {
        name: Some("Ana Lima".to_string()),
        ..UserRecordPatch::default()
    });

    assert_that!(record.name, eq("Ana Lima"));
    assert_that!(record.email, eq("ana@example.com"));
}

#[test]
fn given_empty_complement_when_applied_then_cleared() {
    let mut record = UserRecord::default();
    record.address.complement = Some("Apto 12".to_string());

    record.apply(UserRecordPatch {
        address: Some(AddressPatch {
            complement: Some(String::new()),
            ..AddressPatch::default()
        }),
        ..UserRecordPatch::default()
    });

    assert_that!(record.address.complement, none());
}

#[test]
fn given_record_when_serialized_then_uses_camel_case_keys() {
    let mut record = personal_record();
    record.documents.push(document(DocumentStatus::Pending));

    let json = record.to_json().unwrap();

    assert_that!(json, contains_substring("\"nationalId\""));
    assert_that!(json, contains_substring("\"zipCode\""));
    assert_that!(json, contains_substring("\"socialProfiles\""));
    assert_that!(json, contains_substring("\"type\":\"identity_card\""));
}

#[test]
fn given_serialized_record_when_deserialized_then_equal() {
    let mut record = personal_record();
    record.interests = vec!["CS2".to_string(), "Valorant".to_string()];
    record.documents.push(document(DocumentStatus::Verified));

    let restored = UserRecord::from_json(&record.to_json().unwrap()).unwrap();

    assert_that!(restored, eq(&record));
}

#[test]
fn given_partial_json_when_deserialized_then_missing_fields_default() {
    let restored = UserRecord::from_json(r#"{"name":"Ana"}"#).unwrap();

    assert_that!(restored.name, eq("Ana"));
    assert_that!(restored.interests, is_empty());
    assert_that!(restored.created_at, none());
}

#[test]
fn given_garbage_when_deserialized_then_error() {
    assert_that!(UserRecord::from_json("not json"), err(anything()));
}
