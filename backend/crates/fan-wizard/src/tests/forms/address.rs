use crate::forms::address::validate_address_field;
use crate::{AddressField, AddressForm};

use fan_core::Address;

use googletest::prelude::*;

#[test]
fn given_zip_code_digits_when_changed_then_single_key_masked_patch() {
    // Given
    let mut form = AddressForm::default();

    // When
    let patch = form.change(AddressField::ZipCode, "01305000");

    // Then
    assert_that!(patch.zip_code, some(eq("01305-000")));
    assert_that!(patch.street, none());
    assert_that!(patch.city, none());
}

#[test]
fn given_filled_address_when_single_field_patch_applied_then_siblings_survive() {
    // Given
    let mut address = Address {
        street: "Rua Augusta".to_string(),
        city: "São Paulo".to_string(),
        state: "SP".to_string(),
        ..Address::default()
    };
    let mut form = AddressForm::default();

    // When
    address.apply(form.change(AddressField::Number, "100"));

    // Then
    assert_that!(address.street, eq("Rua Augusta"));
    assert_that!(address.number, eq("100"));
    assert_that!(address.city, eq("São Paulo"));
}

#[test]
fn given_blank_required_field_when_blurred_then_labelled_error() {
    let mut form = AddressForm::default();

    let result = form.blur(AddressField::Neighborhood, "   ");

    assert_that!(result, err(anything()));
    assert_that!(
        form.errors().get("neighborhood"),
        some(eq("Bairro é obrigatório"))
    );
}

#[test]
fn given_blank_complement_when_blurred_then_ok() {
    let mut form = AddressForm::default();

    assert_that!(form.blur(AddressField::Complement, ""), ok(anything()));
}

#[test]
fn test_zip_code_rules() {
    assert_eq!(
        validate_address_field(AddressField::ZipCode, "")
            .unwrap_err()
            .user_message(),
        "CEP é obrigatório"
    );
    assert_eq!(
        validate_address_field(AddressField::ZipCode, "0130-500")
            .unwrap_err()
            .user_message(),
        "Por favor, insira um CEP válido"
    );
    assert!(validate_address_field(AddressField::ZipCode, "01305-000").is_ok());
}

#[test]
fn given_error_when_field_changed_then_cleared() {
    let mut form = AddressForm::default();
    let _ = form.blur(AddressField::City, "");

    form.change(AddressField::City, "R");

    assert_that!(form.errors().get("city"), none());
}
