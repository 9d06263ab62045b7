use crate::{InterestsForm, PREDEFINED_INTERESTS, WizardError};

use googletest::prelude::*;

fn interests(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_predefined_interests_are_unique() {
    let mut sorted = PREDEFINED_INTERESTS.to_vec();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), 25);
}

#[test]
fn given_unselected_interest_when_toggled_then_appended() {
    let mut form = InterestsForm::default();

    let updated = form.toggle(&interests(&["CS2"]), "Valorant").unwrap();

    assert_that!(updated, elements_are![eq("CS2"), eq("Valorant")]);
}

#[test]
fn given_selected_interest_when_toggled_then_removed() {
    let mut form = InterestsForm::default();

    let updated = form.toggle(&interests(&["CS2", "Valorant"]), "CS2").unwrap();

    assert_that!(updated, elements_are![eq("Valorant")]);
}

#[test]
fn given_selected_custom_interest_when_toggled_then_removed() {
    let mut form = InterestsForm::default();

    let updated = form.toggle(&interests(&["CS2", "Xadrez"]), "Xadrez").unwrap();

    assert_that!(updated, elements_are![eq("CS2")]);
}

#[test]
fn given_blank_or_unknown_interest_when_toggled_then_field_error() {
    let mut form = InterestsForm::default();

    for interest in ["", " ", "x", "Xadrez"] {
        let result = form.toggle(&interests(&["CS2"]), interest);

        match result {
            Err(WizardError::Field { field, .. }) => assert_that!(field, eq("interest")),
            other => panic!("expected field error for {interest:?}, got {other:?}"),
        }
    }
}

#[test]
fn given_custom_interest_with_spaces_when_added_then_trimmed_and_appended() {
    let mut form = InterestsForm::default();

    let updated = form.add_custom(&interests(&["CS2"]), "  Xadrez  ").unwrap();

    assert_that!(updated, elements_are![eq("CS2"), eq("Xadrez")]);
    assert_that!(form.error(), none());
}

#[test]
fn given_blank_custom_interest_when_added_then_field_error() {
    let mut form = InterestsForm::default();

    let result = form.add_custom(&[], "   ");

    assert!(matches!(result, Err(WizardError::Field { .. })));
    assert_that!(form.error(), some(eq("Por favor, insira um interesse")));
}

#[test]
fn given_one_character_custom_interest_when_added_then_field_error() {
    let mut form = InterestsForm::default();

    let result = form.add_custom(&[], "X");

    assert_that!(result, err(anything()));
    assert_that!(
        form.error(),
        some(eq("O interesse deve ter pelo menos 2 caracteres"))
    );
}

#[test]
fn given_existing_interest_when_added_again_then_duplicate_error() {
    let mut form = InterestsForm::default();

    let result = form.add_custom(&interests(&["Cosplay"]), "Cosplay");

    assert!(matches!(result, Err(WizardError::Duplicate { .. })));
    assert_that!(form.error(), some(eq("Este interesse já foi adicionado")));
}

#[test]
fn given_error_when_valid_interest_added_then_error_cleared() {
    let mut form = InterestsForm::default();
    let _ = form.add_custom(&[], "");

    form.add_custom(&[], "Xadrez").unwrap();

    assert_that!(form.error(), none());
}

#[test]
fn given_interest_when_removed_then_others_keep_order() {
    let mut form = InterestsForm::default();

    let updated = form.remove(&interests(&["A1", "B2", "C3"]), "B2");

    assert_that!(updated, elements_are![eq("A1"), eq("C3")]);
}
