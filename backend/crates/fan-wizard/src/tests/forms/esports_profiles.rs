use crate::{ESPORTS_PLATFORMS, EsportsDraft, EsportsProfilesForm, WizardError};

use fan_core::EsportsProfile;

use googletest::prelude::*;
use uuid::Uuid;

fn draft(platform: &str, username: &str) -> EsportsDraft {
    EsportsDraft {
        platform: platform.to_string(),
        username: username.to_string(),
        url: format!("https://example.com/{username}"),
    }
}

#[test]
fn test_platform_list_ends_with_other() {
    assert_eq!(ESPORTS_PLATFORMS.len(), 14);
    assert_eq!(ESPORTS_PLATFORMS.first(), Some(&"Steam"));
    assert_eq!(ESPORTS_PLATFORMS.last(), Some(&"Outro"));
}

#[test]
fn given_free_text_platform_when_added_then_accepted() {
    let mut form = EsportsProfilesForm::default();

    let profile = form.add(draft("Riot Client", "ana"), &[]).unwrap();

    assert_that!(profile.platform, eq("Riot Client"));
    assert_that!(profile.relevance_score, none());
}

#[test]
fn given_same_platform_and_username_when_added_then_duplicate() {
    // Given
    let existing = vec![EsportsProfile::new(
        Uuid::new_v4(),
        "Faceit".to_string(),
        "ana".to_string(),
        "https://faceit.com/ana".to_string(),
    )];
    let mut form = EsportsProfilesForm::default();

    // When
    let result = form.add(draft("Faceit", "ana"), &existing);

    // Then
    assert!(matches!(result, Err(WizardError::Duplicate { .. })));
    assert_that!(form.error(), some(eq("Você já conectou esta conta de Faceit")));
}

#[test]
fn given_same_platform_other_username_when_added_then_accepted() {
    let existing = vec![EsportsProfile::new(
        Uuid::new_v4(),
        "Faceit".to_string(),
        "ana".to_string(),
        "https://faceit.com/ana".to_string(),
    )];
    let mut form = EsportsProfilesForm::default();

    assert_that!(form.add(draft("Faceit", "ana2"), &existing), ok(anything()));
}

#[test]
fn given_relative_url_when_added_then_field_error_and_draft_kept() {
    let mut form = EsportsProfilesForm::default();
    let input = EsportsDraft {
        url: "steamcommunity.com/id/ana".to_string(),
        ..draft("Steam", "ana")
    };

    let result = form.add(input, &[]);

    assert!(matches!(result, Err(WizardError::Field { field: "url", .. })));
    assert_that!(form.draft().platform, eq("Steam"));
}
