use crate::{SocialDraft, SocialMediaForm, WizardError};

use fan_core::{ProfileStatus, SocialPlatform, SocialProfile};

use googletest::prelude::*;
use uuid::Uuid;

fn draft(platform: &str, username: &str, url: &str) -> SocialDraft {
    SocialDraft {
        platform: platform.to_string(),
        username: username.to_string(),
        url: url.to_string(),
    }
}

#[test]
fn given_valid_draft_when_connected_then_pending_profile_and_draft_reset() {
    // Given
    let mut form = SocialMediaForm::default();

    // When
    let profile = form
        .connect(
            draft("instagram", "furiagg", "https://instagram.com/furiagg"),
            &[],
        )
        .unwrap();

    // Then
    assert_that!(profile.platform, eq(SocialPlatform::Instagram));
    assert_that!(profile.status, eq(ProfileStatus::Pending));
    assert_that!(profile.connected, eq(true));
    assert_that!(profile.insights, none());
    assert_that!(form.draft(), eq(&SocialDraft::default()));
}

#[test]
fn given_platform_already_linked_when_connected_then_duplicate_names_platform() {
    // Given
    let existing = vec![SocialProfile::new(
        Uuid::new_v4(),
        SocialPlatform::Twitter,
        "old".to_string(),
        "https://twitter.com/old".to_string(),
    )];
    let mut form = SocialMediaForm::default();

    // When
    let result = form.connect(
        draft("twitter", "new", "https://twitter.com/new"),
        &existing,
    );

    // Then
    assert!(matches!(result, Err(WizardError::Duplicate { .. })));
    assert_that!(
        form.error(),
        some(eq("Você já conectou sua conta de Twitter/X"))
    );
    assert_that!(form.draft().username, eq("new"));
}

#[test]
fn test_social_draft_validation_order() {
    let cases = [
        (draft("", "a", "https://x.com/a"), "Por favor, selecione uma plataforma"),
        (draft("myspace", "a", "https://x.com/a"), "Por favor, selecione uma plataforma"),
        (draft("twitch", " ", "https://x.com/a"), "Por favor, insira seu nome de usuário"),
        (draft("twitch", "a", ""), "Por favor, insira a URL do perfil"),
        (draft("twitch", "a", "twitch.tv/a"), "Por favor, insira uma URL válida"),
    ];

    for (input, expected) in cases {
        let mut form = SocialMediaForm::default();
        let err = form.connect(input, &[]).unwrap_err();
        assert_eq!(err.user_message(), expected);
    }
}
