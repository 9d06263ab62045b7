use crate::scoring::engagement::NEUTRAL_ENGAGEMENT_SCORE;
use crate::tests::{document, esports, social};
use crate::{DocumentStatus, SocialInsights, SocialPlatform, UserRecord, engagement_score};

use googletest::prelude::*;

#[test]
fn given_nothing_contributing_when_scored_then_neutral() {
    assert_that!(
        engagement_score(&UserRecord::default()),
        eq(NEUTRAL_ENGAGEMENT_SCORE)
    );
}

#[test]
fn given_unscored_profiles_when_scored_then_neutral() {
    let mut record = UserRecord::default();
    record
        .social_profiles
        .push(social(SocialPlatform::Instagram, None));
    record.esports_profiles.push(esports(None));

    assert_that!(engagement_score(&record), eq(NEUTRAL_ENGAGEMENT_SCORE));
}

#[test]
fn given_document_only_when_scored_then_hundred() {
    let mut record = UserRecord::default();
    record.documents.push(document(DocumentStatus::Pending));

    assert_that!(engagement_score(&record), eq(100));
}

#[test]
fn given_two_interests_when_scored_then_forty() {
    let mut record = UserRecord::default();
    record.interests = vec!["CS2".to_string(), "Valorant".to_string()];

    assert_that!(engagement_score(&record), eq(40));
}

#[test]
fn given_many_interests_when_scored_then_interest_share_is_capped() {
    let mut record = UserRecord::default();
    record.interests = (0..9).map(|i| format!("Game {i}")).collect();

    assert_that!(engagement_score(&record), eq(100));
}

#[test]
fn given_mixed_contributions_when_scored_then_weighted_ratio() {
    // Given: social 60/100 + 30/50, esports 40/100, document 50/50, one interest 10/50
    let mut record = UserRecord::default();
    record.social_profiles.push(social(
        SocialPlatform::Twitch,
        Some(SocialInsights {
            engagement: 60,
            interactions: 30,
            esports_content: 80,
        }),
    ));
    record.esports_profiles.push(esports(Some(40)));
    record.documents.push(document(DocumentStatus::Verified));
    record.interests.push("CS2".to_string());

    // When
    let score = engagement_score(&record);

    // Then: (60 + 30 + 40 + 50 + 10) / (150 + 100 + 50 + 50) = 190 / 350
    assert_that!(score, eq(54));
}

#[test]
fn given_interactions_above_cap_when_scored_then_clamped() {
    let mut record = UserRecord::default();
    record.social_profiles.push(social(
        SocialPlatform::Twitch,
        Some(SocialInsights {
            engagement: 100,
            interactions: 500,
            esports_content: 0,
        }),
    ));

    assert_that!(engagement_score(&record), eq(100));
}
