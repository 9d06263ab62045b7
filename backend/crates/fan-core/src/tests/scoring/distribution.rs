use crate::tests::social;
use crate::{
    SocialInsights, SocialPlatform, UserRecord, engagement_distribution, interest_distribution,
    seeded_interest_distribution,
};

use googletest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn insights(engagement: u32) -> Option<SocialInsights> {
    Some(SocialInsights {
        engagement,
        interactions: 10,
        esports_content: 10,
    })
}

#[test]
fn given_no_insights_when_engagement_distribution_then_fallback() {
    let mut record = UserRecord::default();
    record
        .social_profiles
        .push(social(SocialPlatform::Instagram, None));

    let data = engagement_distribution(&record);

    let labels: Vec<&str> = data.iter().map(|d| d.label.as_str()).collect();
    assert_that!(labels, elements_are![eq(&"Eventos"), eq(&"Redes Sociais"), eq(&"Merchandise"), eq(&"Conteúdo")]);
}

#[test]
fn given_profiles_with_insights_when_engagement_distribution_then_one_bar_each_sorted() {
    let mut record = UserRecord::default();
    record
        .social_profiles
        .push(social(SocialPlatform::Instagram, insights(40)));
    record
        .social_profiles
        .push(social(SocialPlatform::Youtube, insights(90)));
    record
        .social_profiles
        .push(social(SocialPlatform::Twitch, None));

    let data = engagement_distribution(&record);

    assert_that!(data, len(eq(2)));
    assert_that!(data[0].label, eq("youtube"));
    assert_that!(data[0].value, eq(90));
    assert_that!(data[0].color, eq("bg-red-500"));
    assert_that!(data[1].label, eq("instagram"));
}

#[test]
fn given_no_interests_when_interest_distribution_then_fallback() {
    let mut rng = StdRng::seed_from_u64(1);

    let data = interest_distribution(&[], &mut rng);

    assert_that!(data, len(eq(4)));
    assert_that!(data[0].label, eq("CS2"));
    assert_that!(data[0].value, eq(35));
}

#[test]
fn given_three_interests_when_interest_distribution_then_weights_in_range() {
    let interests = vec!["CS2".to_string(), "Valorant".to_string(), "Dota 2".to_string()];
    let mut rng = StdRng::seed_from_u64(7);

    let data = interest_distribution(&interests, &mut rng);

    assert_that!(data, len(eq(3)));
    for bar in &data {
        assert!((10..40).contains(&bar.value), "weight {} out of range", bar.value);
    }
    assert!(data.windows(2).all(|w| w[0].value >= w[1].value));
}

#[test]
fn given_seven_interests_when_interest_distribution_then_five_plus_others() {
    let interests: Vec<String> = (0..7).map(|i| format!("Game {i}")).collect();
    let mut rng = StdRng::seed_from_u64(3);

    let data = interest_distribution(&interests, &mut rng);

    assert_that!(data, len(eq(6)));
    let others = data.iter().find(|d| d.label == "Outros").unwrap();
    assert!((5..25).contains(&others.value));
    assert!(!data.iter().any(|d| d.label == "Game 5" || d.label == "Game 6"));
}

#[test]
fn given_same_record_when_seeded_distribution_twice_then_identical() {
    let mut record = UserRecord::default();
    record.interests = vec!["CS2".to_string(), "Cosplay".to_string()];

    assert_that!(
        seeded_interest_distribution(&record),
        eq(&seeded_interest_distribution(&record))
    );
}
