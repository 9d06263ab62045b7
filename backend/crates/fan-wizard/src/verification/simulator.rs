use fan_core::SocialInsights;
use fan_core::models::social_insights::MAX_INTERACTIONS;

use rand::Rng;

const MAX_PERCENT: u32 = 100;

/// Simulated analysis of a social profile: engagement and esports content
/// in 0-99, interactions in 0-49.
pub fn simulate_insights<R: Rng>(rng: &mut R) -> SocialInsights {
    SocialInsights {
        engagement: rng.random_range(0..MAX_PERCENT),
        interactions: rng.random_range(0..MAX_INTERACTIONS),
        esports_content: rng.random_range(0..MAX_PERCENT),
    }
}

/// Simulated relevance of an esports profile, 0-99
pub fn simulate_relevance<R: Rng>(rng: &mut R) -> u32 {
    rng.random_range(0..MAX_PERCENT)
}
