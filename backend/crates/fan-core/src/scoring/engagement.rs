use crate::UserRecord;
use crate::models::social_insights::MAX_INTERACTIONS;

const ENGAGEMENT_WEIGHT: u32 = 100;
const RELEVANCE_WEIGHT: u32 = 100;
const DOCUMENT_WEIGHT: u32 = 50;
const INTEREST_WEIGHT: u32 = 50;
const POINTS_PER_INTEREST: u32 = 10;

/// Score reported when nothing contributes to the engagement ratio
pub const NEUTRAL_ENGAGEMENT_SCORE: u32 = 50;

/// Weighted engagement ratio, 0-100.
///
/// Each profile with insights adds engagement (of 100) and interactions (of
/// 50), each scored esports profile adds its relevance (of 100), any
/// document adds 50 of 50 and interests add ten points each up to 50.
pub fn engagement_score(record: &UserRecord) -> u32 {
    let mut score = 0u32;
    let mut total = 0u32;

    for insights in record.social_profiles.iter().filter_map(|p| p.insights) {
        score += insights.engagement.min(ENGAGEMENT_WEIGHT);
        score += insights.interactions.min(MAX_INTERACTIONS);
        total += ENGAGEMENT_WEIGHT + MAX_INTERACTIONS;
    }

    for relevance in record
        .esports_profiles
        .iter()
        .filter_map(|p| p.relevance_score)
    {
        score += relevance.min(RELEVANCE_WEIGHT);
        total += RELEVANCE_WEIGHT;
    }

    if !record.documents.is_empty() {
        score += DOCUMENT_WEIGHT;
        total += DOCUMENT_WEIGHT;
    }

    if !record.interests.is_empty() {
        let interest_points = (record.interests.len() as u32).saturating_mul(POINTS_PER_INTEREST);
        score += interest_points.min(INTEREST_WEIGHT);
        total += INTEREST_WEIGHT;
    }

    if total == 0 {
        return NEUTRAL_ENGAGEMENT_SCORE;
    }

    (f64::from(score) / f64::from(total) * 100.0).round() as u32
}
