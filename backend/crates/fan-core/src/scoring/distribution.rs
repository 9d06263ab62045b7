//! Chart series for the dashboard.

use crate::UserRecord;

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

const CHARTED_INTERESTS: usize = 5;
const OTHERS_LABEL: &str = "Outros";
const OTHERS_COLOR: &str = "bg-gray-500";
const INTEREST_COLORS: [&str; 6] = [
    "bg-green-500",
    "bg-blue-500",
    "bg-red-500",
    "bg-yellow-500",
    "bg-purple-500",
    "bg-indigo-500",
];

/// One bar of a dashboard chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsightData {
    pub label: String,
    pub value: u32,
    pub color: &'static str,
}

impl InsightData {
    fn new(label: impl Into<String>, value: u32, color: &'static str) -> Self {
        Self {
            label: label.into(),
            value,
            color,
        }
    }
}

/// Engagement per connected platform, highest first.
///
/// Falls back to a fixed illustrative split when no profile has insights yet.
pub fn engagement_distribution(record: &UserRecord) -> Vec<InsightData> {
    let mut data: Vec<InsightData> = record
        .social_profiles
        .iter()
        .filter_map(|profile| {
            profile.insights.map(|insights| {
                InsightData::new(
                    profile.platform.as_str(),
                    insights.engagement,
                    profile.platform.color(),
                )
            })
        })
        .collect();

    if data.is_empty() {
        data = vec![
            InsightData::new("Redes Sociais", 25, "bg-blue-500"),
            InsightData::new("Eventos", 30, "bg-purple-500"),
            InsightData::new("Conteúdo", 20, "bg-yellow-500"),
            InsightData::new("Merchandise", 25, "bg-red-500"),
        ];
    }

    sort_descending(&mut data);
    data
}

/// Interest mix: the first five interests weighted 10-39, plus an "others"
/// bucket weighted 5-24 when there are more than five. Highest first.
pub fn interest_distribution<R: Rng>(interests: &[String], rng: &mut R) -> Vec<InsightData> {
    if interests.is_empty() {
        return vec![
            InsightData::new("CS2", 35, "bg-green-500"),
            InsightData::new("Valorant", 25, "bg-red-500"),
            InsightData::new("LOL", 20, "bg-blue-500"),
            InsightData::new(OTHERS_LABEL, 20, OTHERS_COLOR),
        ];
    }

    let mut data: Vec<InsightData> = interests
        .iter()
        .take(CHARTED_INTERESTS)
        .enumerate()
        .map(|(index, interest)| {
            InsightData::new(
                interest.as_str(),
                rng.random_range(10..40),
                INTEREST_COLORS[index % INTEREST_COLORS.len()],
            )
        })
        .collect();

    if interests.len() > CHARTED_INTERESTS {
        data.push(InsightData::new(
            OTHERS_LABEL,
            rng.random_range(5..25),
            OTHERS_COLOR,
        ));
    }

    sort_descending(&mut data);
    data
}

/// Interest mix with weights derived only from the record's interests,
/// so the same record always charts the same way.
pub fn seeded_interest_distribution(record: &UserRecord) -> Vec<InsightData> {
    let mut hasher = DefaultHasher::new();
    record.interests.hash(&mut hasher);
    let mut rng = StdRng::seed_from_u64(hasher.finish());
    interest_distribution(&record.interests, &mut rng)
}

fn sort_descending(data: &mut [InsightData]) {
    data.sort_by(|a, b| b.value.cmp(&a.value));
}
