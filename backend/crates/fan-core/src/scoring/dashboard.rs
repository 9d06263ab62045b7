use crate::scoring::distribution::{
    InsightData, engagement_distribution, interest_distribution, seeded_interest_distribution,
};
use crate::{FanLevel, UserRecord, VerificationStatus, engagement_score, verification_score};

use rand::Rng;
use serde::Serialize;

/// Fixture shown in the dashboard's schedule panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingMatch {
    pub opponent: &'static str,
    pub tournament: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub game: &'static str,
}

pub const UPCOMING_MATCHES: [UpcomingMatch; 3] = [
    UpcomingMatch {
        opponent: "Team Liquid",
        tournament: "ESL Pro League Temporada 20",
        date: "15/03/2025",
        time: "16:00",
        game: "CS2",
    },
    UpcomingMatch {
        opponent: "NAVI",
        tournament: "BLAST Premier Finais de Primavera",
        date: "20/03/2025",
        time: "14:30",
        game: "CS2",
    },
    UpcomingMatch {
        opponent: "Cloud9",
        tournament: "IEM Dallas 2025",
        date: "25/03/2025",
        time: "13:00",
        game: "CS2",
    },
];

/// Everything the dashboard page renders for one record
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub name: String,
    pub verification_score: u32,
    pub verification_status: VerificationStatus,
    pub verification_hint: &'static str,
    pub engagement_score: u32,
    pub fan_level: FanLevel,
    pub fan_level_label: &'static str,
    pub points_to_superfan: u32,
    pub engagement_distribution: Vec<InsightData>,
    pub interest_distribution: Vec<InsightData>,
    pub document_count: usize,
    pub social_profile_count: usize,
    pub esports_profile_count: usize,
    pub interest_count: usize,
    pub upcoming_matches: Vec<UpcomingMatch>,
}

impl DashboardReport {
    /// Deterministic report: interest weights are seeded from the record
    pub fn build(record: &UserRecord) -> Self {
        let interests = seeded_interest_distribution(record);
        Self::assemble(record, interests)
    }

    /// Report whose interest weights come from the caller's RNG
    pub fn build_with_rng<R: Rng>(record: &UserRecord, rng: &mut R) -> Self {
        let interests = interest_distribution(&record.interests, rng);
        Self::assemble(record, interests)
    }

    fn assemble(record: &UserRecord, interest_distribution: Vec<InsightData>) -> Self {
        let verification_score = verification_score(record);
        let engagement_score = engagement_score(record);
        let fan_level = FanLevel::from_score(engagement_score);

        Self {
            name: record.name.clone(),
            verification_score,
            verification_status: VerificationStatus::of(record),
            verification_hint: if verification_score < 100 {
                "Conclua a verificação para desbloquear todos os benefícios"
            } else {
                "Conta totalmente verificada"
            },
            engagement_score,
            fan_level,
            fan_level_label: fan_level.label(),
            points_to_superfan: FanLevel::points_to_superfan(engagement_score),
            engagement_distribution: engagement_distribution(record),
            interest_distribution,
            document_count: record.documents.len(),
            social_profile_count: record.social_profiles.len(),
            esports_profile_count: record.esports_profiles.len(),
            interest_count: record.interests.len(),
            upcoming_matches: UPCOMING_MATCHES.to_vec(),
        }
    }
}
