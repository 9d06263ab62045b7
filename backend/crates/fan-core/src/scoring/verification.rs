use crate::UserRecord;

const VERIFICATION_CHECKS: u32 = 3;

/// Share of {verified document, verified social, verified esports} reached, 0-100
pub fn verification_score(record: &UserRecord) -> u32 {
    let checks = [
        record.documents.iter().any(|d| d.status.is_verified()),
        record
            .social_profiles
            .iter()
            .any(|p| p.status.is_verified()),
        record
            .esports_profiles
            .iter()
            .any(|p| p.status.is_verified()),
    ];

    let passed = checks.iter().filter(|&&passed| passed).count() as u32;
    (f64::from(passed) / f64::from(VERIFICATION_CHECKS) * 100.0).round() as u32
}
