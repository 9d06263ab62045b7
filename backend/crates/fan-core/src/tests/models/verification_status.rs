use crate::tests::{document, esports, social};
use crate::{DocumentStatus, SocialInsights, SocialPlatform, UserRecord, VerificationStatus};

use googletest::prelude::*;

const INSIGHTS: SocialInsights = SocialInsights {
    engagement: 70,
    interactions: 20,
    esports_content: 40,
};

#[test]
fn given_empty_record_when_status_then_incomplete() {
    assert_that!(
        VerificationStatus::of(&UserRecord::default()),
        eq(VerificationStatus::Incomplete)
    );
}

#[test]
fn given_only_pending_items_when_status_then_pending() {
    let mut record = UserRecord::default();
    record.documents.push(document(DocumentStatus::Pending));
    record.esports_profiles.push(esports(None));

    assert_that!(VerificationStatus::of(&record), eq(VerificationStatus::Pending));
}

#[test]
fn given_verified_document_without_verified_profile_when_status_then_pending() {
    let mut record = UserRecord::default();
    record.documents.push(document(DocumentStatus::Verified));
    record
        .social_profiles
        .push(social(SocialPlatform::Instagram, None));

    assert_that!(VerificationStatus::of(&record), eq(VerificationStatus::Pending));
}

#[test]
fn given_verified_document_and_verified_social_when_status_then_verified() {
    let mut record = UserRecord::default();
    record.documents.push(document(DocumentStatus::Verified));
    record
        .social_profiles
        .push(social(SocialPlatform::Instagram, Some(INSIGHTS)));

    assert_that!(VerificationStatus::of(&record), eq(VerificationStatus::Verified));
}

#[test]
fn given_verified_document_and_verified_esports_when_status_then_verified() {
    let mut record = UserRecord::default();
    record.documents.push(document(DocumentStatus::Verified));
    record.esports_profiles.push(esports(Some(55)));

    assert_that!(VerificationStatus::of(&record), eq(VerificationStatus::Verified));
}

#[test]
fn given_verified_profiles_without_verified_document_when_status_then_pending() {
    let mut record = UserRecord::default();
    record.documents.push(document(DocumentStatus::Rejected));
    record.esports_profiles.push(esports(Some(55)));

    assert_that!(VerificationStatus::of(&record), eq(VerificationStatus::Pending));
}
