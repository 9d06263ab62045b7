use fan_core::{
    AddressPatch, Document, DocumentType, EsportsProfile, SocialPlatform, SocialProfile,
    UserRecord,
};

use chrono::Utc;
use uuid::Uuid;

pub fn create_test_record() -> UserRecord {
    let mut record = UserRecord {
        name: "Bruno Lima".to_string(),
        email: "bruno@example.com".to_string(),
        national_id: "111.444.777-35".to_string(),
        birthdate: "2001-09-30".to_string(),
        phone: "(11) 98765-4321".to_string(),
        interests: vec!["CS2".to_string(), "Valorant".to_string()],
        created_at: Some(Utc::now()),
        ..UserRecord::default()
    };
    record.address.apply(AddressPatch {
        street: Some("Rua Augusta".to_string()),
        number: Some("100".to_string()),
        city: Some("São Paulo".to_string()),
        state: Some("SP".to_string()),
        zip_code: Some("01305-000".to_string()),
        ..AddressPatch::default()
    });
    record.documents.push(Document::new(
        Uuid::new_v4(),
        "rg.pdf".to_string(),
        DocumentType::IdentityCard,
        "blob:rg".to_string(),
    ));
    record.social_profiles.push(SocialProfile::new(
        Uuid::new_v4(),
        SocialPlatform::Twitter,
        "bruno".to_string(),
        "https://twitter.com/bruno".to_string(),
    ));
    record.esports_profiles.push(EsportsProfile::new(
        Uuid::new_v4(),
        "Steam".to_string(),
        "bruno".to_string(),
        "https://steamcommunity.com/id/bruno".to_string(),
    ));
    record
}
