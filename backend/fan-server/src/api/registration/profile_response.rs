use fan_core::{EsportsProfile, SocialProfile};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SocialProfileResponse {
    pub profile: SocialProfile,
}

#[derive(Debug, Serialize)]
pub struct EsportsProfileResponse {
    pub profile: EsportsProfile,
}
