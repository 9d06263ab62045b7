pub mod error;
pub mod models;
pub mod progress;
pub mod scoring;
pub mod validators;


pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::address::{Address, AddressPatch};
pub use models::document::Document;
pub use models::document_status::DocumentStatus;
pub use models::document_type::DocumentType;
pub use models::esports_profile::EsportsProfile;
pub use models::form_step::FormStep;
pub use models::profile_status::ProfileStatus;
pub use models::route::Route;
pub use models::social_insights::SocialInsights;
pub use models::social_platform::SocialPlatform;
pub use models::social_profile::SocialProfile;
pub use models::user_record::{UserRecord, UserRecordPatch};
pub use models::verification_status::VerificationStatus;
pub use progress::{CONTENT_STEP_COUNT, calculate_progress, completed_content_steps, progress_percent};
pub use scoring::dashboard::{DashboardReport, UpcomingMatch};
pub use scoring::distribution::{
    InsightData, engagement_distribution, interest_distribution, seeded_interest_distribution,
};
pub use scoring::engagement::engagement_score;
pub use scoring::fan_level::FanLevel;
pub use scoring::verification::verification_score;
