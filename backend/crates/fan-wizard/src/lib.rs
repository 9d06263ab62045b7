//! Registration wizard: the step orchestrator, the per-step forms and the
//! simulated verification of uploaded documents and linked profiles.

pub mod error;
pub mod forms;
pub mod session;
pub mod settings;
pub mod verification;


pub use error::{Result, WizardError};
pub use forms::address::{AddressField, AddressForm};
pub use forms::documents::{DocumentLimits, DocumentUpload, DocumentsForm};
pub use forms::esports_profiles::{ESPORTS_PLATFORMS, EsportsDraft, EsportsProfilesForm};
pub use forms::field_errors::FieldErrors;
pub use forms::interests::{InterestsForm, PREDEFINED_INTERESTS};
pub use forms::personal_info::{PersonalField, PersonalInfoForm};
pub use forms::social_media::{SocialDraft, SocialMediaForm};
pub use forms::summary::{ItemCheck, SummaryView};
pub use session::{RegistrationSession, SessionSnapshot};
pub use settings::WizardSettings;
pub use verification::simulator::{simulate_insights, simulate_relevance};
pub use verification::tasks::VerificationTasks;
