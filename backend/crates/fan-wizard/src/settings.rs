use crate::DocumentLimits;

use fan_config::Config;

use std::time::Duration;

/// Runtime knobs of a registration session, taken from `[simulation]` and
/// `[documents]`.
#[derive(Debug, Clone)]
pub struct WizardSettings {
    pub submit_delay: Duration,
    pub document_verification: Duration,
    /// Pending to analyzing
    pub social_analysis_start: Duration,
    /// Analyzing to verified
    pub social_analysis: Duration,
    pub esports_analysis_start: Duration,
    pub esports_analysis: Duration,
    pub document_limits: DocumentLimits,
    /// Fixed seed for simulated analysis results; entropy when `None`
    pub rng_seed: Option<u64>,
}

impl Default for WizardSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for WizardSettings {
    fn from(config: &Config) -> Self {
        let simulation = &config.simulation;
        Self {
            submit_delay: simulation.submit_delay(),
            document_verification: simulation.document_verification(),
            social_analysis_start: simulation.social_analysis_start(),
            social_analysis: simulation.social_analysis(),
            esports_analysis_start: simulation.esports_analysis_start(),
            esports_analysis: simulation.esports_analysis(),
            document_limits: DocumentLimits {
                max_size_bytes: config.documents.max_size_bytes,
                allowed_mime_types: config.documents.allowed_mime_types.clone(),
            },
            rng_seed: None,
        }
    }
}
