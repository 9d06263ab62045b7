use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

pub const MAX_SIMULATED_DELAY_MS: u64 = 60_000;

pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 1500;
pub const DEFAULT_DOCUMENT_VERIFICATION_MS: u64 = 2000;
pub const DEFAULT_SOCIAL_ANALYSIS_START_MS: u64 = 1500;
pub const DEFAULT_SOCIAL_ANALYSIS_MS: u64 = 3000;
pub const DEFAULT_ESPORTS_ANALYSIS_START_MS: u64 = 1500;
pub const DEFAULT_ESPORTS_ANALYSIS_MS: u64 = 2500;

/// Delays of the simulated verification and submission steps.
///
/// The analysis delays are measured from the moment the profile enters
/// the analyzing state, not from when it was added.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub submit_delay_ms: u64,
    pub document_verification_ms: u64,
    pub social_analysis_start_ms: u64,
    pub social_analysis_ms: u64,
    pub esports_analysis_start_ms: u64,
    pub esports_analysis_ms: u64,
    /// Use thread randomness for dashboard chart weights
    pub randomize_charts: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            document_verification_ms: DEFAULT_DOCUMENT_VERIFICATION_MS,
            social_analysis_start_ms: DEFAULT_SOCIAL_ANALYSIS_START_MS,
            social_analysis_ms: DEFAULT_SOCIAL_ANALYSIS_MS,
            esports_analysis_start_ms: DEFAULT_ESPORTS_ANALYSIS_START_MS,
            esports_analysis_ms: DEFAULT_ESPORTS_ANALYSIS_MS,
            randomize_charts: false,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let delays = [
            ("submit_delay_ms", self.submit_delay_ms),
            ("document_verification_ms", self.document_verification_ms),
            ("social_analysis_start_ms", self.social_analysis_start_ms),
            ("social_analysis_ms", self.social_analysis_ms),
            ("esports_analysis_start_ms", self.esports_analysis_start_ms),
            ("esports_analysis_ms", self.esports_analysis_ms),
        ];

        for (name, value) in delays {
            if value > MAX_SIMULATED_DELAY_MS {
                return Err(ConfigError::simulation(format!(
                    "simulation.{} must be at most {}, got {}",
                    name, MAX_SIMULATED_DELAY_MS, value
                )));
            }
        }

        Ok(())
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn document_verification(&self) -> Duration {
        Duration::from_millis(self.document_verification_ms)
    }

    pub fn social_analysis_start(&self) -> Duration {
        Duration::from_millis(self.social_analysis_start_ms)
    }

    pub fn social_analysis(&self) -> Duration {
        Duration::from_millis(self.social_analysis_ms)
    }

    pub fn esports_analysis_start(&self) -> Duration {
        Duration::from_millis(self.esports_analysis_start_ms)
    }

    pub fn esports_analysis(&self) -> Duration {
        Duration::from_millis(self.esports_analysis_ms)
    }
}
