//! Registration progress over the content steps.
//!
//! The summary step holds no data of its own and is left out of the
//! denominator, so a fully filled record reports 100% while the wizard still
//! shows seven steps.

use crate::{FormStep, UserRecord};

pub const CONTENT_STEP_COUNT: usize = 6;

/// Content steps whose minimum fields are filled, in wizard order
pub fn completed_content_steps(record: &UserRecord) -> Vec<FormStep> {
    FormStep::all()
        .iter()
        .copied()
        .filter(|step| is_step_filled(*step, record))
        .collect()
}

/// Exact percentage, 0.0-100.0
pub fn calculate_progress(record: &UserRecord) -> f64 {
    let done = completed_content_steps(record).len();
    done as f64 / CONTENT_STEP_COUNT as f64 * 100.0
}

/// Percentage rounded for display
pub fn progress_percent(record: &UserRecord) -> u8 {
    calculate_progress(record).round() as u8
}

fn is_step_filled(step: FormStep, record: &UserRecord) -> bool {
    match step {
        FormStep::Personal => record.has_personal_fields(),
        FormStep::Address => record.address.has_minimum_fields(),
        FormStep::Interests => !record.interests.is_empty(),
        FormStep::Documents => !record.documents.is_empty(),
        FormStep::Social => !record.social_profiles.is_empty(),
        FormStep::Esports => !record.esports_profiles.is_empty(),
        FormStep::Summary => false,
    }
}
