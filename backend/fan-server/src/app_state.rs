use fan_db::RecordStore;
use fan_wizard::RegistrationSession;

use std::sync::Arc;

/// Shared handler state: the one wizard session and the persistence slot
/// it submits into.
#[derive(Clone)]
pub struct AppState {
    pub session: RegistrationSession,
    pub store: Arc<dyn RecordStore>,
    /// Draw dashboard chart weights from a thread RNG instead of the
    /// record-seeded one
    pub randomize_charts: bool,
}

impl AppState {
    pub fn new(session: RegistrationSession, randomize_charts: bool) -> Self {
        Self {
            store: session.store().clone(),
            session,
            randomize_charts,
        }
    }
}
