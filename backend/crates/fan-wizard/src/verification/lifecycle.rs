use crate::session::SharedState;
use crate::verification::simulator::{simulate_insights, simulate_relevance};

use fan_core::{DocumentStatus, ProfileStatus};

use std::time::Duration;

use log::{debug, info};
use tokio::task::AbortHandle;
use uuid::Uuid;

/// Which list an analyzed profile lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProfileKind {
    Social,
    Esports,
}

/// pending -> verified after `delay`
pub(crate) fn spawn_document_verification(
    state: SharedState,
    id: Uuid,
    delay: Duration,
) -> AbortHandle {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;

        let mut guard = state.write().await;
        let found = guard.mutate_record(|record| {
            match record.documents.iter_mut().find(|d| d.id == id) {
                Some(document) => {
                    document.status = DocumentStatus::Verified;
                    true
                }
                None => false,
            }
        });
        guard.tasks.finish(id);

        if found {
            info!("Document {} verified", id);
        } else {
            debug!("Document {} no longer exists, verification skipped", id);
        }
    })
    .abort_handle()
}

/// pending -> (start) -> analyzing -> (analysis) -> verified with results
pub(crate) fn spawn_profile_analysis(
    state: SharedState,
    kind: ProfileKind,
    id: Uuid,
    start: Duration,
    analysis: Duration,
) -> AbortHandle {
    tokio::spawn(async move {
        tokio::time::sleep(start).await;

        {
            let mut guard = state.write().await;
            let found = guard.mutate_record(|record| match kind {
                ProfileKind::Social => {
                    match record.social_profiles.iter_mut().find(|p| p.id == id) {
                        Some(profile) => {
                            profile.status = ProfileStatus::Analyzing;
                            true
                        }
                        None => false,
                    }
                }
                ProfileKind::Esports => {
                    match record.esports_profiles.iter_mut().find(|p| p.id == id) {
                        Some(profile) => {
                            profile.status = ProfileStatus::Analyzing;
                            true
                        }
                        None => false,
                    }
                }
            });

            if !found {
                guard.tasks.finish(id);
                debug!("{:?} profile {} no longer exists, analysis skipped", kind, id);
                return;
            }
            debug!("{:?} profile {} analyzing", kind, id);
        }

        tokio::time::sleep(analysis).await;

        let mut guard = state.write().await;
        let found = match kind {
            ProfileKind::Social => {
                let insights = simulate_insights(&mut guard.rng);
                guard.mutate_record(|record| {
                    match record.social_profiles.iter_mut().find(|p| p.id == id) {
                        Some(profile) => {
                            profile.status = ProfileStatus::Verified;
                            profile.insights = Some(insights);
                            true
                        }
                        None => false,
                    }
                })
            }
            ProfileKind::Esports => {
                let relevance = simulate_relevance(&mut guard.rng);
                guard.mutate_record(|record| {
                    match record.esports_profiles.iter_mut().find(|p| p.id == id) {
                        Some(profile) => {
                            profile.status = ProfileStatus::Verified;
                            profile.relevance_score = Some(relevance);
                            true
                        }
                        None => false,
                    }
                })
            }
        };
        guard.tasks.finish(id);

        if found {
            info!("{:?} profile {} verified", kind, id);
        } else {
            debug!("{:?} profile {} no longer exists, analysis skipped", kind, id);
        }
    })
    .abort_handle()
}
