//! The step orchestrator.
//!
//! A `RegistrationSession` owns the in-progress record, the current step,
//! the completed-step set and the per-step forms. All mutation goes through
//! one lock, including the delayed status transitions of the verification
//! tasks, and progress is recomputed after every change to the record.

use crate::verification::lifecycle::{
    ProfileKind, spawn_document_verification, spawn_profile_analysis,
};
use crate::{
    AddressField, AddressForm, DocumentUpload, DocumentsForm, EsportsDraft, EsportsProfilesForm,
    FieldErrors, InterestsForm, PersonalField, PersonalInfoForm, Result, SocialDraft,
    SocialMediaForm, SummaryView, VerificationTasks, WizardError, WizardSettings,
};

use fan_core::{
    Document, DocumentStatus, DocumentType, EsportsProfile, FormStep, ProfileStatus, Route,
    SocialProfile, UserRecord, UserRecordPatch, calculate_progress, completed_content_steps,
};
use fan_db::RecordStore;

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::Utc;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

pub(crate) type SharedState = Arc<RwLock<SessionState>>;

pub(crate) struct SessionState {
    record: UserRecord,
    current_step: FormStep,
    completed_steps: BTreeSet<FormStep>,
    progress: f64,
    personal: PersonalInfoForm,
    address: AddressForm,
    interests: InterestsForm,
    documents: DocumentsForm,
    social: SocialMediaForm,
    esports: EsportsProfilesForm,
    pub(crate) tasks: VerificationTasks,
    pub(crate) rng: StdRng,
    /// Bumped on every restart; an in-flight submit only saves if it is unchanged
    generation: u64,
    submitting: bool,
}

impl SessionState {
    fn new(settings: &WizardSettings, record: UserRecord) -> Self {
        let rng = match settings.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            progress: calculate_progress(&record),
            record,
            current_step: FormStep::first(),
            completed_steps: BTreeSet::new(),
            personal: PersonalInfoForm::default(),
            address: AddressForm::default(),
            interests: InterestsForm::default(),
            documents: DocumentsForm::new(settings.document_limits.clone()),
            social: SocialMediaForm::default(),
            esports: EsportsProfilesForm::default(),
            tasks: VerificationTasks::new(),
            rng,
            generation: 0,
            submitting: false,
        }
    }

    /// Replace everything with a fresh wizard over `record`; returns how many
    /// verifications were cancelled
    fn restart(&mut self, settings: &WizardSettings, record: UserRecord) -> usize {
        let cancelled = self.tasks.cancel_all();
        let generation = self.generation.wrapping_add(1);
        *self = SessionState::new(settings, record);
        self.generation = generation;
        cancelled
    }

    /// Run `f` against the record and refresh progress
    pub(crate) fn mutate_record<T>(&mut self, f: impl FnOnce(&mut UserRecord) -> T) -> T {
        let out = f(&mut self.record);
        self.progress = calculate_progress(&self.record);
        out
    }
}

/// Serializable view of the whole wizard
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub current_step: FormStep,
    pub step_number: usize,
    pub total_steps: usize,
    pub step_title: &'static str,
    pub step_description: &'static str,
    pub is_first_step: bool,
    pub is_last_step: bool,
    pub completed_steps: Vec<FormStep>,
    pub progress: u8,
    pub record: UserRecord,
    pub personal_errors: FieldErrors,
    pub address_errors: FieldErrors,
    pub interests_error: Option<String>,
    pub document_type: DocumentType,
    pub documents_error: Option<String>,
    pub social_draft: SocialDraft,
    pub social_error: Option<String>,
    pub esports_draft: EsportsDraft,
    pub esports_error: Option<String>,
    pub pending_verifications: usize,
}

#[derive(Clone)]
pub struct RegistrationSession {
    state: SharedState,
    store: Arc<dyn RecordStore>,
    settings: Arc<WizardSettings>,
}

impl RegistrationSession {
    pub fn new(store: Arc<dyn RecordStore>, settings: WizardSettings) -> Self {
        let state = SessionState::new(&settings, UserRecord::default());
        Self {
            state: Arc::new(RwLock::new(state)),
            store,
            settings: Arc::new(settings),
        }
    }

    pub fn store(&self) -> &Arc<dyn RecordStore> {
        &self.store
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub async fn snapshot(&self) -> SessionSnapshot {
        let state = self.state.read().await;
        let step = state.current_step;

        SessionSnapshot {
            current_step: step,
            step_number: step.number(),
            total_steps: FormStep::total(),
            step_title: step.title(),
            step_description: step.description(),
            is_first_step: step.is_first(),
            is_last_step: step.is_last(),
            completed_steps: state.completed_steps.iter().copied().collect(),
            progress: state.progress.round() as u8,
            record: state.record.clone(),
            personal_errors: state.personal.errors().clone(),
            address_errors: state.address.errors().clone(),
            interests_error: state.interests.error().map(str::to_string),
            document_type: state.documents.selected_type(),
            documents_error: state.documents.error().map(str::to_string),
            social_draft: state.social.draft().clone(),
            social_error: state.social.error().map(str::to_string),
            esports_draft: state.esports.draft().clone(),
            esports_error: state.esports.error().map(str::to_string),
            pending_verifications: state.tasks.len(),
        }
    }

    pub async fn current_step(&self) -> FormStep {
        self.state.read().await.current_step
    }

    pub async fn completed_steps(&self) -> Vec<FormStep> {
        self.state.read().await.completed_steps.iter().copied().collect()
    }

    /// Exact progress, 0.0-100.0
    pub async fn progress(&self) -> f64 {
        self.state.read().await.progress
    }

    pub async fn record(&self) -> UserRecord {
        self.state.read().await.record.clone()
    }

    pub async fn summary(&self) -> SummaryView {
        SummaryView::of(&self.state.read().await.record)
    }

    pub async fn pending_verifications(&self) -> usize {
        self.state.read().await.tasks.len()
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Move to the next step, marking the current one completed. There is no
    /// validation gate: incomplete steps can be skipped.
    pub async fn advance(&self) -> FormStep {
        let mut state = self.state.write().await;
        let current = state.current_step;

        if let Some(next) = current.next() {
            state.completed_steps.insert(current);
            state.current_step = next;
            info!("Wizard step {} -> {}", current, next);
        }

        state.current_step
    }

    /// Move to the previous step; the completed set is left alone
    pub async fn retreat(&self) -> FormStep {
        let mut state = self.state.write().await;
        let current = state.current_step;

        if let Some(previous) = current.previous() {
            state.current_step = previous;
            info!("Wizard step {} -> {}", current, previous);
        }

        state.current_step
    }

    // =========================================================================
    // Record edits
    // =========================================================================

    /// Shallow-merge `patch` into the record; address is merged key-wise
    pub async fn merge_patch(&self, patch: UserRecordPatch) {
        let mut state = self.state.write().await;
        debug!("Merging record patch {:?}", patch);
        state.mutate_record(|record| record.apply(patch));
    }

    pub async fn change_personal(&self, field: PersonalField, value: &str) {
        let mut guard = self.state.write().await;
        let state = &mut *guard;
        let patch = state.personal.change(field, value);
        debug!("Personal field {} changed", field);
        state.mutate_record(|record| record.apply(patch));
    }

    pub async fn blur_personal(&self, field: PersonalField) -> Result<()> {
        let mut guard = self.state.write().await;
        let state = &mut *guard;
        let value = field.value_in(&state.record).to_string();
        state
            .personal
            .blur(field, &value, Utc::now().date_naive())
    }

    pub async fn change_address(&self, field: AddressField, value: &str) {
        let mut guard = self.state.write().await;
        let state = &mut *guard;
        let patch = state.address.change(field, value);
        debug!("Address field {} changed", field);
        state.mutate_record(|record| record.address.apply(patch));
    }

    pub async fn blur_address(&self, field: AddressField) -> Result<()> {
        let mut guard = self.state.write().await;
        let state = &mut *guard;
        let value = field.value_in(&state.record).to_string();
        state.address.blur(field, &value)
    }

    pub async fn toggle_interest(&self, interest: &str) -> Result<()> {
        let mut guard = self.state.write().await;
        let state = &mut *guard;
        let updated = state
            .interests
            .toggle(&state.record.interests, interest)
            .inspect_err(|_| warn!("Unknown interest '{}' toggled", interest))?;
        state.mutate_record(|record| record.interests = updated);
        Ok(())
    }

    pub async fn add_custom_interest(&self, interest: &str) -> Result<()> {
        let mut guard = self.state.write().await;
        let state = &mut *guard;

        match state.interests.add_custom(&state.record.interests, interest) {
            Ok(updated) => {
                state.mutate_record(|record| record.interests = updated);
                Ok(())
            }
            Err(e) => {
                warn!("Custom interest rejected: {}", e.user_message());
                Err(e)
            }
        }
    }

    /// Returns whether the interest was selected
    pub async fn remove_interest(&self, interest: &str) -> bool {
        let mut guard = self.state.write().await;
        let state = &mut *guard;

        let before = state.record.interests.len();
        let updated = state.interests.remove(&state.record.interests, interest);
        let removed = updated.len() != before;
        state.mutate_record(|record| record.interests = updated);
        removed
    }

    // =========================================================================
    // Sub-resources
    // =========================================================================

    pub async fn select_document_type(&self, document_type: DocumentType) {
        self.state.write().await.documents.select_type(document_type);
    }

    /// Add a pending document and schedule its verification
    pub async fn upload_document(&self, upload: &DocumentUpload) -> Result<Document> {
        let mut guard = self.state.write().await;
        let state = &mut *guard;

        let document = state.documents.upload(upload).inspect_err(|e| {
            warn!("Upload of '{}' rejected: {}", upload.file_name, e.user_message());
        })?;

        let id = document.id;
        state.mutate_record(|record| record.documents.push(document.clone()));
        let handle = spawn_document_verification(
            self.state.clone(),
            id,
            self.settings.document_verification,
        );
        state.tasks.track(id, handle);

        info!("Document {} ({}) uploaded", id, document.document_type);
        Ok(document)
    }

    /// Remove a document and cancel its verification. Returns whether it existed.
    pub async fn remove_document(&self, id: Uuid) -> bool {
        let mut guard = self.state.write().await;
        let state = &mut *guard;

        state.tasks.cancel(id);
        let removed = state.mutate_record(|record| {
            let before = record.documents.len();
            record.documents.retain(|d| d.id != id);
            record.documents.len() != before
        });

        if removed {
            info!("Document {} removed", id);
        }
        removed
    }

    /// Link a social profile and schedule its analysis
    pub async fn connect_social(&self, draft: SocialDraft) -> Result<SocialProfile> {
        let mut guard = self.state.write().await;
        let state = &mut *guard;

        let profile = state
            .social
            .connect(draft, &state.record.social_profiles)
            .inspect_err(|e| warn!("Social profile rejected: {}", e.user_message()))?;

        let id = profile.id;
        state.mutate_record(|record| record.social_profiles.push(profile.clone()));
        let handle = spawn_profile_analysis(
            self.state.clone(),
            ProfileKind::Social,
            id,
            self.settings.social_analysis_start,
            self.settings.social_analysis,
        );
        state.tasks.track(id, handle);

        info!("Social profile {} ({}) connected", id, profile.platform);
        Ok(profile)
    }

    pub async fn remove_social(&self, id: Uuid) -> bool {
        let mut guard = self.state.write().await;
        let state = &mut *guard;

        state.tasks.cancel(id);
        let removed = state.mutate_record(|record| {
            let before = record.social_profiles.len();
            record.social_profiles.retain(|p| p.id != id);
            record.social_profiles.len() != before
        });

        if removed {
            info!("Social profile {} removed", id);
        }
        removed
    }

    /// Add an esports profile and schedule its analysis
    pub async fn add_esports(&self, draft: EsportsDraft) -> Result<EsportsProfile> {
        let mut guard = self.state.write().await;
        let state = &mut *guard;

        let profile = state
            .esports
            .add(draft, &state.record.esports_profiles)
            .inspect_err(|e| warn!("Esports profile rejected: {}", e.user_message()))?;

        let id = profile.id;
        state.mutate_record(|record| record.esports_profiles.push(profile.clone()));
        let handle = spawn_profile_analysis(
            self.state.clone(),
            ProfileKind::Esports,
            id,
            self.settings.esports_analysis_start,
            self.settings.esports_analysis,
        );
        state.tasks.track(id, handle);

        info!("Esports profile {} ({}) added", id, profile.platform);
        Ok(profile)
    }

    pub async fn remove_esports(&self, id: Uuid) -> bool {
        let mut guard = self.state.write().await;
        let state = &mut *guard;

        state.tasks.cancel(id);
        let removed = state.mutate_record(|record| {
            let before = record.esports_profiles.len();
            record.esports_profiles.retain(|p| p.id != id);
            record.esports_profiles.len() != before
        });

        if removed {
            info!("Esports profile {} removed", id);
        }
        removed
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Persist the record and end the wizard.
    ///
    /// Only allowed from the summary step. Waits the simulated save delay,
    /// stamps `created_at` if unset and writes the record wholesale. On
    /// success the wizard starts over and the dashboard route is returned.
    pub async fn submit(&self) -> Result<Route> {
        let generation = {
            let mut state = self.state.write().await;
            if state.current_step != FormStep::Summary {
                warn!("Submit requested from step {}", state.current_step);
                return Err(WizardError::navigation(
                    "O cadastro só pode ser enviado a partir da etapa de resumo",
                ));
            }
            if state.submitting {
                warn!("Submit requested while another is in flight");
                return Err(WizardError::navigation("O cadastro já está sendo enviado"));
            }
            state.submitting = true;
            state.generation
        };

        info!("Submitting registration");
        tokio::time::sleep(self.settings.submit_delay).await;

        // Held through the save so a reset or logout cannot interleave
        let mut guard = self.state.write().await;
        let state = &mut *guard;

        if state.generation != generation || state.current_step != FormStep::Summary {
            if state.generation == generation {
                state.submitting = false;
            }
            warn!("Registration changed while submitting, save abandoned");
            return Err(WizardError::navigation(
                "O cadastro foi alterado durante o envio",
            ));
        }

        if state.record.created_at.is_none() {
            state.mutate_record(|record| record.created_at = Some(Utc::now()));
        }

        if let Err(e) = self.store.save(&state.record).await {
            state.submitting = false;
            return Err(WizardError::from(e));
        }
        info!("Registration saved");

        let cancelled = state.restart(&self.settings, UserRecord::default());
        info!("Wizard reset ({} verifications cancelled)", cancelled);
        Ok(Route::Dashboard)
    }

    /// Drop all progress and cancel outstanding verifications
    pub async fn reset(&self) {
        let cancelled = self
            .state
            .write()
            .await
            .restart(&self.settings, UserRecord::default());
        info!("Wizard reset ({} verifications cancelled)", cancelled);
    }

    /// Delete the stored registration and start over. Any submit still in
    /// flight is abandoned.
    pub async fn logout(&self) -> Result<()> {
        let mut state = self.state.write().await;
        self.store.clear().await?;
        let cancelled = state.restart(&self.settings, UserRecord::default());
        info!("Logged out ({} verifications cancelled)", cancelled);
        Ok(())
    }

    /// Start a new wizard pass over an existing record.
    ///
    /// Steps whose content is already filled count as completed, and items
    /// still awaiting verification get their tasks scheduled again.
    pub async fn resume(&self, record: UserRecord) {
        let mut guard = self.state.write().await;
        guard.restart(&self.settings, record);

        let state = &mut *guard;
        state.completed_steps = completed_content_steps(&state.record).into_iter().collect();

        let documents: Vec<Uuid> = state
            .record
            .documents
            .iter()
            .filter(|d| d.status == DocumentStatus::Pending)
            .map(|d| d.id)
            .collect();
        for id in documents {
            let handle = spawn_document_verification(
                self.state.clone(),
                id,
                self.settings.document_verification,
            );
            state.tasks.track(id, handle);
        }

        let social: Vec<Uuid> = state
            .record
            .social_profiles
            .iter()
            .filter(|p| p.status != ProfileStatus::Verified)
            .map(|p| p.id)
            .collect();
        for id in social {
            let handle = spawn_profile_analysis(
                self.state.clone(),
                ProfileKind::Social,
                id,
                self.settings.social_analysis_start,
                self.settings.social_analysis,
            );
            state.tasks.track(id, handle);
        }

        let esports: Vec<Uuid> = state
            .record
            .esports_profiles
            .iter()
            .filter(|p| p.status != ProfileStatus::Verified)
            .map(|p| p.id)
            .collect();
        for id in esports {
            let handle = spawn_profile_analysis(
                self.state.clone(),
                ProfileKind::Esports,
                id,
                self.settings.esports_analysis_start,
                self.settings.esports_analysis,
            );
            state.tasks.track(id, handle);
        }

        info!(
            "Wizard resumed with stored record ({} verifications rescheduled)",
            state.tasks.len()
        );
    }

    /// Abort outstanding verification tasks; returns how many were aborted
    pub async fn shutdown(&self) -> usize {
        let cancelled = self.state.write().await.tasks.cancel_all();
        info!("Registration session shut down ({} verifications aborted)", cancelled);
        cancelled
    }
}
