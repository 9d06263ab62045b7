//! Profile page: view the stored registration, log out, or edit it in the
//! wizard.

use crate::api::redirect::see_other;
use crate::{ApiResult, AppState};

use fan_core::{Route, UserRecord, VerificationStatus};

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub profile: UserRecord,
    pub verification_status: VerificationStatus,
    pub verification_label: &'static str,
}

/// GET /perfil
pub async fn profile(State(state): State<AppState>) -> ApiResult<Response> {
    let Some(record) = state.store.load().await? else {
        return Ok(see_other(Route::Registration));
    };

    let verification_status = VerificationStatus::of(&record);
    Ok(Json(ProfileResponse {
        profile: record,
        verification_status,
        verification_label: verification_status.label(),
    })
    .into_response())
}

/// POST /perfil/logout
///
/// Delete the stored registration and start the wizard over.
pub async fn logout(State(state): State<AppState>) -> ApiResult<Response> {
    state.session.logout().await?;
    log::info!("Stored registration cleared");

    Ok(see_other(Route::Home))
}

/// POST /perfil/editar
///
/// Load the stored registration into the wizard.
pub async fn edit(State(state): State<AppState>) -> ApiResult<Response> {
    let Some(record) = state.store.load().await? else {
        return Ok(see_other(Route::Registration));
    };

    state.session.resume(record).await;
    Ok(see_other(Route::Registration))
}
