//! Wizard REST handlers
//!
//! Mutating handlers answer with the fresh wizard snapshot unless they create
//! an item, in which case the item is returned with 201.

use crate::api::redirect::see_other;
use crate::{
    ApiError, ApiResult, AppState, DocumentResponse, DocumentTypeRequest, EsportsProfileResponse,
    FieldBlurRequest, FieldChangeRequest, InterestRequest, SocialProfileResponse,
};

use fan_wizard::{
    AddressField, DocumentUpload, EsportsDraft, PersonalField, SessionSnapshot, SocialDraft,
    SummaryView,
};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use uuid::Uuid;

// =============================================================================
// Navigation
// =============================================================================

/// GET /registro
pub async fn get_registration(State(state): State<AppState>) -> Json<SessionSnapshot> {
    Json(state.session.snapshot().await)
}

/// POST /registro/next
pub async fn next_step(State(state): State<AppState>) -> Json<SessionSnapshot> {
    state.session.advance().await;
    Json(state.session.snapshot().await)
}

/// POST /registro/previous
pub async fn previous_step(State(state): State<AppState>) -> Json<SessionSnapshot> {
    state.session.retreat().await;
    Json(state.session.snapshot().await)
}

/// GET /registro/summary
pub async fn summary(State(state): State<AppState>) -> Json<SummaryView> {
    Json(state.session.summary().await)
}

/// POST /registro/submit
///
/// Persist the registration and send the visitor to the dashboard.
pub async fn submit(State(state): State<AppState>) -> ApiResult<Response> {
    let route = state.session.submit().await?;
    Ok(see_other(route))
}

// =============================================================================
// Personal info and address
// =============================================================================

/// POST /registro/personal/change
pub async fn change_personal(
    State(state): State<AppState>,
    Json(request): Json<FieldChangeRequest<PersonalField>>,
) -> Json<SessionSnapshot> {
    state
        .session
        .change_personal(request.field, &request.value)
        .await;
    Json(state.session.snapshot().await)
}

/// POST /registro/personal/blur
pub async fn blur_personal(
    State(state): State<AppState>,
    Json(request): Json<FieldBlurRequest<PersonalField>>,
) -> ApiResult<Json<SessionSnapshot>> {
    state.session.blur_personal(request.field).await?;
    Ok(Json(state.session.snapshot().await))
}

/// POST /registro/address/change
pub async fn change_address(
    State(state): State<AppState>,
    Json(request): Json<FieldChangeRequest<AddressField>>,
) -> Json<SessionSnapshot> {
    state
        .session
        .change_address(request.field, &request.value)
        .await;
    Json(state.session.snapshot().await)
}

/// POST /registro/address/blur
pub async fn blur_address(
    State(state): State<AppState>,
    Json(request): Json<FieldBlurRequest<AddressField>>,
) -> ApiResult<Json<SessionSnapshot>> {
    state.session.blur_address(request.field).await?;
    Ok(Json(state.session.snapshot().await))
}

// =============================================================================
// Interests
// =============================================================================

/// POST /registro/interests/toggle
pub async fn toggle_interest(
    State(state): State<AppState>,
    Json(request): Json<InterestRequest>,
) -> ApiResult<Json<SessionSnapshot>> {
    state.session.toggle_interest(&request.interest).await?;
    Ok(Json(state.session.snapshot().await))
}

/// POST /registro/interests/custom
pub async fn add_custom_interest(
    State(state): State<AppState>,
    Json(request): Json<InterestRequest>,
) -> ApiResult<Json<SessionSnapshot>> {
    state.session.add_custom_interest(&request.interest).await?;
    Ok(Json(state.session.snapshot().await))
}

/// DELETE /registro/interests/{interest}
pub async fn remove_interest(
    State(state): State<AppState>,
    Path(interest): Path<String>,
) -> ApiResult<StatusCode> {
    if !state.session.remove_interest(&interest).await {
        return Err(ApiError::not_found(format!(
            "Interest '{}' is not selected",
            interest
        )));
    }
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Documents
// =============================================================================

/// PUT /registro/documents/type
pub async fn select_document_type(
    State(state): State<AppState>,
    Json(request): Json<DocumentTypeRequest>,
) -> Json<SessionSnapshot> {
    state
        .session
        .select_document_type(request.document_type)
        .await;
    Json(state.session.snapshot().await)
}

/// POST /registro/documents
pub async fn upload_document(
    State(state): State<AppState>,
    Json(upload): Json<DocumentUpload>,
) -> ApiResult<(StatusCode, Json<DocumentResponse>)> {
    let document = state.session.upload_document(&upload).await?;
    Ok((StatusCode::CREATED, Json(DocumentResponse { document })))
}

/// DELETE /registro/documents/{id}
pub async fn remove_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let document_id = Uuid::parse_str(&id)?;

    if !state.session.remove_document(document_id).await {
        return Err(ApiError::not_found(format!("Document {} not found", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Social and esports profiles
// =============================================================================

/// POST /registro/social
pub async fn connect_social(
    State(state): State<AppState>,
    Json(draft): Json<SocialDraft>,
) -> ApiResult<(StatusCode, Json<SocialProfileResponse>)> {
    let profile = state.session.connect_social(draft).await?;
    Ok((StatusCode::CREATED, Json(SocialProfileResponse { profile })))
}

/// DELETE /registro/social/{id}
pub async fn remove_social(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let profile_id = Uuid::parse_str(&id)?;

    if !state.session.remove_social(profile_id).await {
        return Err(ApiError::not_found(format!("Social profile {} not found", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// POST /registro/esports
pub async fn add_esports(
    State(state): State<AppState>,
    Json(draft): Json<EsportsDraft>,
) -> ApiResult<(StatusCode, Json<EsportsProfileResponse>)> {
    let profile = state.session.add_esports(draft).await?;
    Ok((StatusCode::CREATED, Json(EsportsProfileResponse { profile })))
}

/// DELETE /registro/esports/{id}
pub async fn remove_esports(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let profile_id = Uuid::parse_str(&id)?;

    if !state.session.remove_esports(profile_id).await {
        return Err(ApiError::not_found(format!("Esports profile {} not found", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}
