use crate::api::pages::{dashboard, info, profile};
use crate::api::registration::registration;
use crate::{AppState, health};

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Pages
        .route("/", get(info::landing))
        .route("/sobre", get(info::about))
        .route("/404", get(info::not_found))
        .route("/painel", get(dashboard::dashboard))
        .route("/perfil", get(profile::profile))
        .route("/perfil/logout", post(profile::logout))
        .route("/perfil/editar", post(profile::edit))
        // Wizard
        .nest("/registro", registration_routes())
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .fallback(info::fallback)
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

fn registration_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(registration::get_registration))
        .route("/next", post(registration::next_step))
        .route("/previous", post(registration::previous_step))
        .route("/personal/change", post(registration::change_personal))
        .route("/personal/blur", post(registration::blur_personal))
        .route("/address/change", post(registration::change_address))
        .route("/address/blur", post(registration::blur_address))
        .route("/interests/toggle", post(registration::toggle_interest))
        .route("/interests/custom", post(registration::add_custom_interest))
        .route("/interests/{interest}", delete(registration::remove_interest))
        .route("/documents", post(registration::upload_document))
        .route("/documents/type", put(registration::select_document_type))
        .route("/documents/{id}", delete(registration::remove_document))
        .route("/social", post(registration::connect_social))
        .route("/social/{id}", delete(registration::remove_social))
        .route("/esports", post(registration::add_esports))
        .route("/esports/{id}", delete(registration::remove_esports))
        .route("/summary", get(registration::summary))
        .route("/submit", post(registration::submit))
}
