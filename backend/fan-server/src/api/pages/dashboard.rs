use crate::api::redirect::see_other;
use crate::{ApiResult, AppState};

use fan_core::{DashboardReport, Route};

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

/// GET /painel
///
/// Scores of the stored registration. Without one the visitor is sent to
/// the wizard.
pub async fn dashboard(State(state): State<AppState>) -> ApiResult<Response> {
    let Some(record) = state.store.load().await? else {
        log::info!("Dashboard requested without a stored registration");
        return Ok(see_other(Route::Registration));
    };

    let report = if state.randomize_charts {
        DashboardReport::build_with_rng(&record, &mut rand::rng())
    } else {
        DashboardReport::build(&record)
    };

    Ok(Json(report).into_response())
}
