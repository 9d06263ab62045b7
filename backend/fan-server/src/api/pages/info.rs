//! Static pages: landing, about and not-found.

use crate::api::redirect::see_other;

use fan_core::Route;

use axum::{
    Json,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PageResponse {
    pub route: Route,
    pub path: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

impl PageResponse {
    fn new(route: Route, title: &'static str, description: &'static str) -> Self {
        Self {
            route,
            path: route.path(),
            title,
            description,
        }
    }
}

/// GET /
pub async fn landing() -> Json<PageResponse> {
    Json(PageResponse::new(
        Route::Home,
        "FURIA Portal do Fã",
        "Conecte-se com a FURIA, compartilhe sua paixão e desbloqueie experiências exclusivas para fãs.",
    ))
}

/// GET /sobre
pub async fn about() -> Json<PageResponse> {
    Json(PageResponse::new(
        Route::About,
        "Sobre o Portal de Fãs da FURIA",
        "Construindo conexões mais fortes entre a FURIA e nossa comunidade global de fãs",
    ))
}

/// GET /404
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(PageResponse::new(
            Route::NotFound,
            "Página não encontrada",
            "A página que você está procurando não existe ou foi movida.",
        )),
    )
        .into_response()
}

/// Any unmatched path
pub async fn fallback(uri: Uri) -> Response {
    log::debug!("No route for {}, redirecting to {}", uri, Route::NotFound);
    see_other(Route::NotFound)
}
