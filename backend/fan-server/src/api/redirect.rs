use fan_core::Route;

use axum::response::{IntoResponse, Redirect, Response};

/// 303 See Other to a portal route
pub fn see_other(route: Route) -> Response {
    Redirect::to(route.path()).into_response()
}
