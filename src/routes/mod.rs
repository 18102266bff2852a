use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::AppResult;
use crate::handlers::{rides, search};
use crate::middleware::rate_limit::{create_ip_governor, log_request};
use crate::AppState;

/// Application routes without any middleware.
pub fn create_router(state: AppState) -> Router {
    let ride_routes = Router::new()
        .route("/", get(search::search_rides).post(rides::publish_ride))
        .route("/{id}", get(rides::get_ride))
        .route("/{id}/bookings", post(rides::request_booking));

    Router::new()
        .nest("/api/rides", ride_routes)
        .with_state(state)
}

/// Routes plus tracing, CORS and the per-IP governor. The request log is the
/// outermost layer so it also sees requests the governor turns away.
/// Serve with `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn create_app(state: AppState) -> AppResult<Router> {
    let governor = create_ip_governor(&state.config)?;

    Ok(create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(governor)
        .layer(middleware::from_fn(log_request)))
}
