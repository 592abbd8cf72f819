//! sleepscale-api
//!
//! HTTP boundary for the form host and the clinic's query pages.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

const MAX_REPORT_BYTES: usize = 32 * 1024 * 1024;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Query pages (admin token)
    let admin = Router::new()
        .route(
            "/respondents/{name}/assessments",
            get(routes::respondents::list_assessments),
        )
        .route(
            "/respondents/{name}/summary",
            get(routes::respondents::summary),
        )
        .route("/respondents/{name}/diary", get(routes::diary::recent))
        .route(
            "/respondents/{name}/diary/{date}",
            get(routes::diary::get_entry),
        )
        .route(
            "/respondents/{name}/reports",
            get(routes::reports::list_reports),
        )
        .route(
            "/respondents/{name}/reports/{treat_date}",
            get(routes::reports::get_report)
                .put(routes::reports::put_report)
                .layer(DefaultBodyLimit::max(MAX_REPORT_BYTES)),
        )
        .route_layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::auth::require_admin,
        ));

    Router::new()
        // Health (no auth)
        .route("/health", get(routes::health::health_check))
        // Form host (no auth)
        .route("/instruments", get(routes::instruments::list_instruments))
        .route(
            "/instruments/{id}",
            get(routes::instruments::get_instrument_detail),
        )
        .route("/instruments/{id}/score", post(routes::instruments::score))
        .route(
            "/instruments/{id}/submissions",
            post(routes::submissions::submit),
        )
        .route("/diary", post(routes::diary::submit_entry))
        .merge(admin)
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
