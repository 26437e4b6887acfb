use axum::{routing::post, Router};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::state::AppState;

pub mod advertisements;

/// Build the application router: three POST endpoints, envelope 405s for other
/// methods on them, and an envelope 404 for every other path.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/create", post(advertisements::create).fallback(advertisements::method_not_allowed))
        .route("/getone", post(advertisements::get_one).fallback(advertisements::method_not_allowed))
        .route("/getall", post(advertisements::get_all).fallback(advertisements::method_not_allowed));

    api.fallback(advertisements::not_found)
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                // one span per request with method and path
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx are logged as errors
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                ),
        )
}
