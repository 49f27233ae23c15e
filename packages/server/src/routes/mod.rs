use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers;
use crate::state::AppState;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/join",
            post(handlers::join::submit_application).fallback(handlers::join::method_not_allowed),
        )
        .route("/teams", get(handlers::teams::list_teams))
        .route("/health", get(handlers::health::health))
}
