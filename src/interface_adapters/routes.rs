use crate::interface_adapters::handlers::{create_match, list_matches};
use crate::interface_adapters::state::AppState;
use axum::{Router, routing::post};

// Build the HTTP router for match endpoints.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/matches", post(create_match).get(list_matches))
        .with_state(state)
}
