pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::outfits::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Wardrobe
        .route("/api/v1/clothing", get(handlers::handle_list_clothing))
        // Outfits
        .route(
            "/api/v1/outfits",
            post(handlers::handle_generate).get(handlers::handle_list_outfits),
        )
        .route("/api/v1/outfits/:id", get(handlers::handle_get_outfit))
        .route(
            "/api/v1/outfits/:id/regenerate",
            post(handlers::handle_regenerate),
        )
        .route(
            "/api/v1/outfits/:id/feedback",
            post(handlers::handle_add_feedback).get(handlers::handle_get_feedback),
        )
        .with_state(state)
}
