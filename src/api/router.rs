use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{AppState, get_movie_for_viewing, get_rental, list_movies, rent_movie};

/// Creates the API router with all movie and rental endpoints
///
/// Query endpoints (Read operations):
/// - GET /movies - Movies to select from
/// - GET /movies/:id - Movie for viewing
/// - GET /rentals/:id - Rental details
///
/// Command endpoints (Write operations):
/// - POST /rentals - Rent a movie
pub fn create_router<T: Send + 'static>(state: Arc<AppState<T>>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        // Query endpoints
        .route("/movies", get(list_movies::<T>))
        .route("/movies/:id", get(get_movie_for_viewing::<T>))
        .route("/rentals/:id", get(get_rental::<T>))
        // Command endpoints
        .route("/rentals", post(rent_movie::<T>))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
