pub mod api;

use axum::Router;
use tower_http::cors::CorsLayer;

use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api::router())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
