//! Route table and shared application state

use axum::Json;
use axum::http::Uri;
use axum::routing::get;
use axum::Router;
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::error::ApiError;
use crate::core::store::Repository;
use crate::dishes::{self, model::Dish};
use crate::orders::{self, model::Order};

/// Application state shared across handlers
///
/// The repositories are the only shared mutable state in the process; they
/// are injected here so tests can swap in whatever backing they need.
#[derive(Clone)]
pub struct AppState {
    pub dishes: Arc<dyn Repository<Dish>>,
    pub orders: Arc<dyn Repository<Order>>,
}

/// Build the full application router
///
/// Routes:
/// - `GET/POST /dishes`, `GET/PUT /dishes/{dishId}`
/// - `GET/POST /orders`, `GET/PUT/DELETE /orders/{orderId}`
/// - `GET /health`, `GET /healthz`
///
/// Unknown paths answer 404 through the fallback so the error body matches
/// the rest of the API.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
        .route(
            "/dishes",
            get(dishes::handlers::list).post(dishes::handlers::create),
        )
        .route(
            "/dishes/{dish_id}",
            get(dishes::handlers::read).put(dishes::handlers::update),
        )
        .route(
            "/orders",
            get(orders::handlers::list).post(orders::handlers::create),
        )
        .route(
            "/orders/{order_id}",
            get(orders::handlers::read)
                .put(orders::handlers::update)
                .delete(orders::handlers::destroy),
        )
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint handler
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "mealdrop"
    }))
}

/// Fallback for paths outside the route table
async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("Not found: {}", uri))
}
