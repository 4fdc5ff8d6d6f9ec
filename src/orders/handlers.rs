//! HTTP handlers for the /orders routes
//!
//! Same pipeline shape as the dish handlers, plus the status rules: update
//! re-reads the validated status into the enum, and delete is guarded so only
//! a pending order leaves the collection.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::Value;

use super::model::{Order, OrderDraft, OrderStatus};
use super::validate;
use crate::core::error::{ApiError, ApiResult};
use crate::core::payload::{self, Envelope};
use crate::server::AppState;

/// GET /orders
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Envelope<Vec<Order>>>> {
    let orders = state.orders.list().await?;
    Ok(Json(Envelope::new(orders)))
}

/// POST /orders
///
/// A submitted status is ignored; new orders always start out pending.
pub async fn create(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> ApiResult<(StatusCode, Json<Envelope<Order>>)> {
    let data = payload::data_section(body);
    validate::create_chain().run(&data)?;

    let draft: OrderDraft = payload::decode("Order", data)?;
    let order = Order::create(draft);
    state.orders.append(order.clone()).await?;

    Ok((StatusCode::CREATED, Json(Envelope::new(order))))
}

/// GET /orders/{orderId}
pub async fn read(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> ApiResult<Json<Envelope<Order>>> {
    let order = find_order(&state, &order_id).await?;
    Ok(Json(Envelope::new(order)))
}

/// PUT /orders/{orderId}
pub async fn update(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    body: Option<Json<Value>>,
) -> ApiResult<Json<Envelope<Order>>> {
    let mut order = find_order(&state, &order_id).await?;

    let data = payload::data_section(body);
    validate::update_chain(&order_id).run(&data)?;

    let status = data
        .get("status")
        .and_then(Value::as_str)
        .and_then(OrderStatus::parse)
        .ok_or_else(|| ApiError::internal("order status missing after validation"))?;
    let draft: OrderDraft = payload::decode("Order", data)?;
    order.apply(draft, status);

    if !state.orders.replace(order.clone()).await? {
        return Err(missing(&order_id));
    }

    Ok(Json(Envelope::new(order)))
}

/// DELETE /orders/{orderId}
pub async fn destroy(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> ApiResult<StatusCode> {
    let order = find_order(&state, &order_id).await?;
    validate::ensure_deletable(&order)?;

    state.orders.remove(&order_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Existence guard for the id routes
async fn find_order(state: &AppState, order_id: &str) -> ApiResult<Order> {
    state
        .orders
        .find(order_id)
        .await?
        .ok_or_else(|| missing(order_id))
}

fn missing(order_id: &str) -> ApiError {
    ApiError::not_found(format!("Order does not exist: {}.", order_id))
}
