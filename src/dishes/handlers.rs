//! HTTP handlers for the /dishes routes
//!
//! Each mutator runs its operation's validation chain over the request's data
//! section before touching the repository; the existence guard runs first on
//! the id routes so an unknown id answers 404 even when the payload is bad.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::Value;

use super::model::{Dish, DishDraft};
use super::validate;
use crate::core::error::{ApiError, ApiResult};
use crate::core::payload::{self, Envelope};
use crate::server::AppState;

/// GET /dishes
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Envelope<Vec<Dish>>>> {
    let dishes = state.dishes.list().await?;
    Ok(Json(Envelope::new(dishes)))
}

/// POST /dishes
pub async fn create(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> ApiResult<(StatusCode, Json<Envelope<Dish>>)> {
    let data = payload::data_section(body);
    validate::create_chain().run(&data)?;

    let draft: DishDraft = payload::decode("Dish", data)?;
    let dish = Dish::create(draft);
    state.dishes.append(dish.clone()).await?;

    Ok((StatusCode::CREATED, Json(Envelope::new(dish))))
}

/// GET /dishes/{dishId}
pub async fn read(
    State(state): State<AppState>,
    Path(dish_id): Path<String>,
) -> ApiResult<Json<Envelope<Dish>>> {
    let dish = find_dish(&state, &dish_id).await?;
    Ok(Json(Envelope::new(dish)))
}

/// PUT /dishes/{dishId}
pub async fn update(
    State(state): State<AppState>,
    Path(dish_id): Path<String>,
    body: Option<Json<Value>>,
) -> ApiResult<Json<Envelope<Dish>>> {
    let mut dish = find_dish(&state, &dish_id).await?;

    let data = payload::data_section(body);
    validate::update_chain(&dish_id).run(&data)?;

    let draft: DishDraft = payload::decode("Dish", data)?;
    dish.apply(draft);

    if !state.dishes.replace(dish.clone()).await? {
        return Err(missing(&dish_id));
    }

    Ok(Json(Envelope::new(dish)))
}

/// Existence guard for the id routes
async fn find_dish(state: &AppState, dish_id: &str) -> ApiResult<Dish> {
    state
        .dishes
        .find(dish_id)
        .await?
        .ok_or_else(|| missing(dish_id))
}

fn missing(dish_id: &str) -> ApiError {
    ApiError::not_found(format!("Dish does not exist: {}.", dish_id))
}
