//! Validation chains for dish operations

use serde_json::Value;

use crate::core::error::ApiError;
use crate::core::validate::{Chain, id_matches_route, requires_field};

const RESOURCE: &str = "Dish";

/// Check: `data.price` is a strict integer greater than 0.
///
/// Non-numeric values and floats fail the same way as zero and negatives.
pub fn price_is_valid() -> impl Fn(&Value) -> Result<(), ApiError> + Send + Sync {
    |data: &Value| match data.get("price").and_then(Value::as_i64) {
        Some(price) if price > 0 => Ok(()),
        _ => Err(ApiError::validation(
            "Dish must have a price that is an integer greater than 0",
        )),
    }
}

/// Chain for `POST /dishes`
pub fn create_chain() -> Chain {
    Chain::new()
        .check(requires_field(RESOURCE, "name"))
        .check(requires_field(RESOURCE, "description"))
        .check(requires_field(RESOURCE, "price"))
        .check(requires_field(RESOURCE, "image_url"))
        .check(price_is_valid())
}

/// Chain for `PUT /dishes/{dishId}`; runs after the existence guard
pub fn update_chain(route_id: &str) -> Chain {
    Chain::new()
        .check(id_matches_route(RESOURCE, route_id.to_string()))
        .check(requires_field(RESOURCE, "name"))
        .check(requires_field(RESOURCE, "description"))
        .check(requires_field(RESOURCE, "price"))
        .check(requires_field(RESOURCE, "image_url"))
        .check(price_is_valid())
}
