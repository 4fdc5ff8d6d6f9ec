//! Validation chains for order operations

use serde_json::Value;

use super::model::{Order, OrderStatus};
use crate::core::error::ApiError;
use crate::core::validate::{Chain, id_matches_route, requires_field};

const RESOURCE: &str = "Order";

/// Check: `data.dishes` is a non-empty array.
///
/// Non-array input reports the same error as an empty array.
pub fn has_dishes() -> impl Fn(&Value) -> Result<(), ApiError> + Send + Sync {
    |data: &Value| match data.get("dishes").and_then(Value::as_array) {
        Some(dishes) if !dishes.is_empty() => Ok(()),
        _ => Err(ApiError::validation("Order must include at least one dish")),
    }
}

/// Check: every line carries a quantity that is an integer greater than 0.
///
/// Scans in order and halts on the first offending line; the error names that
/// line's zero-based index.
pub fn quantities_are_valid() -> impl Fn(&Value) -> Result<(), ApiError> + Send + Sync {
    |data: &Value| {
        let Some(lines) = data.get("dishes").and_then(Value::as_array) else {
            // Non-array dishes are has_dishes' failure to report.
            return Ok(());
        };
        match lines.iter().position(|line| !quantity_ok(line)) {
            Some(index) => Err(ApiError::validation(format!(
                "Dish {} must have a quantity that is an integer greater than 0",
                index
            ))),
            None => Ok(()),
        }
    }
}

fn quantity_ok(line: &Value) -> bool {
    matches!(line.get("quantity").and_then(Value::as_i64), Some(q) if q > 0)
}

/// Check: `data.status` names a known status and is not `delivered`.
///
/// The delivered rule applies to the target status being written, so even the
/// transition into delivered is rejected.
pub fn status_is_valid() -> impl Fn(&Value) -> Result<(), ApiError> + Send + Sync {
    |data: &Value| {
        let status = data
            .get("status")
            .and_then(Value::as_str)
            .and_then(OrderStatus::parse);
        match status {
            None => Err(ApiError::validation(
                "Order must have a status of pending, preparing, out-for-delivery, delivered",
            )),
            Some(OrderStatus::Delivered) => {
                Err(ApiError::validation("A delivered order cannot be changed"))
            }
            Some(_) => Ok(()),
        }
    }
}

/// Guard for `DELETE /orders/{orderId}`: only a pending order may go
pub fn ensure_deletable(order: &Order) -> Result<(), ApiError> {
    if order.status == OrderStatus::Pending {
        Ok(())
    } else {
        Err(ApiError::delete_conflict(
            "An order cannot be deleted unless it is pending",
        ))
    }
}

/// Chain for `POST /orders`. Status is not validated at creation.
pub fn create_chain() -> Chain {
    Chain::new()
        .check(requires_field(RESOURCE, "deliverTo"))
        .check(requires_field(RESOURCE, "mobileNumber"))
        .check(requires_field(RESOURCE, "dishes"))
        .check(has_dishes())
        .check(quantities_are_valid())
}

/// Chain for `PUT /orders/{orderId}`; runs after the existence guard
pub fn update_chain(route_id: &str) -> Chain {
    Chain::new()
        .check(id_matches_route(RESOURCE, route_id.to_string()))
        .check(requires_field(RESOURCE, "deliverTo"))
        .check(requires_field(RESOURCE, "mobileNumber"))
        .check(requires_field(RESOURCE, "dishes"))
        .check(status_is_valid())
        .check(has_dishes())
        .check(quantities_are_valid())
}
