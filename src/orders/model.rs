//! Order entity model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::core::id::next_id;
use crate::core::store::Keyed;

/// Delivery state of an order
///
/// Orders start out pending and the update rules decide which states are
/// reachable from there; a delivered order is immutable and only a pending
/// order may be deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    /// Parse a wire value; returns None for anything outside the enum
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(OrderStatus::Pending),
            "preparing" => Some(OrderStatus::Preparing),
            "out-for-delivery" => Some(OrderStatus::OutForDelivery),
            "delivered" => Some(OrderStatus::Delivered),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of an order: a quantity plus the dish fields as submitted
///
/// The dish reference fields are carried through verbatim, so whatever shape
/// the client submitted round-trips back out on reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub quantity: i64,

    #[serde(flatten)]
    pub dish: Map<String, Value>,
}

/// A delivery order
///
/// Invariants: `dishes` is non-empty and every line's quantity is a positive
/// integer (the validation chains enforce both before any mutator runs).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<OrderLine>,
}

/// Mutable order fields as submitted in a request's data section
///
/// Status is deliberately not part of the draft: creation ignores any
/// submitted status, and update handlers read it separately after the status
/// rule has run.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub deliver_to: String,
    pub mobile_number: String,
    pub dishes: Vec<OrderLine>,
}

impl Order {
    /// Build a new order from a draft: fresh id, status starts out pending
    pub fn create(draft: OrderDraft) -> Self {
        Self {
            id: next_id(),
            deliver_to: draft.deliver_to,
            mobile_number: draft.mobile_number,
            status: OrderStatus::Pending,
            dishes: draft.dishes,
        }
    }

    /// Overwrite every mutable field, keeping the id
    pub fn apply(&mut self, draft: OrderDraft, status: OrderStatus) {
        self.deliver_to = draft.deliver_to;
        self.mobile_number = draft.mobile_number;
        self.status = status;
        self.dishes = draft.dishes;
    }
}

impl Keyed for Order {
    fn id(&self) -> &str {
        &self.id
    }
}
