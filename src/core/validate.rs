//! Validation chains
//!
//! Each operation runs an ordered list of checks over the request's data
//! section. A check either passes or halts the chain with an [`ApiError`];
//! the first failure wins and the terminal mutator never runs.
//!
//! Resource-agnostic checks live here; dish- and order-specific rules live in
//! the resource modules and compose into chains there.

use serde_json::Value;

use crate::core::error::ApiError;
use crate::core::payload::is_present;

/// A single validation step over the request data section
pub type Check = Box<dyn Fn(&Value) -> Result<(), ApiError> + Send + Sync>;

/// Ordered validation pipeline for one operation
#[derive(Default)]
pub struct Chain {
    checks: Vec<Check>,
}

impl Chain {
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Append a check to the end of the chain
    pub fn check(
        mut self,
        check: impl Fn(&Value) -> Result<(), ApiError> + Send + Sync + 'static,
    ) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Run every check in order, stopping at the first failure
    pub fn run(&self, data: &Value) -> Result<(), ApiError> {
        self.checks.iter().try_for_each(|check| check(data))
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

/// Check: `data[field]` is present and truthy.
pub fn requires_field(
    resource: &'static str,
    field: &'static str,
) -> impl Fn(&Value) -> Result<(), ApiError> + Send + Sync {
    move |data: &Value| {
        if is_present(data.get(field)) {
            Ok(())
        } else {
            Err(ApiError::validation(format!(
                "{} must include a {}",
                resource, field
            )))
        }
    }
}

/// Check: a truthy payload `id` must equal the route id.
///
/// An omitted or falsy payload id passes; the route id is authoritative. A
/// truthy id of any non-string type never equals the route id and fails with
/// the same mismatch message.
pub fn id_matches_route(
    resource: &'static str,
    route_id: String,
) -> impl Fn(&Value) -> Result<(), ApiError> + Send + Sync {
    move |data: &Value| {
        let id = data.get("id");
        if !is_present(id) {
            return Ok(());
        }
        match id {
            Some(Value::String(s)) if *s == route_id => Ok(()),
            Some(other) => Err(ApiError::validation(format!(
                "{} id does not match route id. {}: {}, Route: {}",
                resource,
                resource,
                id_text(other),
                route_id
            ))),
            None => Ok(()),
        }
    }
}

fn id_text(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
