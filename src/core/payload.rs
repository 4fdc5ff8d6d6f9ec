//! Request and response envelopes
//!
//! Every request body is `{ "data": { ...fields } }` and every success
//! response is `{ "data": <record or collection> }`. An absent or unparsable
//! body collapses to an empty data section, so the presence validators (not
//! the JSON layer) report the failure.

use axum::Json;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::core::error::ApiError;

/// Success response wrapper
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Pull the `data` section out of a request body.
///
/// A missing body, a body that is not an object, a missing `data` key, and an
/// explicit `data: null` all collapse to `{}`.
pub fn data_section(body: Option<Json<Value>>) -> Value {
    body.and_then(|Json(mut value)| value.get_mut("data").map(Value::take))
        .filter(|data| !data.is_null())
        .unwrap_or_else(|| Value::Object(Map::new()))
}

/// Loose presence check over a JSON value.
///
/// `null`/missing, `false`, `0`, and `""` count as absent; arrays and objects
/// (even empty ones) count as present. The loose rule is deliberate: a zero
/// price must read as a missing price, not an invalid one.
pub fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64() != Some(0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Decode a validated data section into a typed draft.
///
/// Runs after a chain has passed, so a failure here means a field was truthy
/// but carried the wrong type; that is still a validation failure.
pub fn decode<T: DeserializeOwned>(resource: &str, data: Value) -> Result<T, ApiError> {
    serde_json::from_value(data)
        .map_err(|err| ApiError::validation(format!("Invalid {} payload: {}", resource, err)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    // === data_section() ===

    #[test]
    fn test_data_section_extracts_data_object() {
        let body = Some(Json(json!({"data": {"name": "Taco"}})));
        assert_eq!(data_section(body), json!({"name": "Taco"}));
    }

    #[test]
    fn test_data_section_missing_body_is_empty_object() {
        assert_eq!(data_section(None), json!({}));
    }

    #[test]
    fn test_data_section_missing_data_key_is_empty_object() {
        let body = Some(Json(json!({"name": "Taco"})));
        assert_eq!(data_section(body), json!({}));
    }

    #[test]
    fn test_data_section_null_data_is_empty_object() {
        let body = Some(Json(json!({"data": null})));
        assert_eq!(data_section(body), json!({}));
    }

    #[test]
    fn test_data_section_non_object_data_passes_through() {
        // Presence checks against a scalar data section all report absent.
        let body = Some(Json(json!({"data": 5})));
        assert_eq!(data_section(body), json!(5));
    }

    // === is_present() ===

    #[test]
    fn test_missing_and_null_are_absent() {
        assert!(!is_present(None));
        assert!(!is_present(Some(&json!(null))));
    }

    #[test]
    fn test_falsy_scalars_are_absent() {
        assert!(!is_present(Some(&json!(0))));
        assert!(!is_present(Some(&json!(0.0))));
        assert!(!is_present(Some(&json!(""))));
        assert!(!is_present(Some(&json!(false))));
    }

    #[test]
    fn test_truthy_scalars_are_present() {
        assert!(is_present(Some(&json!(1))));
        assert!(is_present(Some(&json!(-1))));
        assert!(is_present(Some(&json!("x"))));
        assert!(is_present(Some(&json!(true))));
    }

    #[test]
    fn test_containers_are_present_even_when_empty() {
        assert!(is_present(Some(&json!([]))));
        assert!(is_present(Some(&json!({}))));
    }

    // === decode() ===

    #[derive(Debug, Deserialize, PartialEq)]
    struct Named {
        name: String,
    }

    #[test]
    fn test_decode_valid_payload() {
        let named: Named = decode("Dish", json!({"name": "Taco", "extra": 1})).unwrap();
        assert_eq!(named, Named { name: "Taco".to_string() });
    }

    #[test]
    fn test_decode_wrong_type_is_validation_error() {
        let result: Result<Named, _> = decode("Dish", json!({"name": 42}));
        let err = result.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert!(err.message().starts_with("Invalid Dish payload"));
    }
}
