//! Request-body validation.
//!
//! A deliberately small contract: callers pass the parsed JSON object and
//! the list of required field names, and branch on whether the returned
//! list is empty.

use serde_json::{Map, Value};

/// Check `body` for the presence (and, for `industry_connected`, the type)
/// of each field in `required`.
///
/// Returns one human-readable message per failed field; an empty vec means
/// the body passed.
///
/// - A field that is absent, JSON `null`, or an empty string yields
///   `"<field> is required"`.
/// - `industry_connected` must be a JSON boolean; any other present value
///   yields `"<field> must be true or false"`. The check is strict: the
///   numbers `0` and `1` are rejected even though the store encodes the
///   flag as 0/1.
pub fn input_check(body: &Map<String, Value>, required: &[&str]) -> Vec<String> {
  let mut errors = Vec::new();

  for &field in required {
    match body.get(field) {
      None | Some(Value::Null) => errors.push(format!("{field} is required")),
      Some(value) if field == "industry_connected" => {
        if !value.is_boolean() {
          errors.push(format!("{field} must be true or false"));
        }
      }
      Some(Value::String(s)) if s.is_empty() => {
        errors.push(format!("{field} is required"));
      }
      Some(_) => {}
    }
  }

  errors
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn body(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
  }

  #[test]
  fn complete_body_passes() {
    let b = body(json!({
      "first_name": "Jane",
      "last_name": "Doe",
      "industry_connected": false,
    }));
    let errors =
      input_check(&b, &["first_name", "last_name", "industry_connected"]);
    assert!(errors.is_empty());
  }

  #[test]
  fn missing_field_is_reported() {
    let b = body(json!({ "last_name": "Doe" }));
    let errors = input_check(&b, &["first_name", "last_name"]);
    assert_eq!(errors, vec!["first_name is required"]);
  }

  #[test]
  fn null_counts_as_missing() {
    let b = body(json!({ "party_id": null }));
    let errors = input_check(&b, &["party_id"]);
    assert_eq!(errors, vec!["party_id is required"]);
  }

  #[test]
  fn empty_string_counts_as_missing() {
    let b = body(json!({ "first_name": "" }));
    let errors = input_check(&b, &["first_name"]);
    assert_eq!(errors, vec!["first_name is required"]);
  }

  #[test]
  fn industry_connected_must_be_boolean() {
    let b = body(json!({ "industry_connected": 1 }));
    let errors = input_check(&b, &["industry_connected"]);
    assert_eq!(errors, vec!["industry_connected must be true or false"]);
  }

  #[test]
  fn industry_connected_accepts_both_booleans() {
    for flag in [true, false] {
      let b = body(json!({ "industry_connected": flag }));
      assert!(input_check(&b, &["industry_connected"]).is_empty());
    }
  }

  #[test]
  fn one_error_per_failed_field() {
    let b = body(json!({ "industry_connected": "yes" }));
    let errors =
      input_check(&b, &["first_name", "last_name", "industry_connected"]);
    assert_eq!(errors, vec![
      "first_name is required",
      "last_name is required",
      "industry_connected must be true or false",
    ]);
  }
}
