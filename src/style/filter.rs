//! Legacy array-form filter expressions.
//!
//! The exclusion filter produced by label placement has the shape
//! `["!in", field, key1, key2, …]`. The evaluator covers the legacy
//! operator set needed for that plus the usual layer-side filters.
//!
//! Legacy semantics: a feature missing the filter key is never "in", so
//! `"!in"` keeps such features visible.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Filter expression (legacy array subset of Mapbox filter syntax).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterExpr {
    /// Array-based expression.
    Array(Vec<Value>),
    /// Boolean literal.
    Bool(bool),
}

impl FilterExpr {
    /// Build the exclusion filter `["!in", field, key1, key2, …]`.
    pub fn not_in<I>(field: &str, keys: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        let mut arr = vec![Value::from("!in"), Value::from(field)];
        arr.extend(keys);
        FilterExpr::Array(arr)
    }

    /// Evaluate the filter against a feature's properties.
    pub fn evaluate(&self, props: &serde_json::Map<String, Value>) -> bool {
        match self {
            FilterExpr::Bool(b) => *b,
            FilterExpr::Array(arr) => eval_array(arr, props),
        }
    }
}

fn eval_array(arr: &[Value], props: &serde_json::Map<String, Value>) -> bool {
    if arr.is_empty() {
        return true;
    }

    let op = match arr[0].as_str() {
        Some(s) => s,
        None => return true,
    };

    match op {
        "==" => {
            if arr.len() != 3 {
                return true;
            }
            let key = arr[1].as_str().unwrap_or("");
            props.get(key).map(|v| v == &arr[2]).unwrap_or(false)
        }
        "!=" => {
            if arr.len() != 3 {
                return true;
            }
            let key = arr[1].as_str().unwrap_or("");
            props.get(key).map(|v| v != &arr[2]).unwrap_or(true)
        }
        "in" => {
            if arr.len() < 2 {
                return true;
            }
            let key = arr[1].as_str().unwrap_or("");
            match props.get(key) {
                Some(val) => arr[2..].iter().any(|v| v == val),
                None => false,
            }
        }
        "!in" => {
            if arr.len() < 2 {
                return true;
            }
            let mut inner = arr.to_vec();
            inner[0] = Value::from("in");
            !eval_array(&inner, props)
        }
        "has" => {
            if arr.len() != 2 {
                return true;
            }
            props.contains_key(arr[1].as_str().unwrap_or(""))
        }
        "!has" => {
            if arr.len() != 2 {
                return true;
            }
            !props.contains_key(arr[1].as_str().unwrap_or(""))
        }
        "all" => arr[1..]
            .iter()
            .all(|sub| sub.as_array().map(|a| eval_array(a, props)).unwrap_or(true)),
        "any" => arr[1..]
            .iter()
            .any(|sub| sub.as_array().map(|a| eval_array(a, props)).unwrap_or(false)),
        "none" => !arr[1..]
            .iter()
            .any(|sub| sub.as_array().map(|a| eval_array(a, props)).unwrap_or(false)),
        "!" => {
            if arr.len() != 2 {
                return true;
            }
            match arr[1].as_array() {
                Some(sub) => !eval_array(sub, props),
                None => true,
            }
        }
        // Unknown operators pass through.
        _ => true,
    }
}
