//! Parameter validation.
//!
//! Validation runs on the JSON form of a (normalized) parameter struct so
//! required keys can be named by dotted path, e.g. `body.id`.
//!
//! Two checks exist:
//!
//! - [`require`] - every listed key must be present and truthy
//!   (`null`, `false`, `0` and `""` count as missing).
//! - [`require_either`] - at least one of two key-sets must be fully present
//!   (presence only; values are not inspected).

use serde::Serialize;
use serde_json::Value;

use crate::error::ValidationError;
use crate::params::PageNumber;

/// Serializes `params` and checks that every key in `required` is set.
pub fn require_params<P: Serialize>(params: &P, required: &[&str]) -> Result<(), ValidationError> {
    let value = serde_json::to_value(params).map_err(|_| ValidationError::NotAnObject)?;
    require(&value, required)
}

/// Checks that every dotted key in `required` resolves to a truthy value.
///
/// Returns the first missing key.
pub fn require(params: &Value, required: &[&str]) -> Result<(), ValidationError> {
    if !params.is_object() {
        return Err(ValidationError::NotAnObject);
    }

    for key in required {
        if !lookup(params, key).is_some_and(is_truthy) {
            return Err(ValidationError::MissingParam {
                param: (*key).to_string(),
            });
        }
    }

    Ok(())
}

/// Serializes `params` and checks that one of two key-sets is present.
pub fn require_either_params<P: Serialize>(
    params: &P,
    first: &[&str],
    second: &[&str],
) -> Result<(), ValidationError> {
    let value = serde_json::to_value(params).map_err(|_| ValidationError::NotAnObject)?;
    require_either(&value, first, second)
}

/// Checks that every key of `first` or every key of `second` is present.
pub fn require_either(
    params: &Value,
    first: &[&str],
    second: &[&str],
) -> Result<(), ValidationError> {
    if !params.is_object() {
        return Err(ValidationError::NotAnObject);
    }

    let present = |keys: &[&str]| keys.iter().all(|key| lookup(params, key).is_some());

    if present(first) || present(second) {
        Ok(())
    } else {
        Err(ValidationError::MissingEither {
            first: first.iter().map(|k| (*k).to_string()).collect(),
            second: second.iter().map(|k| (*k).to_string()).collect(),
        })
    }
}

/// Resolves a dotted path such as `body.id` inside a JSON object.
///
/// Explicit `null` values resolve to `None`.
pub fn lookup<'a>(params: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(params, |current, segment| current.get(segment))
        .filter(|value| !value.is_null())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Coerces a caller-supplied page to a 1-based page number.
///
/// Absent, blank and numeric zero pages become `1`. Text is read up to the
/// first non-digit after optional leading whitespace, so `"3abc"` is page 3.
/// Text that does not start with a digit, or that reads as zero, is rejected.
pub fn parse_page(page: Option<&PageNumber>) -> Result<u64, ValidationError> {
    let text = match page {
        None | Some(PageNumber::Number(0)) => return Ok(1),
        Some(PageNumber::Number(n)) => return Ok(*n),
        Some(PageNumber::Text(text)) => text,
    };

    let trimmed = text.trim_start();
    if trimmed.is_empty() {
        return Ok(1);
    }

    let digits: String = trimmed.chars().take_while(char::is_ascii_digit).collect();
    match digits.parse::<u64>() {
        Ok(page) if page > 0 => Ok(page),
        _ => Err(ValidationError::InvalidPage {
            value: text.clone(),
        }),
    }
}
