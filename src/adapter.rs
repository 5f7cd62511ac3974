//! Conversion between an external list value and the native `i64` buffer the sort works on.
//!
//! External values are [`serde_json::Value`]s. Only arrays whose elements are all integers
//! representable as `i64` are accepted; anything else is rejected before the value is modified.

use serde_json::{Number, Value};
use tracing::debug;

use crate::error::{Error, ValidationError};

/// Sorts the list held by `value` in place and returns the same value.
///
/// ```
/// let mut list = serde_json::json!([3, -1, 3, 0, -1]);
/// wikisort::wikisort(&mut list).unwrap();
/// assert_eq!(list, serde_json::json!([-1, -1, 0, 3, 3]));
/// ```
pub fn wikisort(value: &mut Value) -> Result<&mut Value, Error> {
    let mut seq = read_sequence(value).inspect_err(|err| {
        debug!(%err, "rejected input");
    })?;

    crate::sort(&mut seq)?;
    write_sequence(value, &seq)?;

    Ok(value)
}

/// Copies the integers of an array value into a native buffer.
pub fn read_sequence(value: &Value) -> Result<Vec<i64>, ValidationError> {
    let items = value.as_array().ok_or(ValidationError::NotAList)?;
    debug!(len = items.len(), "reading sequence");

    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Number(n) => read_int(index, n),
            _ => Err(ValidationError::NotAnInteger { index }),
        })
        .collect()
}

/// Writes `seq` back into the array held by `value`, element for element.
///
/// The array itself is kept, only its elements are replaced. If `seq` and the array differ in
/// length nothing is written.
pub fn write_sequence(value: &mut Value, seq: &[i64]) -> Result<(), ValidationError> {
    let items = value.as_array_mut().ok_or(ValidationError::NotAList)?;
    if items.len() != seq.len() {
        return Err(ValidationError::LengthMismatch {
            expected: items.len(),
            got: seq.len(),
        });
    }

    for (item, &n) in items.iter_mut().zip(seq) {
        *item = Value::from(n);
    }

    Ok(())
}

fn read_int(index: usize, n: &Number) -> Result<i64, ValidationError> {
    if let Some(n) = n.as_i64() {
        Ok(n)
    } else if n.is_u64() {
        Err(ValidationError::OutOfRange { index })
    } else {
        Err(ValidationError::NotAnInteger { index })
    }
}
