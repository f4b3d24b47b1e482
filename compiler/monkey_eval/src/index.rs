//! Index expressions: `array[i]` and `hash[key]`.

use crate::errors::{index_not_supported, EvalResult};
use crate::hash::HashKey;
use crate::value::Value;

/// Evaluate `collection[index]`.
///
/// Out-of-range array positions (including negative ones) and missing hash
/// keys give `null`.
pub fn evaluate_index(collection: &Value, index: &Value) -> EvalResult {
    match (collection, index) {
        (Value::Array(items), Value::Integer(i)) => Ok(usize::try_from(*i)
            .ok()
            .and_then(|i| items.get(i))
            .cloned()
            .unwrap_or(Value::Null)),
        (Value::Hash(hash), key) => {
            let key = HashKey::from_value(key)?;
            Ok(hash.get(&key).cloned().unwrap_or(Value::Null))
        }
        _ => Err(index_not_supported(collection)),
    }
}
