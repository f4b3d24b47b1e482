//! Hash values and hash keys.

use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::errors::{unhashable_key, EvalError};
use crate::value::Value;

/// The hashable projection of a value.
///
/// Two keys are equal when their values are equal, regardless of which
/// allocation a string lives in.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum HashKey {
    Integer(i64),
    Boolean(bool),
    String(Rc<str>),
}

impl HashKey {
    /// Project `value` onto a key, or fail with
    /// `unusable as hash key: <TYPE>`.
    pub fn from_value(value: &Value) -> Result<Self, EvalError> {
        match value {
            Value::Integer(n) => Ok(HashKey::Integer(*n)),
            Value::Boolean(b) => Ok(HashKey::Boolean(*b)),
            Value::String(s) => Ok(HashKey::String(Rc::clone(s))),
            other => Err(unhashable_key(other)),
        }
    }
}

/// An insertion-ordered map from hashable values to values.
///
/// Entries keep the key as it was written so the hash can be rendered back.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HashValue {
    entries: Vec<(Value, Value)>,
    index: FxHashMap<HashKey, usize>,
}

impl HashValue {
    /// Insert or overwrite. An existing key keeps its original position.
    pub fn insert(&mut self, key: HashKey, key_value: Value, value: Value) {
        if let Some(&slot) = self.index.get(&key) {
            self.entries[slot].1 = value;
        } else {
            self.index.insert(key, self.entries.len());
            self.entries.push((key_value, value));
        }
    }

    pub fn get(&self, key: &HashKey) -> Option<&Value> {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }
}

impl fmt::Display for HashValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}:{value}")?;
        }
        f.write_str("}")
    }
}
