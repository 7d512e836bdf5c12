//! Field and key lookup
//!
//! Field lookup accepts a dotted path (`"owner.name"`) and resolves it one
//! segment at a time. Key lookup indexes records by string key and
//! sequences by integer position, counting from the end for negative
//! indices.

use crate::errors::{Result, RuntimeError};
use crate::value::Value;

impl Value {
    /// Resolve a possibly dotted field path
    pub fn get_attr(&self, path: &str) -> Result<Value> {
        let mut segments = path.split('.');
        let first = segments.next().unwrap_or(path);
        segments.try_fold(self.field(first)?, |current, name| current.field(name))
    }

    fn field(&self, name: &str) -> Result<Value> {
        let found = match self {
            Value::Record(fields) => fields.get(name).cloned(),
            Value::Object(object) => object.get_attr(name),
            _ => None,
        };

        found.ok_or_else(|| RuntimeError::MissingAttribute {
            type_name: self.type_name().to_string(),
            name: name.to_string(),
        })
    }

    /// Look up `key` in a record or sequence
    pub fn get_item(&self, key: &Value) -> Result<Value> {
        match self {
            Value::Object(object) => object.get_item(key).unwrap_or_else(|| {
                Err(RuntimeError::NotSubscriptable {
                    type_name: object.type_name().to_string(),
                })
            }),
            Value::Record(fields) => key
                .as_str()
                .and_then(|name| fields.get(name))
                .cloned()
                .ok_or_else(|| RuntimeError::MissingKey {
                    key: key.to_string(),
                }),
            Value::List(items) | Value::Tuple(items) => {
                let position = sequence_position(key, items.len())?;
                Ok(items[position].clone())
            }
            Value::Str(s) => {
                let chars: Vec<char> = s.chars().collect();
                let position = sequence_position(key, chars.len())?;
                Ok(Value::Str(chars[position].to_string()))
            }
            _ => Err(RuntimeError::NotSubscriptable {
                type_name: self.type_name().to_string(),
            }),
        }
    }
}

fn sequence_position(key: &Value, len: usize) -> Result<usize> {
    let index = key.as_index().ok_or_else(|| RuntimeError::UnsupportedOperation {
        op: "[]".to_string(),
        left: "sequence".to_string(),
        right: key.type_name().to_string(),
    })?;

    let resolved = if index < 0 {
        i64::try_from(len).ok().map(|n| n + index)
    } else {
        Some(index)
    };

    resolved
        .and_then(|position| usize::try_from(position).ok())
        .filter(|&position| position < len)
        .ok_or(RuntimeError::IndexOutOfRange { index, len })
}
