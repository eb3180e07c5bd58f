// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Bridges between sequences and `serde_json` values.

use crate::sequence::Sequence;
use alloc::string::String;
use lazyseq_core::{Result, SequenceError};
use serde_json::{Map, Value};

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Sequence<(String, Value)> {
    /// Sequence over the members of a JSON object, as `(key, value)` pairs.
    ///
    /// # Errors
    ///
    /// [`SequenceError::TypeMismatch`] if `value` is not an object.
    pub fn from_json_object(value: &Value, sort_keys: bool) -> Result<Self> {
        let Value::Object(members) = value else {
            return Err(SequenceError::type_mismatch("object", kind(value)));
        };
        Ok(Self::from_map(
            members.iter().map(|(k, v)| (k.clone(), v.clone())),
            sort_keys,
        ))
    }

    /// Collect `(key, value)` pairs into a JSON object. Later keys overwrite
    /// earlier ones.
    pub fn to_object(&self) -> Value {
        Value::Object(self.reduce(Map::new(), |mut object, (key, value), _, _| {
            object.insert(key, value);
            object
        }))
    }
}

impl Sequence<Value> {
    /// Sequence over the items of a JSON array.
    ///
    /// # Errors
    ///
    /// [`SequenceError::TypeMismatch`] if `value` is not an array.
    pub fn from_json_array(value: &Value) -> Result<Self> {
        match value {
            Value::Array(items) => Ok(Self::from_slice(items)),
            other => Err(SequenceError::type_mismatch("array", kind(other))),
        }
    }
}
