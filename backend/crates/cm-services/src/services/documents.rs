use crate::{ServiceError, ServiceResult};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

pub(crate) fn encode<T: Serialize>(value: &T) -> ServiceResult<Value> {
    serde_json::to_value(value).map_err(|e| ServiceError::decode(e.to_string()))
}

pub(crate) fn decode<T: DeserializeOwned>(document: Value) -> ServiceResult<T> {
    serde_json::from_value(document).map_err(|e| ServiceError::decode(e.to_string()))
}

/// Top-level fields of a serialized patch, minus the ones left unset. A `null` in a
/// merge would delete the stored key.
pub(crate) fn present_fields<T: Serialize>(patch: &T) -> ServiceResult<Map<String, Value>> {
    match encode(patch)? {
        Value::Object(fields) => Ok(fields.into_iter().filter(|(_, v)| !v.is_null()).collect()),
        other => Err(ServiceError::decode(format!(
            "expected a JSON object, got {}",
            other
        ))),
    }
}
