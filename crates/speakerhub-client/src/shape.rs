//! Response shape normalization for the speaker collection endpoint.
//!
//! Deployments of the host platform have returned the collection as a bare
//! array, as `{"results": [...]}` and as `{"items": [...]}`. Exactly these
//! three shapes are recognized; anything else is a malformed-response
//! fault rather than a silent empty list.

use serde_json::Value;

use speakerhub_core::error::{AppError, ErrorKind};
use speakerhub_core::result::AppResult;
use speakerhub_entity::Speaker;

/// Normalize a collection response into a list of speaker records.
pub fn normalize_collection(value: Value) -> AppResult<Vec<Speaker>> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("results").or_else(|| map.remove("items")) {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(AppError::malformed(
                    "Unexpected speaker collection response shape",
                ));
            }
        },
        _ => {
            return Err(AppError::malformed(
                "Unexpected speaker collection response shape",
            ));
        }
    };

    items
        .into_iter()
        .map(|item| {
            serde_json::from_value::<Speaker>(item)
                .map(Speaker::normalized)
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Malformed, "Malformed speaker record", e)
                })
        })
        .collect()
}
