use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::{FailureKind, FetchError};

/// HAL collection envelope: `{ "_embedded": { "items": [...] } }`.
#[derive(Debug, Deserialize)]
struct CollectionModel<T> {
    #[serde(rename = "_embedded")]
    embedded: Option<Embedded<T>>,
}

#[derive(Debug, Deserialize)]
struct Embedded<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

/// Decode a collection envelope. A blank body or a missing `_embedded`
/// section is an empty collection.
pub fn decode_collection<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>, FetchError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    let model: CollectionModel<T> = serde_json::from_slice(body)
        .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;
    Ok(model.embedded.map(|embedded| embedded.items).unwrap_or_default())
}
