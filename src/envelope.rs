//! Response envelope decoding.
//!
//! Every 2xx body falls into one of three shapes: a bare resource, a bare
//! array of resources, or a `{page, per_page, pages, items}` page. These
//! helpers decode each shape and turn malformed payloads into
//! [`CivoError::Decode`] values carrying a bounded prefix of the body.

use crate::types::{CivoError, CivoResult, PaginatedResponse};
use serde::de::DeserializeOwned;

/// Decode a single resource (or a `SimpleResponse`).
pub fn decode_item<T: DeserializeOwned>(body: &[u8]) -> CivoResult<T> {
    serde_json::from_slice(body)
        .map_err(|e| CivoError::decode_error(e.to_string(), body, Some(e)))
}

/// Decode a bare JSON array of resources.
///
/// A `null` body decodes to an empty vec, so callers always receive a valid
/// sequence.
pub fn decode_list<T: DeserializeOwned>(body: &[u8]) -> CivoResult<Vec<T>> {
    let items: Option<Vec<T>> = serde_json::from_slice(body)
        .map_err(|e| CivoError::decode_error(e.to_string(), body, Some(e)))?;
    Ok(items.unwrap_or_default())
}

/// Decode one page of a paginated collection.
pub fn decode_paginated<T: DeserializeOwned>(body: &[u8]) -> CivoResult<PaginatedResponse<T>> {
    serde_json::from_slice(body)
        .map_err(|e| CivoError::decode_error(e.to_string(), body, Some(e)))
}
