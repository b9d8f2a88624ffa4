//! Mapping a whole document through a single-entity normalizer.
//!
//! The `included` index is built once per document and threaded to every
//! call. Output order always matches the order of `data`.

use drupal_client::{Document, PrimaryData, Resource};
use serde_json::Value;

use crate::resolver::Included;

/// Log why `data` is not a collection. A list that failed to decode is a warning.
fn report_non_collection(document: &Document) {
    match &document.data {
        PrimaryData::Malformed(Value::Array(items)) => {
            tracing::warn!(
                items = items.len(),
                "Document data is a list that did not decode as resources"
            );
        }
        _ => tracing::debug!("Document data is not a collection, nothing to normalize"),
    }
}

/// Normalize every primary resource of a collection document.
///
/// Returns an empty list when `data` is not a list (a single resource, a
/// missing member or anything malformed).
pub fn normalize_collection<T, F>(document: &Document, normalize_one: F) -> Vec<T>
where
    F: Fn(&Resource, &Included<'_>) -> T,
{
    let Some(resources) = document.resources() else {
        report_non_collection(document);
        return Vec::new();
    };

    let included = Included::new(&document.included);
    resources
        .iter()
        .map(|resource| normalize_one(resource, &included))
        .collect()
}

/// Like [`normalize_collection`] for normalizers that can fail.
///
/// Stops at the first failure; there is no partial result.
pub fn try_normalize_collection<T, E, F>(document: &Document, normalize_one: F) -> Result<Vec<T>, E>
where
    F: Fn(&Resource, &Included<'_>) -> Result<T, E>,
{
    let Some(resources) = document.resources() else {
        report_non_collection(document);
        return Ok(Vec::new());
    };

    let included = Included::new(&document.included);
    resources
        .iter()
        .map(|resource| normalize_one(resource, &included))
        .collect()
}

/// Normalize the first primary resource.
///
/// Accepts both single-resource documents and collections (element 0).
/// Returns `None` for an empty collection or malformed `data`.
pub fn normalize_first<T, F>(document: &Document, normalize_one: F) -> Option<T>
where
    F: Fn(&Resource, &Included<'_>) -> T,
{
    let resource = match &document.data {
        PrimaryData::One(resource) => resource.as_ref(),
        PrimaryData::Many(resources) => resources.first()?,
        PrimaryData::Malformed(_) => return None,
    };

    let included = Included::new(&document.included);
    Some(normalize_one(resource, &included))
}
