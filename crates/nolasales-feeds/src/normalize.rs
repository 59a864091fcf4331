//! Dispatch from a store's format tag to its normalizer.

use serde_json::Value;

use nolasales_core::{StoreFormat, StoreSales};

use crate::error::FeedError;
use crate::formats;

/// Normalizes one store's raw feed payload by dispatching on its format
/// tag.
///
/// The match is exhaustive over the closed [`StoreFormat`] enumeration, so
/// adding a variant without a normalizer is a compile error. Tags outside
/// the enumeration never reach this function; they are rejected where
/// untrusted state is parsed.
///
/// # Errors
///
/// Returns [`FeedError::Deserialize`] when the payload does not match the
/// format's expected shape.
pub fn normalize_feed(
    format: StoreFormat,
    raw: Value,
    store_name: &str,
) -> Result<StoreSales, FeedError> {
    match format {
        StoreFormat::BreauxMart => formats::normalize_breaux_mart(raw, store_name),
        StoreFormat::RobertFresh => formats::normalize_robert_fresh(raw, store_name),
        StoreFormat::Zuppardos => formats::normalize_zuppardos(raw, store_name),
        StoreFormat::Dorignacs => formats::normalize_dorignacs(raw, store_name),
        // No distinct feed has been observed for these two; their flyers use
        // the Dorignac's shape, so they share its normalizer for now.
        StoreFormat::Rouses | StoreFormat::WinnDixie => {
            formats::normalize_dorignacs(raw, store_name)
        }
    }
}
