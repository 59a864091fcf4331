//! Fetch orchestration: refresh one store or every eligible store.
//!
//! Bulk refresh is deliberately sequential with a fixed pause between
//! requests: cooperative self-throttling toward small grocery endpoints,
//! not a concurrency scheduler. Per-store failures are reported and the
//! remaining sequence continues.

use std::time::Duration;

use chrono::Utc;

use nolasales_core::{AppState, StoreConfig};
use nolasales_feeds::{normalize_feed, FeedClient, FeedError};
use nolasales_store::StateStore;

pub(crate) struct RefreshSummary {
    pub refreshed: usize,
    pub failed: usize,
}

/// Fetches, normalizes, commits, and persists one store's feed.
///
/// Fails fast when the store is unknown or has no endpoint configured.
/// On success the store's prior listing is replaced (never appended to),
/// both `lastUpdated` and `lastGlobalUpdate` are stamped, and the state is
/// saved through the gateway.
pub(crate) async fn refresh_store(
    client: &FeedClient,
    gateway: &StateStore,
    state: &mut AppState,
    store_id: &str,
) -> anyhow::Result<usize> {
    let store = state
        .store(store_id)
        .cloned()
        .ok_or_else(|| FeedError::UnknownStore {
            id: store_id.to_owned(),
        })?;
    if store.api_url.is_empty() {
        return Err(FeedError::MissingApiUrl { store: store.name }.into());
    }

    tracing::info!(store = %store.name, url = %store.api_url, "fetching feed");
    let raw = client.fetch_feed(&store.api_url).await?;
    let sales = normalize_feed(store.format, raw, &store.name)?;
    let count = sales.product_count();

    state.apply_refresh(&store.id, sales, Utc::now());
    gateway.save(state)?;
    tracing::info!(store = %store.name, products = count, "feed refreshed");
    Ok(count)
}

/// Sequentially refreshes every active store with a configured endpoint,
/// pausing `delay` between requests. One store's failure is reported and
/// does not abort the rest; the call only errors when every store failed.
pub(crate) async fn refresh_all(
    client: &FeedClient,
    gateway: &StateStore,
    state: &mut AppState,
    delay: Duration,
) -> anyhow::Result<RefreshSummary> {
    let targets: Vec<StoreConfig> = state.fetchable_stores();
    if targets.is_empty() {
        println!("no active stores with a configured endpoint; nothing to refresh");
        return Ok(RefreshSummary {
            refreshed: 0,
            failed: 0,
        });
    }

    let mut refreshed = 0usize;
    let mut failed = 0usize;
    for (idx, store) in targets.iter().enumerate() {
        println!("Fetching data for {}...", store.name);
        match refresh_store(client, gateway, state, &store.id).await {
            Ok(count) => {
                refreshed += 1;
                println!("Updated {} with {count} products", store.name);
            }
            Err(e) => {
                failed += 1;
                tracing::error!(store = %store.name, error = %e, "feed refresh failed");
                println!("Error fetching data for {}: {e:#}", store.name);
            }
        }
        if idx + 1 < targets.len() {
            tokio::time::sleep(delay).await;
        }
    }

    if failed > 0 {
        tracing::warn!(failed, total = targets.len(), "some stores failed during refresh");
    }
    if failed == targets.len() {
        anyhow::bail!("all {failed} stores failed to refresh");
    }
    Ok(RefreshSummary { refreshed, failed })
}

#[cfg(test)]
#[path = "refresh_test.rs"]
mod tests;
