use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::products::StoreSales;
use crate::stores::{default_store_configs, StoreConfig};

/// The single persisted aggregate: every store's configuration plus its
/// latest normalized listing.
///
/// There is at most one [`StoreSales`] per store name; a refetch replaces
/// that entry wholesale rather than merging into it. The struct is passed
/// explicitly to every operation that reads or mutates it; there is no
/// ambient global state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub stores: Vec<StoreConfig>,
    #[serde(rename = "storeData", default)]
    pub sales: Vec<StoreSales>,
    /// Stamped whenever any store's listing changes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_global_update: Option<DateTime<Utc>>,
}

impl AppState {
    /// The first-run state: the fixed six-store seed and no listings.
    #[must_use]
    pub fn with_default_stores() -> Self {
        Self {
            stores: default_store_configs(),
            sales: Vec::new(),
            last_global_update: None,
        }
    }

    #[must_use]
    pub fn store(&self, id: &str) -> Option<&StoreConfig> {
        self.stores.iter().find(|s| s.id == id)
    }

    pub fn store_mut(&mut self, id: &str) -> Option<&mut StoreConfig> {
        self.stores.iter_mut().find(|s| s.id == id)
    }

    /// Stores eligible for bulk refresh: active with a configured endpoint.
    #[must_use]
    pub fn fetchable_stores(&self) -> Vec<StoreConfig> {
        self.stores
            .iter()
            .filter(|s| s.is_fetchable())
            .cloned()
            .collect()
    }

    /// Commits one store's freshly normalized listing: replaces any prior
    /// listing under the same store name, stamps the store config's
    /// `lastUpdated`, and stamps the aggregate's `lastGlobalUpdate`.
    pub fn apply_refresh(&mut self, store_id: &str, sales: StoreSales, now: DateTime<Utc>) {
        self.sales.retain(|s| s.store_name != sales.store_name);
        self.sales.push(sales);
        if let Some(config) = self.store_mut(store_id) {
            config.last_updated = Some(now);
        }
        self.last_global_update = Some(now);
    }

    /// Filters listings by a case-insensitive product-name substring.
    ///
    /// A blank (or whitespace-only) term returns every listing unchanged.
    /// Stores with zero matching products are omitted entirely.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<StoreSales> {
        let term = term.trim();
        if term.is_empty() {
            return self.sales.clone();
        }
        let needle = term.to_lowercase();
        self.sales
            .iter()
            .filter_map(|store| {
                let products: Vec<_> = store
                    .products
                    .iter()
                    .filter(|p| p.name.to_lowercase().contains(&needle))
                    .cloned()
                    .collect();
                if products.is_empty() {
                    None
                } else {
                    Some(StoreSales {
                        store_name: store.store_name.clone(),
                        valid_from: store.valid_from.clone(),
                        valid_to: store.valid_to.clone(),
                        products,
                    })
                }
            })
            .collect()
    }

    #[must_use]
    pub fn active_store_count(&self) -> usize {
        self.stores.iter().filter(|s| s.is_active).count()
    }

    #[must_use]
    pub fn stores_with_data(&self) -> usize {
        self.sales.len()
    }

    #[must_use]
    pub fn total_products(&self) -> usize {
        self.sales.iter().map(|s| s.products.len()).sum()
    }
}
