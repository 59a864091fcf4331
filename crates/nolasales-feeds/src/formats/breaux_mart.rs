//! Breaux Mart: an `{total, items}` envelope with explicit price fields.

use serde_json::Value;

use nolasales_core::{SaleProduct, StoreSales};

use crate::error::FeedError;
use crate::types::{BreauxMartFeed, BreauxMartItem};

/// Normalizes the Breaux Mart envelope into a [`StoreSales`].
///
/// Price preference: the sale price field when non-empty, else the list
/// price. An original price is emitted only when the feed carries a numeric
/// `base_price`; there is no original==sale fallback.
///
/// # Errors
///
/// Returns [`FeedError::Deserialize`] when the payload is not the expected
/// envelope shape.
pub(crate) fn normalize_breaux_mart(raw: Value, store_name: &str) -> Result<StoreSales, FeedError> {
    let feed: BreauxMartFeed =
        serde_json::from_value(raw).map_err(|e| FeedError::Deserialize {
            context: format!("Breaux Mart feed for {store_name}"),
            source: e,
        })?;
    let products = feed
        .items
        .into_iter()
        .map(|item| normalize_item(item, store_name))
        .collect();
    Ok(StoreSales::from_products(store_name, products))
}

fn normalize_item(item: BreauxMartItem, store_name: &str) -> SaleProduct {
    let price = if item.sale_price.is_empty() {
        item.price.clone()
    } else {
        item.sale_price.clone()
    };
    let original_price = item.base_price.map(|base| format!("${base:.2}"));
    SaleProduct {
        id: item.id,
        name: item.name,
        size: item.size,
        price,
        sale_price: item.sale_price,
        original_price,
        store_name: store_name.to_owned(),
        image_url: item.cover_image_url,
        valid_from: item.display_start_date,
        valid_to: item.display_finish_date,
    }
}
