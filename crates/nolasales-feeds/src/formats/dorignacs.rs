//! Dorignac's: a bare flyer-item list using the same embedded-dollar price
//! encoding as Robert Fresh. Rouses and Winn-Dixie dispatch here as well
//! until a distinct feed for either is observed.

use serde_json::Value;

use nolasales_core::{SaleProduct, StoreSales};

use crate::error::FeedError;
use crate::parse::{extract_dollar_price, strip_dollar_price};
use crate::types::FlyerItem;

/// Normalizes the Dorignac's flyer list into a [`StoreSales`].
///
/// # Errors
///
/// Returns [`FeedError::Deserialize`] when the payload is not a flyer-item
/// array.
pub(crate) fn normalize_dorignacs(raw: Value, store_name: &str) -> Result<StoreSales, FeedError> {
    let items: Vec<FlyerItem> =
        serde_json::from_value(raw).map_err(|e| FeedError::Deserialize {
            context: format!("Dorignac's feed for {store_name}"),
            source: e,
        })?;
    let products = items
        .into_iter()
        .map(|item| normalize_item(item, store_name))
        .collect();
    Ok(StoreSales::from_products(store_name, products))
}

fn normalize_item(item: FlyerItem, store_name: &str) -> SaleProduct {
    let price = extract_dollar_price(&item.name).unwrap_or_else(|| item.price.clone());
    let name = strip_dollar_price(&item.name);
    SaleProduct {
        id: item.id.to_string(),
        name,
        size: String::new(),
        price: price.clone(),
        sale_price: price,
        original_price: None,
        store_name: store_name.to_owned(),
        image_url: item.cutout_image_url,
        valid_from: item.valid_from,
        valid_to: item.valid_to,
    }
}
