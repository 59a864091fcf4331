//! Zuppardo's: a bare flyer-item list with the price packed into the name
//! as a digit run ending in `999`.

use serde_json::Value;

use nolasales_core::{SaleProduct, StoreSales};

use crate::error::FeedError;
use crate::parse::{extract_packed_price, strip_packed_price};
use crate::types::FlyerItem;

/// Normalizes the Zuppardo's flyer list into a [`StoreSales`].
///
/// The digits preceding a literal `999` in the name decode to
/// `$<digits>.99`; the digit run is stripped from the name and the feed's
/// embedded newlines collapse to single spaces. When no packed run exists
/// the raw price field is used, which is usually empty.
///
/// # Errors
///
/// Returns [`FeedError::Deserialize`] when the payload is not a flyer-item
/// array.
pub(crate) fn normalize_zuppardos(raw: Value, store_name: &str) -> Result<StoreSales, FeedError> {
    let items: Vec<FlyerItem> =
        serde_json::from_value(raw).map_err(|e| FeedError::Deserialize {
            context: format!("Zuppardo's feed for {store_name}"),
            source: e,
        })?;
    let products = items
        .into_iter()
        .map(|item| normalize_item(item, store_name))
        .collect();
    Ok(StoreSales::from_products(store_name, products))
}

fn normalize_item(item: FlyerItem, store_name: &str) -> SaleProduct {
    let price = extract_packed_price(&item.name).unwrap_or_else(|| item.price.clone());
    let name = strip_packed_price(&item.name);
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
