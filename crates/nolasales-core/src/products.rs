use serde::{Deserialize, Serialize};

/// One sale item, normalized from a store's raw feed.
///
/// Serialized field names are camelCase so state files written by earlier
/// versions of the aggregator import cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleProduct {
    /// Source item ID, coerced to a string (some feeds use numeric ids).
    pub id: String,
    /// Display name with any embedded pricing stripped.
    pub name: String,
    /// Free-text unit descriptor (`"lb"`, `"0.5 gal"`). Empty when the feed
    /// carries none.
    #[serde(default)]
    pub size: String,
    /// Display price as a dollar string (`"$3.99"`). Empty string when no
    /// price could be extracted, never absent, so rendering stays simple.
    #[serde(default)]
    pub price: String,
    /// Current sale price, same formatting rules as `price`.
    #[serde(default)]
    pub sale_price: String,
    /// Pre-sale price; only present when the feed carries a distinct numeric
    /// base price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<String>,
    pub store_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Start of the sale window, passed through from the feed unmodified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_to: Option<String>,
}

/// One store's current sale listing: the products in source order plus a
/// validity window approximated from the first product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSales {
    pub store_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_to: Option<String>,
    pub products: Vec<SaleProduct>,
}

impl StoreSales {
    /// Builds a listing from normalized products, reading the set-level
    /// validity window off the first product only. An empty product list
    /// leaves both ends of the window unset.
    #[must_use]
    pub fn from_products(store_name: &str, products: Vec<SaleProduct>) -> Self {
        let valid_from = products.first().and_then(|p| p.valid_from.clone());
        let valid_to = products.first().and_then(|p| p.valid_to.clone());
        Self {
            store_name: store_name.to_owned(),
            valid_from,
            valid_to,
            products,
        }
    }

    #[must_use]
    pub fn product_count(&self) -> usize {
        self.products.len()
    }
}
