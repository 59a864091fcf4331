//! Raw response types for the upstream store feeds.
//!
//! ## Observed shapes from the live feeds (captured 2025-07-30)
//!
//! ### Breaux Mart
//! An envelope object: `{"total": N, "items": [...]}`. Items carry explicit
//! `price` / `sale_price` dollar strings plus an optional numeric
//! `base_price` (e.g. `0.89`). String ids are long decimal digit runs
//! (`"3684500245963616441"`), kept as strings to avoid precision loss.
//! Validity dates are plain `YYYY-MM-DD` strings.
//!
//! ### Flyer feeds (Robert Fresh, Zuppardo's, Dorignac's)
//! A bare JSON array of flyer items with numeric ids and a `price` field
//! that is usually the empty string; the actual dollar amount is embedded
//! in the `name` text. Robert Fresh and Dorignac's embed it as a
//! `$`-prefixed substring (`"... Chuck Roast $5.99"`); Zuppardo's packs it
//! as a digit run ending in `999` interleaved with newline-separated name
//! fragments (`"RedSeedless\nGrapes\n...\n339999"`). Validity dates are
//! zoned timestamps (`"2025-07-30T00:00:00-04:00"`).

use serde::Deserialize;

/// Envelope for the Breaux Mart feed.
#[derive(Debug, Deserialize)]
pub struct BreauxMartFeed {
    /// Item count reported by the feed; informational only.
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub items: Vec<BreauxMartItem>,
}

/// One Breaux Mart sale item.
#[derive(Debug, Deserialize)]
pub struct BreauxMartItem {
    pub id: String,
    pub name: String,
    /// Unit descriptor (`"ea"`, `"lb"`, `"0.5 gal"`).
    #[serde(default)]
    pub size: String,
    /// List price as a dollar string (`"$5.49"`).
    #[serde(default)]
    pub price: String,
    /// Sale price as a dollar string. May equal `price`.
    #[serde(default)]
    pub sale_price: String,
    /// Numeric pre-sale price (`5.49`). Absent for items without one.
    #[serde(default)]
    pub base_price: Option<f64>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub display_start_date: Option<String>,
    #[serde(default)]
    pub display_finish_date: Option<String>,
}

/// One item from the flyer-style feeds (Robert Fresh, Zuppardo's,
/// Dorignac's). The three stores share this shape; only the price encoding
/// inside `name` differs.
#[derive(Debug, Deserialize)]
pub struct FlyerItem {
    /// Numeric item id; coerced to a string during normalization.
    pub id: i64,
    #[serde(default)]
    pub flyer_id: Option<i64>,
    pub name: String,
    /// Usually the empty string; the price lives in `name`.
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub valid_from: Option<String>,
    #[serde(default)]
    pub valid_to: Option<String>,
    #[serde(default)]
    pub cutout_image_url: Option<String>,
}
