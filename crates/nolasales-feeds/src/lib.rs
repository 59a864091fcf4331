//! Fetching and normalization of upstream weekly-ad feeds.
//!
//! Each supported store publishes its sale listing as JSON in its own shape;
//! the per-store normalizers map those shapes onto the canonical
//! [`nolasales_core::StoreSales`], and [`normalize_feed`] dispatches on the
//! store's [`nolasales_core::StoreFormat`] tag. [`FeedClient`] does the
//! single-shot HTTP GET; there is no retry or pagination handling because
//! each feed is one small document.

mod client;
mod error;
mod formats;
mod normalize;
mod parse;
pub mod types;

pub use client::FeedClient;
pub use error::FeedError;
pub use normalize::normalize_feed;
