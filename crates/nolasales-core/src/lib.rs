//! Core domain types for the nolasales aggregator: the canonical product
//! schema, the closed store-format enumeration, store configuration, the
//! persisted application state, and environment-driven runtime config.

mod app_config;
mod products;
mod state;
mod stores;

pub use app_config::{build_app_config, load_app_config, AppConfig, ConfigError};
pub use products::{SaleProduct, StoreSales};
pub use state::AppState;
pub use stores::{default_store_configs, FormatParseError, StoreConfig, StoreFormat};
