//! Per-store normalizers for the upstream weekly-ad feeds.
//!
//! Each normalizer is a pure function from one store's raw payload to a
//! [`nolasales_core::StoreSales`]. Items missing optional fields never fail
//! normalization; the canonical record substitutes empty strings or omits
//! the field instead.

mod breaux_mart;
mod dorignacs;
mod robert_fresh;
mod zuppardos;

pub(crate) use breaux_mart::normalize_breaux_mart;
pub(crate) use dorignacs::normalize_dorignacs;
pub(crate) use robert_fresh::normalize_robert_fresh;
pub(crate) use zuppardos::normalize_zuppardos;
