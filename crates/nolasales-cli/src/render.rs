//! Plain-text rendering for the browse view.

use chrono::{DateTime, NaiveDate};

use nolasales_core::{AppState, SaleProduct, StoreSales};

/// Prints the filtered listings grouped by store, with the flyer-style
/// validity window and a closing summary line.
pub(crate) fn print_listings(state: &AppState, listings: &[StoreSales], term: &str) {
    if state.sales.is_empty() {
        println!("No store data available. Configure endpoints with `nolasales admin set-url` and run `nolasales admin fetch-all`.");
        return;
    }
    if listings.is_empty() {
        println!("No products found matching \"{}\"", term.trim());
        return;
    }

    for store in listings {
        let window = format_date_range(store.valid_from.as_deref(), store.valid_to.as_deref());
        if window.is_empty() {
            println!("{} — {} items on sale", store.store_name, store.products.len());
        } else {
            println!(
                "{} ({window}) — {} items on sale",
                store.store_name,
                store.products.len()
            );
        }
        for product in &store.products {
            println!("  {}", product_line(product));
        }
        println!();
    }

    let count = listings.len();
    let noun = if count == 1 { "store" } else { "stores" };
    if term.trim().is_empty() {
        println!("Showing deals from {count} {noun}");
    } else {
        println!("Showing deals from {count} {noun} matching \"{}\"", term.trim());
    }
    if let Some(at) = state.last_global_update {
        println!("Last updated: {}", at.format("%Y-%m-%d %H:%M UTC"));
    }
}

fn product_line(product: &SaleProduct) -> String {
    let mut line = product.name.clone();
    if !product.size.is_empty() {
        line.push_str(&format!(" ({})", product.size));
    }
    let sale = format_price(&product.sale_price);
    if !sale.is_empty() {
        line.push_str(&format!(" — {sale}"));
    }
    if let Some(original) = &product.original_price {
        // Struck-through in the original UI; only shown when it differs.
        if *original != product.sale_price {
            line.push_str(&format!(" (was {})", format_price(original)));
        }
    }
    line
}

/// Prefixes a bare amount with `$`; empty prices stay empty.
pub(crate) fn format_price(price: &str) -> String {
    if price.is_empty() || price.starts_with('$') {
        price.to_owned()
    } else {
        format!("${price}")
    }
}

/// Renders a validity window as `Jul 30 - Aug 5`, or `From …` / `Until …`
/// when one end is missing.
pub(crate) fn format_date_range(from: Option<&str>, to: Option<&str>) -> String {
    match (from, to) {
        (Some(from), Some(to)) => format!("{} - {}", format_day(from), format_day(to)),
        (Some(from), None) => format!("From {}", format_day(from)),
        (None, Some(to)) => format!("Until {}", format_day(to)),
        (None, None) => String::new(),
    }
}

/// Short month-day form of a feed date; unparseable strings pass through.
fn format_day(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%b %-d").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%b %-d").to_string();
    }
    raw.to_owned()
}
