//! Price extraction from free-text name fields.
//!
//! Two encodings appear in the flyer feeds: a literal `$`-prefixed dollar
//! amount (`"... Chuck Roast $5.99"`) and Zuppardo's packed form, a digit
//! run ending in the literal sequence `999` meaning "whole-dollar part
//! followed by .99" (`"2999"` → `$2.99`). The packed pattern is ambiguous
//! for multi-digit amounts and for unrelated digit runs that happen to end
//! in `999`; that is a quirk of the source data and is preserved here
//! exactly, not corrected.

use std::sync::LazyLock;

use regex::Regex;

/// First `$`-prefixed decimal substring, commas allowed (`"$1,299.99"`).
static DOLLAR_PRICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$[\d,]+\.?\d*").expect("valid regex"));

/// Digit run immediately preceding a literal `999`.
static PACKED_PRICE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)999").expect("valid regex"));

/// Returns the first `$`-prefixed dollar amount embedded in `name`, if any.
pub(crate) fn extract_dollar_price(name: &str) -> Option<String> {
    DOLLAR_PRICE.find(name).map(|m| m.as_str().to_owned())
}

/// Removes the first embedded dollar amount from `name` and trims the
/// whitespace its removal leaves behind at the ends.
pub(crate) fn strip_dollar_price(name: &str) -> String {
    DOLLAR_PRICE.replace(name, "").trim().to_owned()
}

/// Decodes Zuppardo's packed price: the digits captured before the `999`
/// suffix are the whole-dollar amount, always paired with `.99` cents.
/// Returns `None` when no packed run is present (or the digit run is too
/// large to be a dollar amount).
pub(crate) fn extract_packed_price(name: &str) -> Option<String> {
    let caps = PACKED_PRICE.captures(name)?;
    let dollars: u64 = caps[1].parse().ok()?;
    Some(format!("${dollars}.99"))
}

/// Removes the first packed digit run from `name`, then collapses the
/// feed's embedded newlines into single spaces and trims the ends.
pub(crate) fn strip_packed_price(name: &str) -> String {
    PACKED_PRICE
        .replace(name, "")
        .replace('\n', " ")
        .trim()
        .to_owned()
}
