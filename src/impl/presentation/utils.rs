use num_format::{Locale, ToFormattedString as _};

pub(crate) const CURRENCY_PREFIX: &str = "Rs";

/// Format a rupee amount with thousands separators. Whole amounts get no
/// decimals ("Rs 1,200"), anything else is shown to the paisa ("Rs 12.50").
///
/// Uses the en locale grouping regardless of the active language.
pub(crate) fn format_amount(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as i64;
    let sign = if amount < 0.0 && cents != 0 { "-" } else { "" };
    let whole = (cents / 100).to_formatted_string(&Locale::en);
    match cents % 100 {
        0 => format!("{CURRENCY_PREFIX} {sign}{whole}"),
        fraction => format!("{CURRENCY_PREFIX} {sign}{whole}.{fraction:02}"),
    }
}

/// Quantities as typed: no trailing zeros ("5", "2.5").
pub(crate) fn format_quantity(quantity: f64) -> String {
    quantity.to_string()
}

/// "onion" -> "Onion". Item names are free text, so only the first letter
/// is touched.
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
