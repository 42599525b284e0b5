use rust_decimal::{Decimal, RoundingStrategy};

/// Round to whole kopecks/cents, halves away from zero.
pub(crate) fn round_money(val: Decimal) -> Decimal {
    val.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Format a hryvnia amount with thousand separators and 2 decimal places.
/// e.g. `-1234567.891` → `"-1,234,567.89 UAH"`
pub(crate) fn format_amount(val: Decimal) -> String {
    let rounded = round_money(val);
    let formatted = format!("{:.2}", rounded.abs());
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    if rounded < Decimal::ZERO {
        format!("-{with_commas}.{dec_part} UAH")
    } else {
        format!("{with_commas}.{dec_part} UAH")
    }
}

/// Percentage with two decimals, e.g. `70.00%`.
pub(crate) fn format_percent(val: Decimal) -> String {
    format!("{:.2}%", round_money(val))
}

/// Parse a user-entered amount. Accepts `.` as the decimal separator and
/// ignores surrounding whitespace; anything else is rejected.
pub(crate) fn parse_amount(input: &str) -> Option<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<Decimal>().ok()
}

/// `value` as an 8-digit binary string, e.g. `1` → `"00000001"`.
pub(crate) fn binary8(value: u8) -> String {
    format!("{value:08b}")
}

/// Blank input becomes `fallback`, anything else is kept as typed.
pub(crate) fn or_placeholder(input: &str, fallback: &str) -> String {
    if input.trim().is_empty() {
        fallback.to_string()
    } else {
        input.to_string()
    }
}
