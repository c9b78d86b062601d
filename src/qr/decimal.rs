use rust_decimal::Decimal;

/// Parse `[+-]digits[.digits]` into an exact decimal, keeping its scale.
///
/// Either side of the point may be empty, but not both. Whitespace,
/// exponents, underscores and any other notation are rejected, as are
/// values `Decimal` cannot hold without rounding.
pub(crate) fn parse_decimal(text: &str) -> Option<Decimal> {
    let body = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !int_part.bytes().chain(frac_part.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    Decimal::from_str_exact(text).ok()
}
