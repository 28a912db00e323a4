//! Lenient number parsing for prices and path ids.
//!
//! Catalog prices are stored as free-form strings (e.g. `"8.00"`, `"12 zł"`)
//! and ids arrive as raw path segments. Both are read the way a browser's
//! `parseFloat` / `parseInt` would: leading whitespace is skipped and the
//! longest numeric prefix is taken. Anything after the prefix is ignored.

use super::id::PizzaId;

/// Parse the leading decimal number of a price string.
///
/// Returns `None` when the string has no numeric prefix at all. Callers
/// serialize `None` as JSON `null`.
///
/// ```rust
/// # use pizzeria_core::parse_price;
/// assert_eq!(parse_price("8.00"), Some(8.0));
/// assert_eq!(parse_price("  12.5 PLN"), Some(12.5));
/// assert_eq!(parse_price("free"), None);
/// ```
#[must_use]
pub fn parse_price(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    if unsigned.starts_with("Infinity") {
        return Some(if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }
    s.get(..numeric_prefix_len(s))?.parse::<f64>().ok()
}

/// Length in bytes of the longest prefix matching
/// `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_digits = count_digits(bytes, pos);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = count_digits(bytes, pos + 1);
        if int_digits > 0 || frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp_pos = pos + 1;
        if matches!(bytes.get(exp_pos), Some(b'+' | b'-')) {
            exp_pos += 1;
        }
        let exp_digits = count_digits(bytes, exp_pos);
        if exp_digits > 0 {
            pos = exp_pos + exp_digits;
        }
    }

    pos
}

/// Parse the leading integer of a path segment as a pizza id.
///
/// Accepts an optional sign and a `0x` hex prefix; `"1abc"` and `"1.5"`
/// both read as id 1. Returns `None` when there are no digits or the value
/// does not fit an id, neither of which can match a stored pizza.
///
/// ```rust
/// # use pizzeria_core::{PizzaId, parse_pizza_id};
/// assert_eq!(parse_pizza_id("3"), Some(PizzaId::new(3)));
/// assert_eq!(parse_pizza_id("1abc"), Some(PizzaId::new(1)));
/// assert_eq!(parse_pizza_id("abc"), None);
/// ```
#[must_use]
pub fn parse_pizza_id(raw: &str) -> Option<PizzaId> {
    let s = raw.trim_start();
    let (negative, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let (radix, digits) = match unsigned.get(..2) {
        Some("0x" | "0X") => (16, unsigned.get(2..).unwrap_or_default()),
        _ => (10, unsigned),
    };

    let len = digits
        .bytes()
        .take_while(|b| char::from(*b).is_digit(radix))
        .count();
    let magnitude = i64::from_str_radix(digits.get(..len)?, radix).ok()?;
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).ok().map(PizzaId::new)
}

fn count_digits(bytes: &[u8], start: usize) -> usize {
    bytes
        .get(start..)
        .map_or(0, |tail| tail.iter().take_while(|b| b.is_ascii_digit()).count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_decimal() {
        assert_eq!(parse_price("8.00"), Some(8.0));
        assert_eq!(parse_price("24"), Some(24.0));
        assert_eq!(parse_price(".5"), Some(0.5));
        assert_eq!(parse_price("3."), Some(3.0));
    }

    #[test]
    fn test_leading_whitespace_and_trailing_text() {
        assert_eq!(parse_price("   19.99"), Some(19.99));
        assert_eq!(parse_price("32.50 zł"), Some(32.5));
        assert_eq!(parse_price("10,50"), Some(10.0));
        assert_eq!(parse_price("1.2.3"), Some(1.2));
    }

    #[test]
    fn test_signs_and_exponent() {
        assert_eq!(parse_price("-4"), Some(-4.0));
        assert_eq!(parse_price("+7.25"), Some(7.25));
        assert_eq!(parse_price("1e2"), Some(100.0));
        assert_eq!(parse_price("2E-1 each"), Some(0.2));
        // Dangling exponent marker is not part of the number
        assert_eq!(parse_price("5e"), Some(5.0));
        assert_eq!(parse_price("5e+"), Some(5.0));
    }

    #[test]
    fn test_no_numeric_prefix() {
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("   "), None);
        assert_eq!(parse_price("PLN 20"), None);
        assert_eq!(parse_price("."), None);
        assert_eq!(parse_price("-"), None);
        assert_eq!(parse_price("-.e5"), None);
    }

    #[test]
    fn test_pizza_id_takes_leading_digits() {
        assert_eq!(parse_pizza_id("7"), Some(PizzaId::new(7)));
        assert_eq!(parse_pizza_id("1abc"), Some(PizzaId::new(1)));
        assert_eq!(parse_pizza_id("1.5"), Some(PizzaId::new(1)));
        assert_eq!(parse_pizza_id("  2"), Some(PizzaId::new(2)));
        assert_eq!(parse_pizza_id("12 "), Some(PizzaId::new(12)));
    }

    #[test]
    fn test_pizza_id_signs_and_hex() {
        assert_eq!(parse_pizza_id("-3"), Some(PizzaId::new(-3)));
        assert_eq!(parse_pizza_id("+4"), Some(PizzaId::new(4)));
        assert_eq!(parse_pizza_id("0x1A"), Some(PizzaId::new(26)));
        assert_eq!(parse_pizza_id("0x"), None);
    }

    #[test]
    fn test_pizza_id_without_digits() {
        assert_eq!(parse_pizza_id("abc"), None);
        assert_eq!(parse_pizza_id(""), None);
        assert_eq!(parse_pizza_id("-"), None);
        assert_eq!(parse_pizza_id(".5"), None);
        assert_eq!(parse_pizza_id("99999999999"), None);
    }

    #[test]
    fn test_infinity() {
        assert_eq!(parse_price("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_price("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_price("Infinite"), None);
    }
}
