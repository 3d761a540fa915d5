// 💱 Currency - Rupee formatting and fixed-rate conversion
//
// Amounts are stored as plain f64 rupees. Display uses the Indian digit
// grouping: last three digits together, then pairs of two.
//
//   1234567.5 → "₹12,34,568"      (0 decimals)
//   -1500.25  → "₹-1,500.25"      (2 decimals)

/// Currency glyph prefixed to every formatted amount
pub const CURRENCY_SYMBOL: &str = "₹";

/// USD → INR multiplier used to build the demo snapshot
pub const DEFAULT_RATE: f64 = 83.0;

// ============================================================================
// CONVERSION
// ============================================================================

/// Multiply an amount by an exchange rate (no rounding)
pub fn convert(amount: f64, rate: f64) -> f64 {
    amount * rate
}

/// Convert a USD amount with the default rate
pub fn convert_usd(amount: f64) -> f64 {
    convert(amount, DEFAULT_RATE)
}

// ============================================================================
// FORMATTING
// ============================================================================

/// Format an amount with the currency glyph, e.g. `₹4,02,585`
pub fn format_localized(amount: f64, decimals: usize) -> String {
    format!("{}{}", CURRENCY_SYMBOL, format_grouped(amount, decimals))
}

/// Shorthand for `format_localized(amount, 0)`
pub fn format_inr(amount: f64) -> String {
    format_localized(amount, 0)
}

/// Format an amount with Indian digit grouping, without the glyph
///
/// The sign is factored out before grouping, so
/// `format_grouped(-x, d) == "-" + format_grouped(x, d)` for x > 0.
/// Non-finite input is rendered as text ("NaN", "Infinity").
pub fn format_grouped(amount: f64, decimals: usize) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }

    let is_negative = amount < 0.0;
    let sign = if is_negative { "-" } else { "" };
    let abs_amount = amount.abs();

    if abs_amount.is_infinite() {
        return format!("{}Infinity", sign);
    }

    let fixed = fixed_point(abs_amount, decimals);
    let (integer_part, decimal_part) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut formatted = group_indian(integer_part);
    if let Some(fraction) = decimal_part {
        formatted.push('.');
        formatted.push_str(fraction);
    }

    format!("{}{}", sign, formatted)
}

/// Group a string of digits as `xx,xx,xxx` scanning right to left
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (mut remaining, last_three) = digits.split_at(digits.len() - 3);
    let mut groups = vec![last_three];

    while !remaining.is_empty() {
        let (rest, pair) = remaining.split_at(remaining.len().saturating_sub(2));
        groups.push(pair);
        remaining = rest;
    }

    groups.reverse();
    groups.join(",")
}

/// Fixed-point text for percentages and ratios
///
/// Mirrors the amount formatter for non-finite values so a zero
/// denominator shows up as "NaN"/"Infinity" instead of panicking.
pub fn to_fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-Infinity".to_string() } else { "Infinity".to_string() };
    }
    // abs() drops the sign of -0.0 as well
    let digits = fixed_point(value.abs(), decimals);
    if value < 0.0 {
        format!("-{}", digits)
    } else {
        digits
    }
}

/// Digits printed past the requested precision to spot an exact tie
const TIE_DIGITS: usize = 60;

/// Fixed-point digits of a non-negative finite value, ties rounded up
///
/// `format!` rounds exact ties to even (2.5 → "2"); on-screen amounts
/// round them up (2.5 → "3"). A tie is judged on the exact decimal
/// expansion of the stored value, so 0.15 (stored as 0.1499…) still
/// rounds down to "0.1".
fn fixed_point(abs_value: f64, decimals: usize) -> String {
    let expanded = format!("{:.*}", decimals + TIE_DIGITS, abs_value);
    let (head, tail) = expanded.split_at(expanded.len() - TIE_DIGITS);

    let is_tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');
    if is_tie {
        return increment_last_digit(head.trim_end_matches('.'));
    }
    format!("{:.*}", decimals, abs_value)
}

/// Add one unit in the last place of a decimal string, carrying left
fn increment_last_digit(digits: &str) -> String {
    let mut chars: Vec<char> = digits.chars().collect();
    let mut carry = true;

    for c in chars.iter_mut().rev() {
        match *c {
            '.' => continue,
            '9' => *c = '0',
            d => {
                *c = char::from(d as u8 + 1);
                carry = false;
                break;
            }
        }
    }

    let mut result: String = chars.into_iter().collect();
    if carry {
        result.insert(0, '1');
    }
    result
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_integers_are_not_grouped() {
        assert_eq!(format_localized(0.0, 0), "₹0");
        assert_eq!(format_localized(7.0, 0), "₹7");
        assert_eq!(format_localized(42.0, 0), "₹42");
        assert_eq!(format_localized(999.0, 0), "₹999");
        assert_eq!(format_localized(999.25, 2), "₹999.25");
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_grouped(1000.0, 0), "1,000");
        assert_eq!(format_grouped(12345.0, 0), "12,345");
        assert_eq!(format_grouped(123456.0, 0), "1,23,456");
        assert_eq!(format_grouped(1234567.0, 0), "12,34,567");
        assert_eq!(format_grouped(123456789.0, 0), "12,34,56,789");
    }

    #[test]
    fn test_fraction_is_never_grouped() {
        assert_eq!(format_grouped(1234567.125, 3), "12,34,567.125");
        assert_eq!(format_grouped(0.5, 2), "0.50");
    }

    #[test]
    fn test_no_comma_at_edges() {
        let amounts = [1.0, 12.0, 123.0, 1234.0, 12345.0, 123456.0, 1234567.0, 98765432.1];
        for amount in amounts {
            for decimals in 0..3 {
                let text = format_grouped(amount, decimals);
                assert!(!text.starts_with(','), "{}", text);
                assert!(!text.contains(",."), "{}", text);
                assert!(!text.contains(".,"), "{}", text);
                assert!(!text.ends_with(','), "{}", text);
            }
        }
    }

    #[test]
    fn test_sign_is_factored_out() {
        for amount in [0.75, 12.0, 1845.67, 153190.61, 98765432.0] {
            for decimals in 0..3 {
                assert_eq!(
                    format_grouped(-amount, decimals),
                    format!("-{}", format_grouped(amount, decimals))
                );
            }
        }
        assert_eq!(format_localized(-153190.61, 2), "₹-1,53,190.61");
    }

    #[test]
    fn test_rounding_to_requested_decimals() {
        assert_eq!(format_localized(402584.86, 0), "₹4,02,585");
        assert_eq!(format_localized(1234.567, 2), "₹1,234.57");
    }

    #[test]
    fn test_non_finite_propagates_as_text() {
        assert_eq!(format_localized(f64::NAN, 0), "₹NaN");
        assert_eq!(format_grouped(f64::INFINITY, 0), "Infinity");
        assert_eq!(format_grouped(f64::NEG_INFINITY, 2), "-Infinity");
        assert_eq!(to_fixed(f64::NAN, 1), "NaN");
    }

    #[test]
    fn test_convert() {
        assert_eq!(convert(0.0, DEFAULT_RATE), 0.0);
        assert_eq!(convert_usd(100.0), 8300.0);
        for x in [1.0, 2.5, 4850.42, -1845.67] {
            let converted = convert(x, 75.5);
            assert!((converted / x - 75.5).abs() < 1e-12);
        }
    }

    #[test]
    fn test_ties_round_up() {
        assert_eq!(format_grouped(2.5, 0), "3");
        assert_eq!(format_grouped(1215742.5, 0), "12,15,743");
        assert_eq!(format_grouped(0.125, 2), "0.13");
        assert_eq!(format_grouped(-2.5, 0), "-3");
        assert_eq!(to_fixed(-0.25, 1), "-0.3");
    }

    #[test]
    fn test_values_just_below_a_tie_round_down() {
        // 0.15 and 1.005 are stored slightly below the midpoint
        assert_eq!(to_fixed(0.15, 1), "0.1");
        assert_eq!(format_grouped(1.005, 2), "1.00");
        assert_eq!(format_grouped(9.5, 0), "10");
        assert_eq!(format_grouped(999.995, 2), "999.99");
        assert_eq!(format_grouped(99999.5, 0), "1,00,000");
    }

    #[test]
    fn test_increment_last_digit() {
        assert_eq!(increment_last_digit("2"), "3");
        assert_eq!(increment_last_digit("0.12"), "0.13");
        assert_eq!(increment_last_digit("9.99"), "10.00");
    }

    #[test]
    fn test_to_fixed() {
        assert_eq!(to_fixed(35.4411, 1), "35.4");
        assert_eq!(to_fixed(-0.0, 1), "0.0");
        assert_eq!(to_fixed(-0.0, 0), "0");
        assert_eq!(to_fixed(100.0, 2), "100.00");
    }
}
