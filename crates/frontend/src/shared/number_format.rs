//! Number formatting for prices and totals

/// Formats a number with a thousands separator (comma) and the given number of decimals
///
/// # Examples
///
/// ```ignore
/// let formatted = format_number_with_decimals(1234.567, 2);
/// assert_eq!(formatted, "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.*}", usize::from(decimals.min(4)), value);

    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    // "-0.00" reads as a bug in a price column
    let sign = if grouped.chars().all(|c| c == '0' || c == ',')
        && decimal_part.map_or(true, |d| d.chars().all(|c| c == '0'))
    {
        ""
    } else {
        sign
    };

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Price with currency sign: `$1,234.50`
pub fn format_money(value: f64) -> String {
    let body = format_number_with_decimals(value, 2);
    match body.strip_prefix('-') {
        Some(rest) => format!("-${}", rest),
        None => format!("${}", body),
    }
}

/// Whole number with thousands separator
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.5), "$1,234.50");
        assert_eq!(format_money(1234567.891), "$1,234,567.89");
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(-12.3), "-$12.30");
        assert_eq!(format_money(-0.001), "$0.00");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(999.0, 2), "999.00");
        assert_eq!(format_number_with_decimals(100000.0, 0), "100,000");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(1234567.0), "1,234,567");
        assert_eq!(format_number_int(-1234.0), "-1,234");
    }
}
