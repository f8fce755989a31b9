/// Format a currency value with thousands separators
pub fn format_currency(value: f64) -> String {
    let cents_total = (value.abs() * 100.0).round() as i64;
    let dollars = cents_total / 100;
    let cents = cents_total % 100;

    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{cents:02}")
}

/// Format a percentage given in percent units (6.5 -> "6.50%")
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// Format a signed delta as currency, keeping an explicit plus sign
pub fn format_signed_currency(value: f64) -> String {
    if value >= 0.0 {
        format!("+{}", format_currency(value))
    } else {
        format_currency(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1798.6515), "$1,798.65");
        assert_eq!(format_currency(400_000.0), "$400,000.00");
        assert_eq!(format_currency(-51_360.5), "-$51,360.50");
    }

    #[test]
    fn test_format_currency_rounds_cents() {
        assert_eq!(format_currency(999.999), "$1,000.00");
    }

    #[test]
    fn test_format_signed_currency() {
        assert_eq!(format_signed_currency(12.5), "+$12.50");
        assert_eq!(format_signed_currency(-12.5), "-$12.50");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(6.5), "6.50%");
        assert_eq!(format_percent(-10.0), "-10.00%");
    }
}
