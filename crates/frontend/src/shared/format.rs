//! Number formatting for tables and cards.

const CURRENCY: &str = "Rs";

/// Groups the integer part with commas: 1234567 -> "1,234,567".
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if value < 0 {
        out.insert(0, '-');
    }
    out
}

/// Money with the shop currency. Cents are shown only when present.
pub fn format_money(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let whole = cents / 100;
    let frac = (cents % 100).abs();
    let sign = if cents < 0 && whole == 0 { "-" } else { "" };
    if frac == 0 {
        format!("{} {}{}", CURRENCY, sign, format_thousands(whole))
    } else {
        format!("{} {}{}.{:02}", CURRENCY, sign, format_thousands(whole), frac)
    }
}

/// Stock and other counts that arrive as floats.
pub fn format_count(value: f64) -> String {
    format_thousands(value.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_grouping() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
        assert_eq!(format_thousands(-45_000), "-45,000");
    }

    #[test]
    fn money() {
        assert_eq!(format_money(1200.0), "Rs 1,200");
        assert_eq!(format_money(1234.5), "Rs 1,234.50");
        assert_eq!(format_money(0.99), "Rs 0.99");
        assert_eq!(format_money(-0.5), "Rs -0.50");
    }

    #[test]
    fn counts_round() {
        assert_eq!(format_count(12.0), "12");
        assert_eq!(format_count(2500.4), "2,500");
    }
}
