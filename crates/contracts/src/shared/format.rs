use chrono::NaiveDate;

/// Format an integer with thousands separators (commas)
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Format a money amount for display, e.g. `$1,250,000` or `$99.50`.
///
/// Amounts are stored as plain numbers; this is the only place currency appears.
pub fn format_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = format_number(cents / 100);
    match cents % 100 {
        0 => format!("{}${}", sign, whole),
        c => format!("{}${}.{:02}", sign, whole, c),
    }
}

pub fn format_optional_currency(amount: Option<f64>) -> String {
    amount.map(format_currency).unwrap_or_else(|| "-".to_string())
}

/// DD.MM.YYYY
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

pub fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1_250_000.0), "$1,250,000");
        assert_eq!(format_currency(99.5), "$99.50");
        assert_eq!(format_currency(-450.0), "-$450");
        assert_eq!(format_optional_currency(None), "-");
    }

    #[test]
    fn test_format_date() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_date(d), "05.03.2024");
        assert_eq!(format_optional_date(None), "-");
    }
}
