/// Date formatting for backend timestamps (`2024-03-15T14:02:26.123Z`).
///
/// Parsing is lenient: anything that is not an ISO date comes back as is.

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn split_date(date_part: &str) -> Option<(&str, &str, &str)> {
    let mut parts = date_part.splitn(3, '-');
    let year = parts.next()?;
    let month = parts.next()?;
    let day = parts.next()?;
    if year.len() == 4 && month.len() == 2 && day.len() == 2 {
        Some((year, month, day))
    } else {
        None
    }
}

fn month_name(month: &str) -> Option<&'static str> {
    let index: usize = month.parse().ok()?;
    MONTHS.get(index.checked_sub(1)?).copied()
}

/// "2024-03-15T14:02:26Z" -> "15 Mar 2024"
pub fn format_date(value: &str) -> String {
    let date_part = value.split('T').next().unwrap_or(value);
    split_date(date_part)
        .and_then(|(year, month, day)| {
            let name = month_name(month)?;
            Some(format!("{} {} {}", day.trim_start_matches('0'), name, year))
        })
        .unwrap_or_else(|| value.to_string())
}

/// "2024-03-15T14:02:26.123Z" -> "15 Mar 2024, 14:02"
pub fn format_datetime(value: &str) -> String {
    let Some((date_part, time_part)) = value.split_once('T') else {
        return format_date(value);
    };
    let date = format_date(date_part);
    if date == date_part {
        return value.to_string();
    }
    let hm: String = time_part.chars().take(5).collect();
    if hm.len() == 5 && hm.as_bytes()[2] == b':' {
        format!("{}, {}", date, hm)
    } else {
        date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15 Mar 2024");
        assert_eq!(format_date("2024-12-01T14:02:26.123Z"), "1 Dec 2024");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15 Mar 2024, 14:02");
        assert_eq!(format_datetime("2024-03-15"), "15 Mar 2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("2024-13-01"), "2024-13-01");
        assert_eq!(format_date(""), "");
    }
}
