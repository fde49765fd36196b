/// Utilities for date and time formatting
///
/// The API sends ISO datetime strings; the screens display them in
/// DD/MM/YYYY order.

/// Format ISO datetime string to DD/MM/YYYY HH:MM format
/// Example: "2024-03-15T14:02:26.123Z" -> "15/03/2024 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        if let Some((year, rest)) = date_part.split_once('-') {
            if let Some((month, day)) = rest.split_once('-') {
                let time = time_part.split('.').next().unwrap_or(time_part);
                let hhmm = time.rsplit_once(':').map(|(h, _)| h).unwrap_or(time);
                let hhmm = hhmm.trim_end_matches('Z');
                return format!("{}/{}/{} {}", day, month, year, hhmm);
            }
        }
    }
    datetime_str.to_string()
}

/// Format ISO date string to DD/MM/YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// The YYYY-MM-DD day key of an ISO datetime, for grouping.
pub fn day_key(datetime_str: &str) -> &str {
    datetime_str.split('T').next().unwrap_or(datetime_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z"),
            "15/03/2024 14:02"
        );
        assert_eq!(format_datetime("2024-12-31T23:59:59"), "31/12/2024 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
    }

    #[test]
    fn test_day_key() {
        assert_eq!(day_key("2024-03-15T14:02:26"), "2024-03-15");
        assert_eq!(day_key("2024-03-15"), "2024-03-15");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }
}
