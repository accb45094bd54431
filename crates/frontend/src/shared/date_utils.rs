//! Date/time display formatting.

use chrono::{DateTime, Utc};

/// Date column format: "15.03.2024".
pub fn format_date(dt: DateTime<Utc>) -> String {
    dt.format("%d.%m.%Y").to_string()
}

/// Time column format: "14:02".
pub fn format_time(dt: DateTime<Utc>) -> String {
    dt.format("%H:%M").to_string()
}

/// Detail panels: "15.03.2024 14:02:26".
pub fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.format("%d.%m.%Y %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(sample()), "15.03.2024");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(sample()), "14:02");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime(sample()), "15.03.2024 14:02:26");
    }
}
