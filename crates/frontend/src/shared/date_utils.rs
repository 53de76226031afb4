//! Форматирование дат и времени для отображения в списках и карточках.

use chrono::{DateTime, NaiveDate, Utc};

/// Метка времени в виде "15.03.2024 14:02"
pub fn format_timestamp(dt: DateTime<Utc>) -> String {
    dt.format("%d.%m.%Y %H:%M").to_string()
}

/// Дата в виде "15.03.2024"
pub fn format_day(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamp_renders_day_first() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_timestamp(dt), "15.03.2024 14:02");
    }

    #[test]
    fn day_renders_with_dots() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(format_day(date), "31.12.2024");
    }
}
