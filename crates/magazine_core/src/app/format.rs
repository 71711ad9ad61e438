//! Reader-facing formatting helpers.

use chrono::{Datelike, NaiveDate};

const MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Formats a publication date in Russian long form, e.g. `15 октября 2023 г.`.
pub fn format_date(date: NaiveDate) -> String {
    let month = MONTHS_GENITIVE[date.month0() as usize];
    format!("{} {} {} г.", date.day(), month, date.year())
}

#[cfg(test)]
mod tests {
    use super::format_date;
    use chrono::NaiveDate;

    #[test]
    fn formats_day_month_and_year() {
        let date = NaiveDate::from_ymd_opt(2023, 10, 15).unwrap();
        assert_eq!(format_date(date), "15 октября 2023 г.");
    }

    #[test]
    fn single_digit_day_is_not_padded() {
        let date = NaiveDate::from_ymd_opt(2023, 3, 1).unwrap();
        assert_eq!(format_date(date), "1 марта 2023 г.");
    }
}
