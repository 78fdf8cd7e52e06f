use chrono::{DateTime, Datelike, Utc};
use pin_core::types::parse_feed_date;

const MONTHS: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni", "Juli", "Agustus", "September",
    "Oktober", "November", "Desember",
];

/// `1 Mei 2024`
pub fn format_long_date(date: DateTime<Utc>) -> String {
    format!("{} {} {}", date.day(), MONTHS[date.month0() as usize], date.year())
}

/// Archive cards show a formatted date; anything unparseable is shown as is.
pub fn archive_date(raw: Option<&str>) -> String {
    match raw {
        Some(raw) => parse_feed_date(raw)
            .map(format_long_date)
            .unwrap_or_else(|| raw.to_string()),
        None => "Tanggal tidak tersedia".to_string(),
    }
}
