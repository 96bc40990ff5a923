use chrono::{Datelike, NaiveDate};

// ── Label tables ──────────────────────────────────────────────────────────────

/// Weekday labels, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Month labels indexed by zero-based month.
pub const MONTH_LABELS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Date layouts accepted in the `date` column, tried in order.
///
/// Slash dates are read month-first (`1/5/2019` is January 5th).
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d.%m.%Y"];

// ── Dates ─────────────────────────────────────────────────────────────────────

/// Parse a free-text date into a calendar date.
///
/// Returns `None` for empty strings or unrecognised layouts.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// Sunday-based weekday index (`0` = Sunday … `6` = Saturday).
pub fn weekday_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_sunday() as usize
}

/// `(year, zero-based month)` key used for monthly bucketing.
pub fn month_key(date: NaiveDate) -> (i32, u32) {
    (date.year(), date.month0())
}

/// Format a month key as `"<MonthName> <Year>"`.
///
/// ```
/// use insights_core::calendar::month_label;
///
/// assert_eq!(month_label(2024, 0), "January 2024");
/// assert_eq!(month_label(2019, 11), "December 2019");
/// ```
pub fn month_label(year: i32, month0: u32) -> String {
    let name = MONTH_LABELS.get(month0 as usize).copied().unwrap_or("Unknown");
    format!("{} {}", name, year)
}

// ── Hours ─────────────────────────────────────────────────────────────────────

/// Extract the hour of day from an `HH:MM[:SS]` time string.
///
/// The hour is the text before the first `:`; an empty hour counts as `0`.
/// Returns `None` when the hour is not a number in `0..=23`.
pub fn parse_hour(time: &str) -> Option<u32> {
    let head = time.split(':').next().unwrap_or("").trim();
    if head.is_empty() {
        return Some(0);
    }
    head.parse::<u32>().ok().filter(|h| *h < 24)
}

/// Format an hour as `"HH:00"`.
pub fn hour_label(hour: u32) -> String {
    format!("{:02}:00", hour)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
