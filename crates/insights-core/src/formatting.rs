//! Presentation helpers for summary figures.
//!
//! Division-derived metrics live here rather than in the aggregator, and
//! each one guards its own zero denominator.

use crate::models::AggregateSummary;

/// Format an amount with comma thousands separators and `decimals` places.
///
/// ```
/// use insights_core::formatting::format_amount;
///
/// assert_eq!(format_amount(1234.5, 2), "1,234.50");
/// assert_eq!(format_amount(-98765.0, 0), "-98,765");
/// ```
pub fn format_amount(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut out = group_digits(int_part);
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }

    // "-0.00" reads as noise in a report.
    if value < 0.0 && out.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.insert(0, '-');
    }
    out
}

/// Format a dollar amount with two decimals, e.g. `"$1,234.56"`.
pub fn format_currency(value: f64) -> String {
    if value < 0.0 {
        format!("-${}", format_amount(-value, 2))
    } else {
        format!("${}", format_amount(value, 2))
    }
}

/// Format an integer count with thousands separators.
pub fn format_count(value: u64) -> String {
    group_digits(&value.to_string())
}

/// `part` as a percentage of `whole`, rounded to `places`.
///
/// Returns `0.0` when `whole` is zero.
pub fn percentage(part: f64, whole: f64, places: u32) -> f64 {
    if whole == 0.0 {
        return 0.0;
    }
    let factor = 10_f64.powi(places as i32);
    (part / whole * 100.0 * factor).round() / factor
}

/// Mean revenue per transaction, or `0.0` when the summary is empty.
pub fn average_transaction_value(summary: &AggregateSummary) -> f64 {
    if summary.total_transactions == 0 {
        return 0.0;
    }
    summary.total_revenue / summary.total_transactions as f64
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

// ── Tests ──────────────────────────────────────────────────────────────────────
