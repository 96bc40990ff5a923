//! CSV text → [`TransactionRecord`] conversion.
//!
//! The layout is fixed and positional:
//! `gender, category, unitPrice, quantity, total, date, time, payment, productName`.
//! There is no quoting support, so a comma inside a field shifts the columns
//! of that row.

use insights_core::models::{parse_amount, parse_quantity, TransactionRecord};
use tracing::debug;

/// Row counters collected while parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Data rows after the header.
    pub rows_seen: usize,
    /// Rows dropped for having fewer columns than the header.
    pub rows_dropped: usize,
}

/// Parse CSV text into records, preserving row order.
///
/// Returns an empty vector when the text has no data row.
pub fn parse(text: &str) -> Vec<TransactionRecord> {
    parse_with_stats(text).0
}

/// Same as [`parse`], also returning row counters.
pub fn parse_with_stats(text: &str) -> (Vec<TransactionRecord>, ParseStats) {
    let mut stats = ParseStats::default();

    let mut lines = text.trim().split('\n');
    let header = match lines.next() {
        Some(h) => h,
        None => return (Vec::new(), stats),
    };
    let header_columns = header.split(',').count();

    let mut records = Vec::new();
    for (index, line) in lines.enumerate() {
        stats.rows_seen += 1;

        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < header_columns {
            stats.rows_dropped += 1;
            debug!(
                "Dropping row {}: {} columns, header has {}",
                index + 2,
                fields.len(),
                header_columns
            );
            continue;
        }

        records.push(record_from_fields(&fields));
    }

    debug!(
        "Parsed {} records from {} rows ({} dropped)",
        records.len(),
        stats.rows_seen,
        stats.rows_dropped
    );

    (records, stats)
}

/// Build a record from split columns, defaulting anything missing.
fn record_from_fields(fields: &[&str]) -> TransactionRecord {
    let text = |i: usize| fields.get(i).map(|f| f.trim().to_string()).unwrap_or_default();
    let raw = |i: usize| fields.get(i).copied().unwrap_or("");

    TransactionRecord {
        gender: text(0),
        product_line: text(1),
        unit_price: parse_amount(raw(2)),
        quantity: parse_quantity(raw(3)),
        total: parse_amount(raw(4)),
        date: text(5),
        time: text(6),
        payment: text(7),
        product_name: text(8),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Gender,Product line,Unit price,Quantity,Total,Date,Time,Payment,Product";

    fn csv(rows: &[&str]) -> String {
        let mut out = HEADER.to_string();
        for row in rows {
            out.push('\n');
            out.push_str(row);
        }
        out
    }

    // ── Unusable input ────────────────────────────────────────────────────────

    #[test]
    fn test_parse_empty_text() {
        assert!(parse("").is_empty());
        assert!(parse("   \n  \n").is_empty());
    }

    #[test]
    fn test_parse_header_only() {
        assert!(parse(HEADER).is_empty());
        assert!(parse(&format!("{}\n", HEADER)).is_empty());
    }

    // ── Well-formed rows ──────────────────────────────────────────────────────

    #[test]
    fn test_parse_single_row() {
        let text = csv(&["Male,Electronics,10,2,20,2024-01-05,14:30:00,Cash,Phone"]);
        let records = parse(&text);

        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.gender, "Male");
        assert_eq!(r.product_line, "Electronics");
        assert!((r.unit_price - 10.0).abs() < 1e-9);
        assert_eq!(r.quantity, 2);
        assert!((r.total - 20.0).abs() < 1e-9);
        assert_eq!(r.date, "2024-01-05");
        assert_eq!(r.time, "14:30:00");
        assert_eq!(r.payment, "Cash");
        assert_eq!(r.product_name, "Phone");
    }

    #[test]
    fn test_parse_preserves_order() {
        let text = csv(&[
            "Male,A,1,1,1,2024-01-01,10:00,Cash,P1",
            "Female,B,1,1,2,2024-01-02,11:00,Card,P2",
            "Male,C,1,1,3,2024-01-03,12:00,Ewallet,P3",
        ]);
        let names: Vec<String> = parse(&text).into_iter().map(|r| r.product_name).collect();
        assert_eq!(names, vec!["P1", "P2", "P3"]);
    }

    #[test]
    fn test_parse_trims_fields_and_crlf() {
        let text = "h1,h2,h3,h4,h5,h6,h7,h8,h9\r\n Female , Food , 3.5 , 4 , 14 , 1/5/2019 , 09:00 , Card , Bread \r\n";
        let records = parse(text);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].gender, "Female");
        assert_eq!(records[0].product_line, "Food");
        assert_eq!(records[0].quantity, 4);
        assert_eq!(records[0].product_name, "Bread");
    }

    #[test]
    fn test_parse_extra_columns_ignored() {
        let text = csv(&["Male,A,1,1,5,2024-01-01,10:00,Cash,P1,extra,more"]);
        let records = parse(&text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].product_name, "P1");
    }

    // ── Tolerance ─────────────────────────────────────────────────────────────

    #[test]
    fn test_parse_bad_numerics_default_to_zero() {
        let text = csv(&["Male,A,abc,-1,NaN,2024-01-01,10:00,Cash,P1"]);
        let records = parse(&text);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].unit_price, 0.0);
        assert_eq!(records[0].quantity, 0);
        assert_eq!(records[0].total, 0.0);
    }

    #[test]
    fn test_parse_drops_short_rows() {
        let text = csv(&[
            "Male,A,1,1,5,2024-01-01,10:00,Cash,P1",
            "Female,B,1,1,7",
            "Male,C,1,1,9,2024-01-03,12:00,Card,P3",
        ]);
        let (records, stats) = parse_with_stats(&text);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].product_name, "P1");
        assert_eq!(records[1].product_name, "P3");
        assert_eq!(stats, ParseStats { rows_seen: 3, rows_dropped: 1 });
    }

    #[test]
    fn test_parse_blank_line_dropped() {
        let text = csv(&[
            "Male,A,1,1,5,2024-01-01,10:00,Cash,P1",
            "",
            "Male,C,1,1,9,2024-01-03,12:00,Card,P3",
        ]);
        assert_eq!(parse(&text).len(), 2);
    }

    #[test]
    fn test_parse_all_empty_columns_accepted() {
        let text = csv(&[",,,,,,,,"]);
        let records = parse(&text);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0], TransactionRecord::default());
    }

    #[test]
    fn test_parse_short_header_fills_missing_fields() {
        let text = "gender,category,price,qty,total\nMale,A,2,3,6";
        let records = parse(text);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].quantity, 3);
        assert_eq!(records[0].date, "");
        assert_eq!(records[0].product_name, "");
    }

    #[test]
    fn test_parse_is_deterministic() {
        let text = csv(&[
            "Male,A,1,1,5,2024-01-01,10:00,Cash,P1",
            "Female,B,2,2,4,2024-01-02,11:00,Card,P2",
        ]);
        assert_eq!(parse(&text), parse(&text));
    }
}
