//! Grouped reductions and time bucketing over transaction records.
//!
//! Everything is accumulated in one pass over the records, then each
//! dimension is finalised into its output order.

use std::collections::{BTreeMap, HashSet};

use indexmap::IndexMap;
use insights_core::calendar::{
    hour_label, month_key, month_label, parse_date, parse_hour, weekday_index, WEEKDAY_LABELS,
};
use insights_core::models::{
    AggregateSummary, CategorySales, DailySales, GenderSales, HourlySales, MonthlySales,
    PaymentCount, ProductSales, TransactionRecord, WeekdaySales,
};
use tracing::{debug, warn};

/// Number of entries kept in [`AggregateSummary::top_products`].
pub const TOP_PRODUCTS_LIMIT: usize = 5;

// ── GroupTotals ───────────────────────────────────────────────────────────────

/// Running totals for one group key.
#[derive(Debug, Clone, Default)]
struct GroupTotals {
    revenue: f64,
    quantity: u64,
    count: u64,
}

impl GroupTotals {
    fn add_record(&mut self, record: &TransactionRecord) {
        self.revenue += record.total;
        self.quantity = self.quantity.saturating_add(record.quantity);
        self.count = self.count.saturating_add(1);
    }
}

// ── SummaryBuilder ────────────────────────────────────────────────────────────

/// Accumulator state for a single batch.
///
/// Keyed-by-string dimensions use [`IndexMap`] so output follows first-seen
/// order. Hours and months are keyed numerically and come out sorted.
#[derive(Debug, Default)]
struct SummaryBuilder {
    total_revenue: f64,
    total_transactions: u64,
    categories: IndexMap<String, GroupTotals>,
    payments: IndexMap<String, GroupTotals>,
    genders: IndexMap<String, GroupTotals>,
    products: IndexMap<String, GroupTotals>,
    days: IndexMap<String, GroupTotals>,
    hours: BTreeMap<u32, GroupTotals>,
    weekdays: [f64; 7],
    months: BTreeMap<(i32, u32), GroupTotals>,
    bad_dates: HashSet<String>,
    bad_times: HashSet<String>,
}

impl SummaryBuilder {
    fn add_record(&mut self, record: &TransactionRecord) {
        self.total_revenue += record.total;
        self.total_transactions += 1;

        for (map, key) in [
            (&mut self.categories, &record.product_line),
            (&mut self.payments, &record.payment),
            (&mut self.genders, &record.gender),
            (&mut self.products, &record.product_name),
            (&mut self.days, &record.date),
        ] {
            map.entry(key.clone()).or_default().add_record(record);
        }

        match parse_hour(&record.time) {
            Some(hour) => self.hours.entry(hour).or_default().add_record(record),
            None => {
                if self.bad_times.insert(record.time.clone()) {
                    warn!("Unrecognised time \"{}\", skipping hourly bucket", record.time);
                }
            }
        }

        match parse_date(&record.date) {
            Some(date) => {
                self.weekdays[weekday_index(date)] += record.total;
                self.months
                    .entry(month_key(date))
                    .or_default()
                    .add_record(record);
            }
            None => {
                if self.bad_dates.insert(record.date.clone()) {
                    warn!(
                        "Unrecognised date \"{}\", skipping weekday and monthly buckets",
                        record.date
                    );
                }
            }
        }
    }

    fn finish(self) -> AggregateSummary {
        let by_category = self
            .categories
            .iter()
            .map(|(name, t)| CategorySales {
                name: name.clone(),
                revenue: t.revenue,
                quantity: t.quantity,
            })
            .collect();

        let by_payment = self
            .payments
            .iter()
            .map(|(name, t)| PaymentCount {
                name: name.clone(),
                count: t.count,
            })
            .collect();

        let by_gender = self
            .genders
            .iter()
            .map(|(name, t)| GenderSales {
                name: name.clone(),
                revenue: t.revenue,
            })
            .collect();

        // `sort_by` is stable, so equal revenues keep first-seen order.
        let mut top_products: Vec<ProductSales> = self
            .products
            .iter()
            .map(|(name, t)| ProductSales {
                name: name.clone(),
                quantity: t.quantity,
                revenue: t.revenue,
            })
            .collect();
        top_products.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
        top_products.truncate(TOP_PRODUCTS_LIMIT);

        // Unparseable dates sort after every real date.
        let mut days: Vec<_> = self
            .days
            .iter()
            .map(|(date, t)| (parse_date(date), date, t.revenue))
            .collect();
        days.sort_by_key(|(parsed, _, _)| (parsed.is_none(), *parsed));
        let daily_sales = days
            .into_iter()
            .map(|(_, date, amount)| DailySales {
                date: date.clone(),
                amount,
            })
            .collect();

        let hourly_sales = self
            .hours
            .iter()
            .map(|(hour, t)| HourlySales {
                hour: hour_label(*hour),
                amount: t.revenue,
                count: t.count,
            })
            .collect();

        let day_of_week_sales = WEEKDAY_LABELS
            .iter()
            .zip(self.weekdays)
            .map(|(day, amount)| WeekdaySales {
                day: (*day).to_string(),
                amount,
            })
            .collect();

        let monthly_sales = self
            .months
            .iter()
            .map(|((year, month0), t)| MonthlySales {
                month: month_label(*year, *month0),
                amount: t.revenue,
                transaction_count: t.count,
            })
            .collect();

        AggregateSummary {
            total_revenue: self.total_revenue,
            total_transactions: self.total_transactions,
            by_category,
            by_payment,
            by_gender,
            top_products,
            daily_sales,
            hourly_sales,
            day_of_week_sales,
            monthly_sales,
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Build the full [`AggregateSummary`] for `records`.
///
/// Never fails: an empty slice yields zero totals, empty group lists and
/// seven zero-valued weekday entries.
pub fn aggregate(records: &[TransactionRecord]) -> AggregateSummary {
    let mut builder = SummaryBuilder::default();
    for record in records {
        builder.add_record(record);
    }

    debug!(
        "Aggregated {} records: {} categories, {} products, {} days, {} months",
        builder.total_transactions,
        builder.categories.len(),
        builder.products.len(),
        builder.days.len(),
        builder.months.len()
    );

    builder.finish()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
