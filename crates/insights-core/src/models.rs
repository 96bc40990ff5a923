use serde::{Deserialize, Serialize};

// ── Input records ─────────────────────────────────────────────────────────────

/// A single point-of-sale transaction parsed from one CSV row.
///
/// String fields are always trimmed. Numeric fields hold `0` when the source
/// column was missing or unparsable; see [`parse_amount`] and
/// [`parse_quantity`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    /// Customer gender as written in the source file.
    pub gender: String,
    /// Product line / category.
    pub product_line: String,
    /// Price of a single unit.
    pub unit_price: f64,
    /// Units sold.
    pub quantity: u64,
    /// Line total. Not checked against `unit_price * quantity`.
    pub total: f64,
    /// Calendar date string in whatever format the source used.
    pub date: String,
    /// Time of day, `HH:MM` or `HH:MM:SS`.
    pub time: String,
    /// Payment method.
    pub payment: String,
    /// Product name.
    pub product_name: String,
}

/// Parse a decimal amount, falling back to `0.0`.
///
/// Blank, malformed and non-finite values (`NaN`, `inf`) all map to `0.0` so
/// no `NaN` ever reaches a running total.
pub fn parse_amount(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Parse a unit count, falling back to `0`.
///
/// Decimal values are truncated (`"3.0"` → 3, `"2.5"` → 2). Otherwise the
/// leading run of digits is used (`"12 pcs"` → 12). Negative values map to
/// `0`.
pub fn parse_quantity(raw: &str) -> u64 {
    let raw = raw.trim();
    if let Ok(n) = raw.parse::<u64>() {
        return n;
    }
    match raw.parse::<f64>() {
        // `as` saturates at u64::MAX.
        Ok(v) if v.is_finite() && v >= 0.0 => v.trunc() as u64,
        Ok(_) => 0,
        Err(_) => {
            let unsigned = raw.strip_prefix('+').unwrap_or(raw);
            let end = unsigned
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(unsigned.len());
            let digits = &unsigned[..end];
            if digits.is_empty() {
                0
            } else {
                digits.parse::<u64>().unwrap_or(u64::MAX)
            }
        }
    }
}

// ── Summary entries ───────────────────────────────────────────────────────────

/// Revenue and units for one product line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySales {
    pub name: String,
    pub revenue: f64,
    pub quantity: u64,
}

/// Number of transactions paid with one method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentCount {
    pub name: String,
    pub count: u64,
}

/// Revenue attributed to one customer gender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenderSales {
    pub name: String,
    pub revenue: f64,
}

/// Units and revenue for one product name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSales {
    pub name: String,
    pub quantity: u64,
    pub revenue: f64,
}

/// Revenue for one distinct date string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySales {
    pub date: String,
    pub amount: f64,
}

/// Revenue and transaction count for one hour of the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlySales {
    /// Label in `"HH:00"` form.
    pub hour: String,
    pub amount: f64,
    pub count: u64,
}

/// Revenue for one weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekdaySales {
    pub day: String,
    pub amount: f64,
}

/// Revenue and transaction count for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySales {
    /// Label in `"<MonthName> <Year>"` form, e.g. `"January 2024"`.
    pub month: String,
    pub amount: f64,
    pub transaction_count: u64,
}

/// Every summary view derived from one batch of records.
///
/// Built only by the aggregator; `day_of_week_sales` always holds exactly
/// seven entries, Sunday first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateSummary {
    pub total_revenue: f64,
    pub total_transactions: u64,
    pub by_category: Vec<CategorySales>,
    pub by_payment: Vec<PaymentCount>,
    pub by_gender: Vec<GenderSales>,
    pub top_products: Vec<ProductSales>,
    pub daily_sales: Vec<DailySales>,
    pub hourly_sales: Vec<HourlySales>,
    pub day_of_week_sales: Vec<WeekdaySales>,
    pub monthly_sales: Vec<MonthlySales>,
}

impl AggregateSummary {
    /// `true` when the batch held no records, i.e. there is nothing to analyse.
    pub fn is_empty(&self) -> bool {
        self.total_transactions == 0
    }
}

// ── Caller-supplied decoration ────────────────────────────────────────────────

/// Suggested stock action for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationAction {
    Increase,
    Decrease,
    Monitor,
}

impl std::fmt::Display for RecommendationAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RecommendationAction::Increase => "increase",
            RecommendationAction::Decrease => "decrease",
            RecommendationAction::Monitor => "monitor",
        };
        f.write_str(s)
    }
}

/// Urgency of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        };
        f.write_str(s)
    }
}

/// One recommendation entry returned by the external recommendation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: String,
    pub action: RecommendationAction,
    pub product: String,
    pub reason: String,
    pub priority: Priority,
    /// Free-text time horizon, e.g. `"next 2 weeks"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizon: Option<String>,
    /// Free-text expected impact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
}

/// Short natural-language notes, one per chart section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionInsights {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<String>,
}

/// Next-period projection produced by the external forecast service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Forecast {
    pub next_week_revenue: f64,
    pub next_month_revenue: f64,
    /// Service-reported confidence, nominally `0.0..=1.0`.
    pub confidence: f64,
    #[serde(default)]
    pub insights: SectionInsights,
}

/// Recommendations and forecast attached to a summary by the caller.
///
/// Opaque to the aggregation engine: it is carried alongside the summary
/// and never validated or interpreted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forecast: Option<Forecast>,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
