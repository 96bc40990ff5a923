//! Text and JSON rendering of an [`AggregateSummary`].
//!
//! The text report prints one section per summary view, each as a
//! left-aligned label column followed by right-aligned figures.

use insights_core::formatting::{
    average_transaction_value, format_amount, format_count, format_currency, percentage,
};
use insights_core::models::{AggregateSummary, Insights};
use serde::Serialize;

/// Width of the label column in text sections.
const LABEL_WIDTH: usize = 24;

/// Serializable report: the summary plus presentation-level figures.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report<'a> {
    pub summary: &'a AggregateSummary,
    pub average_transaction_value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insights: Option<&'a Insights>,
}

impl<'a> Report<'a> {
    pub fn new(summary: &'a AggregateSummary, insights: Option<&'a Insights>) -> Self {
        Self {
            summary,
            average_transaction_value: average_transaction_value(summary),
            insights,
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Multi-section text report.
    pub fn to_text(&self) -> String {
        let s = self.summary;
        let mut lines: Vec<String> = Vec::new();

        lines.push("Overview".to_string());
        lines.push(row("Total revenue", &format_currency(s.total_revenue)));
        lines.push(row("Transactions", &format_count(s.total_transactions)));
        lines.push(row(
            "Average transaction",
            &format_currency(self.average_transaction_value),
        ));

        section(&mut lines, "Revenue by category");
        for c in &s.by_category {
            let share = percentage(c.revenue, s.total_revenue, 1);
            lines.push(row(
                &c.name,
                &format!(
                    "{}  {:>5.1}%  {} units",
                    format_currency(c.revenue),
                    share,
                    format_count(c.quantity)
                ),
            ));
        }

        section(&mut lines, "Payment methods");
        for p in &s.by_payment {
            let share = percentage(p.count as f64, s.total_transactions as f64, 1);
            lines.push(row(&p.name, &format!("{}  {:>5.1}%", format_count(p.count), share)));
        }

        section(&mut lines, "Revenue by gender");
        for g in &s.by_gender {
            lines.push(row(&g.name, &format_currency(g.revenue)));
        }

        section(&mut lines, "Top products");
        for (rank, p) in s.top_products.iter().enumerate() {
            lines.push(row(
                &format!("{}. {}", rank + 1, p.name),
                &format!("{}  {} units", format_currency(p.revenue), format_count(p.quantity)),
            ));
        }

        section(&mut lines, "Daily sales");
        for d in &s.daily_sales {
            lines.push(row(&d.date, &format_amount(d.amount, 2)));
        }

        section(&mut lines, "Hourly sales");
        for h in &s.hourly_sales {
            lines.push(row(
                &h.hour,
                &format!("{}  ({} sales)", format_amount(h.amount, 2), format_count(h.count)),
            ));
        }

        section(&mut lines, "Sales by weekday");
        for d in &s.day_of_week_sales {
            lines.push(row(&d.day, &format_amount(d.amount, 2)));
        }

        section(&mut lines, "Monthly sales");
        for m in &s.monthly_sales {
            lines.push(row(
                &m.month,
                &format!(
                    "{}  ({} sales)",
                    format_amount(m.amount, 2),
                    format_count(m.transaction_count)
                ),
            ));
        }

        if let Some(insights) = self.insights {
            push_insights(&mut lines, insights);
        }

        lines.join("\n")
    }
}

fn push_insights(lines: &mut Vec<String>, insights: &Insights) {
    if !insights.recommendations.is_empty() {
        section(lines, "Recommendations");
        let mut recs: Vec<_> = insights.recommendations.iter().collect();
        recs.sort_by_key(|r| r.priority);
        for r in recs {
            lines.push(format!(
                "[{}] {} {} ({}): {}",
                r.priority, r.action, r.product, r.category, r.reason
            ));
            if let Some(horizon) = &r.horizon {
                lines.push(format!("    horizon: {}", horizon));
            }
            if let Some(impact) = &r.impact {
                lines.push(format!("    impact: {}", impact));
            }
        }
    }

    if let Some(forecast) = &insights.forecast {
        section(lines, "Forecast");
        lines.push(row("Next week", &format_currency(forecast.next_week_revenue)));
        lines.push(row("Next month", &format_currency(forecast.next_month_revenue)));
        lines.push(row(
            "Confidence",
            &format!("{:.0}%", forecast.confidence * 100.0),
        ));
        let notes = [
            ("Daily", &forecast.insights.daily),
            ("Hourly", &forecast.insights.hourly),
            ("Weekday", &forecast.insights.weekday),
            ("Monthly", &forecast.insights.monthly),
            ("Categories", &forecast.insights.categories),
        ];
        for (label, note) in notes {
            if let Some(note) = note {
                lines.push(format!("{}: {}", label, note));
            }
        }
    }
}

fn section(lines: &mut Vec<String>, title: &str) {
    lines.push(String::new());
    lines.push(title.to_string());
}

fn row(label: &str, value: &str) -> String {
    format!("  {:<width$} {}", label, value, width = LABEL_WIDTH)
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use insights_core::models::{Forecast, Priority, Recommendation, RecommendationAction};
    use insights_data::{aggregate, parse};

    const SAMPLE: &str = "Gender,Product line,Unit price,Quantity,Total,Date,Time,Payment,Product\n\
                          Male,Electronics,10,2,20,2024-01-05,14:30:00,Cash,Phone\n\
                          Female,Electronics,10,1,10,2024-01-05,09:15:00,Card,Phone";

    fn recommendation(product: &str, priority: Priority) -> Recommendation {
        Recommendation {
            category: "Electronics".to_string(),
            action: RecommendationAction::Increase,
            product: product.to_string(),
            reason: "Strong revenue".to_string(),
            priority,
            horizon: None,
            impact: Some("More stock turns".to_string()),
        }
    }

    #[test]
    fn test_text_report_sections() {
        let summary = aggregate(&parse(SAMPLE));
        let text = Report::new(&summary, None).to_text();

        assert!(text.contains("Total revenue"));
        assert!(text.contains("$30.00"));
        assert!(text.contains("Average transaction"));
        assert!(text.contains("$15.00"));
        assert!(text.contains("1. Phone"));
        assert!(text.contains("09:00"));
        assert!(text.contains("January 2024"));
        assert!(text.contains("Saturday"));
        assert!(!text.contains("Recommendations"));
    }

    #[test]
    fn test_text_report_empty_summary() {
        let summary = aggregate(&[]);
        let text = Report::new(&summary, None).to_text();

        assert!(text.contains("$0.00"));
        assert!(text.contains("Sunday"));
    }

    #[test]
    fn test_text_report_orders_recommendations_by_priority() {
        let summary = aggregate(&parse(SAMPLE));
        let insights = Insights {
            recommendations: vec![
                recommendation("Cable", Priority::Low),
                recommendation("Phone", Priority::High),
            ],
            forecast: None,
        };
        let text = Report::new(&summary, Some(&insights)).to_text();

        let high = text.find("[high] increase Phone").expect("high rec");
        let low = text.find("[low] increase Cable").expect("low rec");
        assert!(high < low);
        assert!(text.contains("impact: More stock turns"));
    }

    #[test]
    fn test_text_report_forecast() {
        let summary = aggregate(&parse(SAMPLE));
        let insights = Insights {
            recommendations: vec![],
            forecast: Some(Forecast {
                next_week_revenue: 120.0,
                next_month_revenue: 480.0,
                confidence: 0.75,
                insights: Default::default(),
            }),
        };
        let text = Report::new(&summary, Some(&insights)).to_text();

        assert!(text.contains("Forecast"));
        assert!(text.contains("$480.00"));
        assert!(text.contains("75%"));
    }

    #[test]
    fn test_json_report_fields() {
        let summary = aggregate(&parse(SAMPLE));
        let json = Report::new(&summary, None).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["summary"]["totalTransactions"], 2);
        assert_eq!(value["summary"]["byCategory"][0]["name"], "Electronics");
        assert_eq!(value["summary"]["hourlySales"][1]["hour"], "14:00");
        assert_eq!(value["averageTransactionValue"], 15.0);
        assert!(value.get("insights").is_none());
    }

    #[test]
    fn test_json_report_zero_transactions_average() {
        let summary = aggregate(&[]);
        let report = Report::new(&summary, None);
        assert_eq!(report.average_transaction_value, 0.0);
    }
}
