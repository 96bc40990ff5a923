mod bootstrap;
mod report;

use anyhow::{Context, Result};
use insights_core::settings::{OutputFormat, Settings};
use insights_data::aggregate;
use insights_data::reader::{load_insights, load_records};

use crate::report::Report;

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("Sales Insights v{} starting", env!("CARGO_PKG_VERSION"));

    let records = load_records(&settings.input)?;
    let summary = aggregate(&records);

    if summary.is_empty() {
        println!(
            "No valid data in {}: expected a header row and at least one transaction row.",
            settings.input.display()
        );
        return Ok(());
    }

    let insights = settings
        .insights
        .as_deref()
        .map(load_insights)
        .transpose()
        .context("loading insights")?;

    tracing::info!(
        "Summarised {} transactions across {} categories",
        summary.total_transactions,
        summary.by_category.len()
    );

    let report = Report::new(&summary, insights.as_ref());
    match settings.format {
        OutputFormat::Table => println!("{}", report.to_text()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}
