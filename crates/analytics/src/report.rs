use crate::engine::AnalyticsEngine;
use configuration::ReportSettings;
use serde::Serialize;
use std::fmt;

/// A single answer in the summary report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ReportValue {
    Number(i64),
    Text(String),
}

impl fmt::Display for ReportValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportValue::Number(n) => write!(f, "{}", n),
            ReportValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ReportValue {
    fn from(n: i64) -> Self {
        ReportValue::Number(n)
    }
}

impl From<i32> for ReportValue {
    fn from(n: i32) -> Self {
        ReportValue::Number(i64::from(n))
    }
}

impl From<String> for ReportValue {
    fn from(s: String) -> Self {
        ReportValue::Text(s)
    }
}

/// A labelled line of the report, e.g. "Best day of January" -> 14.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub label: String,
    pub value: ReportValue,
}

/// The ten headline answers over a loaded table.
///
/// Values are the raw query results, so an invalid setting shows up as that
/// query's sentinel rather than aborting the report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfitReport {
    pub entries: Vec<ReportEntry>,
}

impl ProfitReport {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, label: String, value: impl Into<ReportValue>) {
        self.entries.push(ReportEntry {
            label,
            value: value.into(),
        });
    }

    /// Runs every query once with the arguments from `settings`.
    pub fn build(engine: &AnalyticsEngine<'_>, settings: &ReportSettings) -> Self {
        let month = settings.month;
        let m = month.index() as i32;
        let mut report = Self::new();

        report.push(
            format!("Most Profitable Commodity in {}", month),
            engine.most_profitable_commodity_in_month(m),
        );
        report.push(
            format!("Total profit on {} {}", month, settings.day),
            engine.total_profit_on_day(m, settings.day),
        );
        report.push(
            format!(
                "Profit of {} from day {} to {}",
                settings.range_commodity, settings.from_day, settings.to_day
            ),
            engine.commodity_profit_in_range(
                settings.range_commodity.name(),
                settings.from_day,
                settings.to_day,
            ),
        );
        report.push(
            format!("Best day of {}", month),
            engine.best_day_of_month(m),
        );
        report.push(
            format!("Best month for {}", settings.best_month_commodity),
            engine.best_month_for_commodity(settings.best_month_commodity.name()),
        );
        report.push(
            format!("Longest consecutive loss days for {}", settings.streak_commodity),
            engine.consecutive_loss_days(settings.streak_commodity.name()),
        );
        report.push(
            format!(
                "Number of days {} profit > {}",
                settings.threshold_commodity, settings.threshold
            ),
            engine.days_above_threshold(settings.threshold_commodity.name(), settings.threshold),
        );
        report.push(
            format!("Biggest daily swing in {}", month),
            engine.biggest_daily_swing(m),
        );
        let (first, second) = settings.compare;
        report.push(
            format!("Compare {} and {}", first, second),
            engine.compare_two_commodities(first.name(), second.name()),
        );
        report.push(
            format!("Best week of {}", month),
            engine.best_week_of_month(m),
        );

        report
    }

    /// Finds an entry by its exact label.
    pub fn get(&self, label: &str) -> Option<&ReportValue> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| &e.value)
    }
}
