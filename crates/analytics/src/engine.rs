use crate::error::AnalyticsError;
use core_types::{Commodity, Day, Month, ProfitTable};
use serde::Serialize;
use std::fmt;

/// Returned by string queries that take a month when the month is out of range.
pub const INVALID_MONTH: &str = "INVALID_MONTH";
/// Returned by string queries that take commodity names when a name is unknown.
pub const INVALID_COMMODITY: &str = "INVALID_COMMODITY";
/// Returned by the profit-valued queries on invalid input.
pub const INVALID_AMOUNT: i64 = -99999;
/// Returned by the day, streak and count queries on invalid input.
pub const INVALID_COUNT: i32 = -1;

/// Number of fixed 7-day windows in a month.
pub const WEEKS_PER_MONTH: usize = 4;
const DAYS_PER_WEEK: usize = 7;

/// One of the four fixed, non-overlapping 7-day windows of a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Week(u8);

impl Week {
    /// One-based week number (1..=4).
    pub fn number(&self) -> u8 {
        self.0 + 1
    }

    /// The days covered by this window.
    pub fn days(self) -> impl Iterator<Item = Day> {
        let start = self.0 as usize * DAYS_PER_WEEK;
        (start..start + DAYS_PER_WEEK).filter_map(Day::from_index)
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Week {}", self.number())
    }
}

/// Outcome of comparing the yearly totals of two commodities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Comparison {
    Better { winner: Commodity, margin: i64 },
    Equal,
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparison::Better { winner, margin } => write!(f, "{} is better by {}", winner, margin),
            Comparison::Equal => f.write_str("Equal"),
        }
    }
}

/// Read-only query layer over a populated `ProfitTable`.
///
/// Each query comes in two forms. The `try_*` form resolves the raw arguments
/// into catalog types and reports bad input as an `AnalyticsError`. The plain
/// form never fails: it maps every error onto the query's sentinel value.
#[derive(Debug, Clone, Copy)]
pub struct AnalyticsEngine<'a> {
    table: &'a ProfitTable,
}

impl<'a> AnalyticsEngine<'a> {
    pub fn new(table: &'a ProfitTable) -> Self {
        Self { table }
    }

    // ==========================================================================
    // Sentinel API
    // ==========================================================================

    /// `"<commodity> <total>"` for the commodity with the highest month total.
    pub fn most_profitable_commodity_in_month(&self, month: i32) -> String {
        or_sentinel(
            "most_profitable_commodity_in_month",
            self.try_most_profitable_commodity_in_month(month)
                .map(|(commodity, total)| format!("{} {}", commodity, total)),
            INVALID_MONTH.to_string(),
        )
    }

    pub fn total_profit_on_day(&self, month: i32, day: i32) -> i64 {
        or_sentinel(
            "total_profit_on_day",
            self.try_total_profit_on_day(month, day),
            INVALID_AMOUNT,
        )
    }

    pub fn commodity_profit_in_range(&self, commodity: &str, from_day: i32, to_day: i32) -> i64 {
        or_sentinel(
            "commodity_profit_in_range",
            self.try_commodity_profit_in_range(commodity, from_day, to_day),
            INVALID_AMOUNT,
        )
    }

    /// One-based number of the most profitable day.
    pub fn best_day_of_month(&self, month: i32) -> i32 {
        or_sentinel(
            "best_day_of_month",
            self.try_best_day_of_month(month).map(|day| day.number() as i32),
            INVALID_COUNT,
        )
    }

    pub fn best_month_for_commodity(&self, commodity: &str) -> String {
        or_sentinel(
            "best_month_for_commodity",
            self.try_best_month_for_commodity(commodity)
                .map(|month| month.name().to_string()),
            INVALID_COMMODITY.to_string(),
        )
    }

    pub fn consecutive_loss_days(&self, commodity: &str) -> i32 {
        or_sentinel(
            "consecutive_loss_days",
            self.try_consecutive_loss_days(commodity).map(to_count),
            INVALID_COUNT,
        )
    }

    pub fn days_above_threshold(&self, commodity: &str, threshold: i64) -> i32 {
        or_sentinel(
            "days_above_threshold",
            self.try_days_above_threshold(commodity, threshold).map(to_count),
            INVALID_COUNT,
        )
    }

    pub fn biggest_daily_swing(&self, month: i32) -> i64 {
        or_sentinel(
            "biggest_daily_swing",
            self.try_biggest_daily_swing(month),
            INVALID_AMOUNT,
        )
    }

    pub fn compare_two_commodities(&self, first: &str, second: &str) -> String {
        or_sentinel(
            "compare_two_commodities",
            self.try_compare_two_commodities(first, second)
                .map(|cmp| cmp.to_string()),
            INVALID_COMMODITY.to_string(),
        )
    }

    /// `"Week N"` for the most profitable 7-day window.
    pub fn best_week_of_month(&self, month: i32) -> String {
        or_sentinel(
            "best_week_of_month",
            self.try_best_week_of_month(month).map(|week| week.to_string()),
            INVALID_MONTH.to_string(),
        )
    }

    // ==========================================================================
    // Typed API
    // ==========================================================================

    /// Highest 28-day total in the month; the earliest commodity wins ties.
    pub fn try_most_profitable_commodity_in_month(
        &self,
        month: i32,
    ) -> Result<(Commodity, i64), AnalyticsError> {
        let month = resolve_month(month)?;
        let best = first_max(
            Commodity::ALL
                .into_iter()
                .map(|c| (c, self.table.month_total(month, c))),
        );
        Ok(best.unwrap_or((Commodity::Gold, 0)))
    }

    pub fn try_total_profit_on_day(&self, month: i32, day: i32) -> Result<i64, AnalyticsError> {
        let month = resolve_month(month)?;
        let day = resolve_day(day)?;
        Ok(self.table.day_total(month, day))
    }

    /// Sum of one commodity over days `from_day..=to_day` of every month.
    pub fn try_commodity_profit_in_range(
        &self,
        commodity: &str,
        from_day: i32,
        to_day: i32,
    ) -> Result<i64, AnalyticsError> {
        if from_day < 1 || to_day > Day::COUNT as i32 || from_day > to_day {
            return Err(AnalyticsError::InvalidRange {
                from: from_day,
                to: to_day,
            });
        }
        let commodity = resolve_commodity(commodity)?;
        let (from, to) = (resolve_day(from_day)?, resolve_day(to_day)?);

        let total = Month::ALL
            .into_iter()
            .flat_map(|month| {
                Day::all()
                    .filter(move |d| *d >= from && *d <= to)
                    .map(move |d| i64::from(self.table.get(month, d, commodity)))
            })
            .sum();
        Ok(total)
    }

    /// Day with the highest all-commodity total; the earliest day wins ties.
    pub fn try_best_day_of_month(&self, month: i32) -> Result<Day, AnalyticsError> {
        let month = resolve_month(month)?;
        let best = first_max(Day::all().map(|d| (d, self.table.day_total(month, d))));
        Ok(best.map(|(day, _)| day).unwrap_or(Day::FIRST))
    }

    /// Month with the highest total for the commodity; the earliest month wins ties.
    pub fn try_best_month_for_commodity(&self, commodity: &str) -> Result<Month, AnalyticsError> {
        let commodity = resolve_commodity(commodity)?;
        let best = first_max(
            Month::ALL
                .into_iter()
                .map(|m| (m, self.table.month_total(m, commodity))),
        );
        Ok(best.map(|(month, _)| month).unwrap_or(Month::January))
    }

    /// Longest run of strictly negative days.
    ///
    /// The year is scanned as one sequence, January day 1 through December
    /// day 28, so a run that ends a month continues into the next one.
    pub fn try_consecutive_loss_days(&self, commodity: &str) -> Result<usize, AnalyticsError> {
        let commodity = resolve_commodity(commodity)?;
        let (longest, _) = self
            .table
            .commodity_values(commodity)
            .fold((0usize, 0usize), |(longest, current), value| {
                if value < 0 {
                    (longest.max(current + 1), current + 1)
                } else {
                    (longest, 0)
                }
            });
        Ok(longest)
    }

    /// Number of (month, day) cells where the commodity made strictly more than `threshold`.
    pub fn try_days_above_threshold(
        &self,
        commodity: &str,
        threshold: i64,
    ) -> Result<usize, AnalyticsError> {
        let commodity = resolve_commodity(commodity)?;
        Ok(self
            .table
            .commodity_values(commodity)
            .filter(|&v| i64::from(v) > threshold)
            .count())
    }

    /// Largest absolute change in the all-commodity total between adjacent days.
    pub fn try_biggest_daily_swing(&self, month: i32) -> Result<i64, AnalyticsError> {
        let month = resolve_month(month)?;
        let totals: Vec<i64> = Day::all().map(|d| self.table.day_total(month, d)).collect();
        Ok(totals
            .windows(2)
            .map(|w| (w[0] - w[1]).abs())
            .max()
            .unwrap_or(0))
    }

    pub fn try_compare_two_commodities(
        &self,
        first: &str,
        second: &str,
    ) -> Result<Comparison, AnalyticsError> {
        let first = resolve_commodity(first)?;
        let second = resolve_commodity(second)?;
        let (a, b) = (self.table.year_total(first), self.table.year_total(second));

        Ok(match a.cmp(&b) {
            std::cmp::Ordering::Greater => Comparison::Better {
                winner: first,
                margin: a - b,
            },
            std::cmp::Ordering::Less => Comparison::Better {
                winner: second,
                margin: b - a,
            },
            std::cmp::Ordering::Equal => Comparison::Equal,
        })
    }

    /// Most profitable of the four 7-day windows; the earliest window wins ties.
    pub fn try_best_week_of_month(&self, month: i32) -> Result<Week, AnalyticsError> {
        let month = resolve_month(month)?;
        let best = first_max((0..WEEKS_PER_MONTH as u8).map(Week).map(|week| {
            let total: i64 = week.days().map(|d| self.table.day_total(month, d)).sum();
            (week, total)
        }));
        Ok(best.map(|(week, _)| week).unwrap_or(Week(0)))
    }
}

fn resolve_month(index: i32) -> Result<Month, AnalyticsError> {
    usize::try_from(index)
        .ok()
        .and_then(Month::from_index)
        .ok_or(AnalyticsError::InvalidMonth(index))
}

fn resolve_day(number: i32) -> Result<Day, AnalyticsError> {
    Day::new(i64::from(number)).map_err(|_| AnalyticsError::InvalidDay(number))
}

fn resolve_commodity(name: &str) -> Result<Commodity, AnalyticsError> {
    Commodity::from_name(name).ok_or_else(|| AnalyticsError::UnknownCommodity(name.to_string()))
}

/// Picks the entry with the strictly greatest value, keeping the earliest on ties.
///
/// `Iterator::max_by_key` keeps the last maximum, which is the wrong tie-break here.
fn first_max<T>(entries: impl Iterator<Item = (T, i64)>) -> Option<(T, i64)> {
    entries.fold(None, |best, (key, value)| match best {
        Some((_, best_value)) if value <= best_value => best,
        _ => Some((key, value)),
    })
}

fn to_count(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

fn or_sentinel<T>(operation: &str, result: Result<T, AnalyticsError>, sentinel: T) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(operation, error = %e, "Invalid query argument, returning sentinel.");
            sentinel
        }
    }
}
