//! End-to-end scenarios: month texts -> ingestion -> queries.

use analytics::{
    AnalyticsEngine, ProfitReport, INVALID_AMOUNT, INVALID_COMMODITY, INVALID_COUNT,
    INVALID_MONTH,
};
use configuration::ReportSettings;
use core_types::{Commodity, Day, Month, ProfitTable};
use ingest::{build_table, MemorySource};

fn sample_table() -> ProfitTable {
    let source = MemorySource::new()
        .with_month(
            Month::January,
            "1,Gold,500\n1,Oil,-20\n2,Silver,-10\n3,Silver,-5\n8,Copper,300\n15,Wheat,1200\n",
        )
        .with_month(Month::February, "1,Gold,-100\n2,Oil,900\n2,Wheat,1001\n")
        .with_month(Month::December, "28,Copper,75\nbroken line\n28,Gold,x\n");
    let (table, summary) = build_table(source);
    assert_eq!(summary.accepted, 10);
    assert_eq!(summary.rejected, 2);
    table
}

#[test]
fn test_single_record_scenario() {
    let (table, _) = build_table(MemorySource::new().with_month(Month::January, "1,Gold,500"));
    let engine = AnalyticsEngine::new(&table);

    assert_eq!(engine.total_profit_on_day(0, 1), 500);
    assert_eq!(engine.best_day_of_month(0), 1);
    assert_eq!(engine.most_profitable_commodity_in_month(0), "Gold 500");
    assert_eq!(engine.best_week_of_month(0), "Week 1");
}

#[test]
fn test_invalid_arguments_yield_sentinels() {
    let table = sample_table();
    let engine = AnalyticsEngine::new(&table);

    assert_eq!(engine.total_profit_on_day(0, 0), INVALID_AMOUNT);
    assert_eq!(engine.total_profit_on_day(12, 1), INVALID_AMOUNT);
    assert_eq!(engine.best_month_for_commodity("Unknown"), INVALID_COMMODITY);
    assert_eq!(engine.most_profitable_commodity_in_month(-1), INVALID_MONTH);
    assert_eq!(engine.best_week_of_month(99), INVALID_MONTH);
    assert_eq!(engine.best_day_of_month(-1), INVALID_COUNT);
    assert_eq!(engine.consecutive_loss_days("GOLD"), INVALID_COUNT);
    assert_eq!(engine.days_above_threshold("", 0), INVALID_COUNT);
    assert_eq!(engine.biggest_daily_swing(12), INVALID_AMOUNT);
    assert_eq!(engine.commodity_profit_in_range("Gold", 7, 1), INVALID_AMOUNT);
    assert_eq!(engine.compare_two_commodities("Gold", "gold"), INVALID_COMMODITY);
}

#[test]
fn test_daily_total_matches_cells() {
    let table = sample_table();
    let engine = AnalyticsEngine::new(&table);

    for month in Month::ALL {
        for day in Day::all() {
            let expected: i64 = Commodity::ALL
                .iter()
                .map(|&c| i64::from(table.get(month, day, c)))
                .sum();
            assert_eq!(
                engine.total_profit_on_day(month.index() as i32, day.number() as i32),
                expected
            );
        }
    }
}

#[test]
fn test_most_profitable_commodity_has_max_month_sum() {
    let table = sample_table();
    let engine = AnalyticsEngine::new(&table);

    for month in Month::ALL {
        let (winner, total) = engine
            .try_most_profitable_commodity_in_month(month.index() as i32)
            .unwrap();
        let max = Commodity::ALL
            .iter()
            .map(|&c| table.month_total(month, c))
            .max()
            .unwrap();
        assert_eq!(total, max);
        assert_eq!(table.month_total(month, winner), max);
    }
}

#[test]
fn test_full_range_equals_sum_of_month_totals() {
    let table = sample_table();
    let engine = AnalyticsEngine::new(&table);

    for commodity in Commodity::ALL {
        let month_totals: i64 = Month::ALL
            .iter()
            .map(|&m| table.month_total(m, commodity))
            .sum();
        assert_eq!(
            engine.commodity_profit_in_range(commodity.name(), 1, 28),
            month_totals
        );
    }
}

#[test]
fn test_queries_over_sample_data() {
    let table = sample_table();
    let engine = AnalyticsEngine::new(&table);

    assert_eq!(engine.most_profitable_commodity_in_month(0), "Wheat 1200");
    assert_eq!(engine.commodity_profit_in_range("Gold", 1, 7), 400);
    assert_eq!(engine.best_month_for_commodity("Oil"), "February");
    assert_eq!(engine.best_month_for_commodity("Copper"), "January");
    assert_eq!(engine.consecutive_loss_days("Silver"), 2);
    assert_eq!(engine.days_above_threshold("Wheat", 1000), 2);
    // January day 14 -> 15 jumps from 0 to 1200.
    assert_eq!(engine.biggest_daily_swing(0), 1200);
    assert_eq!(engine.compare_two_commodities("Gold", "Copper"), "Gold is better by 25");
    // Week 3 holds the 1200 Wheat day.
    assert_eq!(engine.best_week_of_month(0), "Week 3");
    assert_eq!(engine.best_week_of_month(11), "Week 4");
}

#[test]
fn test_empty_table_defaults() {
    let table = ProfitTable::new();
    let engine = AnalyticsEngine::new(&table);

    for month in 0..12 {
        assert_eq!(engine.biggest_daily_swing(month), 0);
    }
    for commodity in Commodity::ALL {
        assert_eq!(engine.days_above_threshold(commodity.name(), -1), 336);
        assert_eq!(engine.consecutive_loss_days(commodity.name()), 0);
    }
}

#[test]
fn test_report_serializes_to_json() {
    let table = sample_table();
    let engine = AnalyticsEngine::new(&table);
    let report = ProfitReport::build(&engine, &ReportSettings::default());

    let json = serde_json::to_value(&report).unwrap();
    let entries = json["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 10);
    assert_eq!(entries[0]["label"], "Most Profitable Commodity in January");
    assert_eq!(entries[0]["value"], "Wheat 1200");
    assert_eq!(entries[1]["value"], 480);
}
