use crate::enums::{Commodity, Day, Month};
use crate::structs::ProfitRecord;

/// Total number of cells: 12 months x 28 days x 5 commodities.
pub const CELL_COUNT: usize = Month::COUNT * Day::COUNT * Commodity::COUNT;

/// Dense (month, day, commodity) -> profit table.
///
/// Cells are kept in one flat buffer in scan order: month-major, then day, then
/// commodity. Every cell starts at zero, and a cell that no record ever touches
/// stays zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfitTable {
    cells: Vec<i32>,
}

impl ProfitTable {
    /// Creates a fully zeroed table.
    pub fn new() -> Self {
        Self {
            cells: vec![0; CELL_COUNT],
        }
    }

    fn offset(month: Month, day: Day, commodity: Commodity) -> usize {
        (month.index() * Day::COUNT + day.index()) * Commodity::COUNT + commodity.index()
    }

    /// Overwrites a cell. Duplicate writes to the same key keep the last value.
    pub fn set(&mut self, month: Month, day: Day, commodity: Commodity, value: i32) {
        self.cells[Self::offset(month, day, commodity)] = value;
    }

    /// Returns the stored profit, or 0 when the cell was never written.
    pub fn get(&self, month: Month, day: Day, commodity: Commodity) -> i32 {
        self.cells[Self::offset(month, day, commodity)]
    }

    /// Writes a parsed record into the given month.
    pub fn apply(&mut self, month: Month, record: &ProfitRecord) {
        self.set(month, record.day, record.commodity, record.profit);
    }

    /// Sum of all commodities on one day.
    pub fn day_total(&self, month: Month, day: Day) -> i64 {
        let start = Self::offset(month, day, Commodity::Gold);
        self.cells[start..start + Commodity::COUNT]
            .iter()
            .map(|&v| i64::from(v))
            .sum()
    }

    /// Sum of one commodity over all 28 days of a month.
    pub fn month_total(&self, month: Month, commodity: Commodity) -> i64 {
        Day::all()
            .map(|day| i64::from(self.get(month, day, commodity)))
            .sum()
    }

    /// Sum of one commodity over the whole year.
    pub fn year_total(&self, commodity: Commodity) -> i64 {
        self.commodity_values(commodity).map(i64::from).sum()
    }

    /// Every value of one commodity in scan order: months 0..12, then days 0..28.
    pub fn commodity_values(&self, commodity: Commodity) -> impl Iterator<Item = i32> + '_ {
        self.cells
            .iter()
            .skip(commodity.index())
            .step_by(Commodity::COUNT)
            .copied()
    }
}

impl Default for ProfitTable {
    fn default() -> Self {
        Self::new()
    }
}
