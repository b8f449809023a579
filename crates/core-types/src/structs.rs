use crate::enums::{Commodity, Day};
use serde::Serialize;

/// One validated line of a month file: the profit a commodity made on a given day.
///
/// The month is not part of the record; it is implied by the source the line came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProfitRecord {
    pub day: Day,
    pub commodity: Commodity,
    pub profit: i32,
}

impl ProfitRecord {
    pub fn new(day: Day, commodity: Commodity, profit: i32) -> Self {
        Self {
            day,
            commodity,
            profit,
        }
    }
}
