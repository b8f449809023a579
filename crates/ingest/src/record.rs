use crate::error::RecordError;
use core_types::{Commodity, Day, ProfitRecord};

/// Parses one `<day>,<commodity>,<profit>` line.
///
/// Whitespace around each field is ignored. Empty fields at the end of the
/// line are discarded before counting, so `1,Gold,5,` is a valid record while
/// `,1,Gold,5` is not. The commodity name must match the catalog exactly
/// (case-sensitive). The profit may be negative.
pub fn parse_record(line: &str) -> Result<ProfitRecord, RecordError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let mut fields: Vec<&str> = line.split(',').collect();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    let fields: Vec<&str> = fields.into_iter().map(str::trim).collect();
    let [day, commodity, profit] = fields[..] else {
        return Err(RecordError::FieldCount(fields.len()));
    };

    let day_number: i64 = day
        .parse()
        .map_err(|_| RecordError::InvalidDay(day.to_string()))?;
    let profit: i32 = profit
        .parse()
        .map_err(|_| RecordError::InvalidProfit(profit.to_string()))?;
    let commodity = Commodity::from_name(commodity)
        .ok_or_else(|| RecordError::UnknownCommodity(commodity.to_string()))?;
    let day = Day::new(day_number).map_err(|_| RecordError::DayOutOfRange(day_number))?;

    Ok(ProfitRecord::new(day, commodity, profit))
}
