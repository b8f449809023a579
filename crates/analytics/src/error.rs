use thiserror::Error;

/// Why a query argument was rejected. The public queries turn these into sentinels.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("Month index {0} is outside 0-11")]
    InvalidMonth(i32),

    #[error("Day {0} is outside 1-28")]
    InvalidDay(i32),

    #[error("Day range {from}-{to} is not within 1-28 or is inverted")]
    InvalidRange { from: i32, to: i32 },

    #[error("Unknown commodity: {0}")]
    UnknownCommodity(String),
}
