use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Day {0} is outside the 1-28 trading calendar")]
    DayOutOfRange(i64),
}
