use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The five tradeable goods tracked by the profit table, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Commodity {
    Gold,
    Oil,
    Silver,
    Wheat,
    Copper,
}

impl Commodity {
    /// Number of commodities in the catalog.
    pub const COUNT: usize = 5;

    /// Every commodity in catalog order. Ties in the analytics are broken by this order.
    pub const ALL: [Commodity; Self::COUNT] = [
        Commodity::Gold,
        Commodity::Oil,
        Commodity::Silver,
        Commodity::Wheat,
        Commodity::Copper,
    ];

    /// Positional index of the commodity within the catalog.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        match self {
            Commodity::Gold => "Gold",
            Commodity::Oil => "Oil",
            Commodity::Silver => "Silver",
            Commodity::Wheat => "Wheat",
            Commodity::Copper => "Copper",
        }
    }

    /// Looks a commodity up by its exact, case-sensitive name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Commodity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The twelve months of the trading calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const COUNT: usize = 12;

    pub const ALL: [Month; Self::COUNT] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Zero-based position of the month (January = 0).
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Resolves a zero-based month index, returning `None` outside `0..12`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A trading day within a month. Every month has exactly 28 of them.
///
/// Stored as the zero-based index; constructed from the one-based day number
/// used in the input files and in the public queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Day(u8);

impl Day {
    pub const COUNT: usize = 28;

    pub const FIRST: Day = Day(0);

    /// Builds a day from its one-based number (1..=28).
    pub fn new(number: i64) -> Result<Self, CoreError> {
        if (1..=Self::COUNT as i64).contains(&number) {
            Ok(Day((number - 1) as u8))
        } else {
            Err(CoreError::DayOutOfRange(number))
        }
    }

    /// Builds a day from its zero-based index (0..28).
    pub fn from_index(index: usize) -> Option<Self> {
        (index < Self::COUNT).then_some(Day(index as u8))
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// One-based day number, as shown to users.
    pub fn number(&self) -> u32 {
        self.0 as u32 + 1
    }

    /// All 28 days in calendar order.
    pub fn all() -> impl Iterator<Item = Day> {
        (0..Self::COUNT as u8).map(Day)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}
