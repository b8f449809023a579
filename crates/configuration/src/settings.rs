use core_types::{Commodity, Month};
use serde::Deserialize;
use std::path::PathBuf;

use crate::error::ConfigError;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataSettings,
    pub report: ReportSettings,
}

impl Config {
    /// Rejects settings that would make every month source unresolvable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data.directory.as_os_str().is_empty() {
            return Err(ConfigError::InvalidDataSource {
                key: "data.directory",
                reason: "must not be empty",
            });
        }
        if self.data.extension.trim().is_empty() {
            return Err(ConfigError::InvalidDataSource {
                key: "data.extension",
                reason: "must not be blank",
            });
        }
        if self.report.from_day > self.report.to_day {
            tracing::warn!(
                from_day = self.report.from_day,
                to_day = self.report.to_day,
                "Report range is inverted; the range query will return its sentinel."
            );
        }
        Ok(())
    }
}

/// Where the per-month profit files live.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// Directory holding one file per month.
    pub directory: PathBuf,
    /// File extension of the month files, without the leading dot.
    pub extension: String,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("Data_Files"),
            extension: "txt".to_string(),
        }
    }
}

/// Arguments used by the summary report. Each field feeds one of the ten queries.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Month used by the per-month queries.
    pub month: Month,
    /// One-based day for the daily total.
    pub day: i32,
    pub range_commodity: Commodity,
    pub from_day: i32,
    pub to_day: i32,
    pub best_month_commodity: Commodity,
    pub streak_commodity: Commodity,
    pub threshold_commodity: Commodity,
    pub threshold: i64,
    pub compare: (Commodity, Commodity),
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            month: Month::January,
            day: 1,
            range_commodity: Commodity::Gold,
            from_day: 1,
            to_day: 7,
            best_month_commodity: Commodity::Oil,
            streak_commodity: Commodity::Silver,
            threshold_commodity: Commodity::Wheat,
            threshold: 1000,
            compare: (Commodity::Gold, Commodity::Copper),
        }
    }
}
