use crate::error::IngestError;
use configuration::DataSettings;
use core_types::Month;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::{Path, PathBuf};

/// Something that can hand out the line-oriented text of each month.
///
/// Every month of the catalog is addressable; a source that has nothing for a
/// month reports an error and the loader skips that month.
pub trait MonthSource {
    fn open(&self, month: Month) -> Result<Box<dyn BufRead + '_>, IngestError>;
}

/// Month files on disk, one per month, named after the month (`January.txt`, ...).
#[derive(Debug, Clone)]
pub struct DirectorySource {
    directory: PathBuf,
    extension: String,
}

impl DirectorySource {
    pub fn new(directory: impl Into<PathBuf>, extension: &str) -> Self {
        Self {
            directory: directory.into(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    pub fn from_settings(settings: &DataSettings) -> Self {
        Self::new(&settings.directory, &settings.extension)
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Get the path to a month's file.
    pub fn path_for(&self, month: Month) -> PathBuf {
        self.directory
            .join(format!("{}.{}", month.name(), self.extension))
    }
}

impl MonthSource for DirectorySource {
    fn open(&self, month: Month) -> Result<Box<dyn BufRead + '_>, IngestError> {
        let path = self.path_for(month);
        let file = File::open(&path).map_err(|source| IngestError::SourceUnavailable {
            month,
            path,
            source,
        })?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Month texts held in memory. Months without an entry are unavailable.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    months: HashMap<Month, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_month(mut self, month: Month, text: impl Into<String>) -> Self {
        self.insert(month, text);
        self
    }

    pub fn insert(&mut self, month: Month, text: impl Into<String>) {
        self.months.insert(month, text.into());
    }
}

impl MonthSource for MemorySource {
    fn open(&self, month: Month) -> Result<Box<dyn BufRead + '_>, IngestError> {
        self.months
            .get(&month)
            .map(|text| Box::new(Cursor::new(text.as_bytes())) as Box<dyn BufRead + '_>)
            .ok_or(IngestError::MissingSource(month))
    }
}
