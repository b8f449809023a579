use crate::error::IngestError;
use crate::record::parse_record;
use crate::source::MonthSource;
use core_types::{Month, ProfitTable};
use serde::Serialize;
use std::io::BufRead;

/// Outcome of ingesting one month source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MonthSummary {
    pub accepted: usize,
    pub rejected: usize,
}

/// Outcome of a full ingestion pass over all twelve months.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngestSummary {
    pub accepted: usize,
    pub rejected: usize,
    pub months_loaded: Vec<Month>,
    /// Months whose source could not be opened or read to the end.
    pub months_skipped: Vec<Month>,
}

impl IngestSummary {
    fn record(&mut self, month: Month, summary: MonthSummary) {
        self.accepted += summary.accepted;
        self.rejected += summary.rejected;
        self.months_loaded.push(month);
    }
}

/// Fills a `ProfitTable` from a `MonthSource`.
pub struct Loader<S> {
    source: S,
}

impl<S: MonthSource> Loader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Ingests a single month.
    ///
    /// Malformed lines are dropped without touching the table. If the source
    /// cannot be opened the table is left unchanged. A read error part-way
    /// through stops the month; lines applied before it are kept.
    pub fn load_month(
        &self,
        table: &mut ProfitTable,
        month: Month,
    ) -> Result<MonthSummary, IngestError> {
        let mut reader = self.source.open(month)?;
        let mut summary = MonthSummary::default();
        let mut buf = Vec::new();
        let mut line_no = 0;

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| IngestError::Read {
                    month,
                    lines: line_no,
                    source,
                })?;
            if read == 0 {
                break;
            }
            line_no += 1;

            let line = String::from_utf8_lossy(&buf);
            match parse_record(&line) {
                Ok(record) => {
                    table.apply(month, &record);
                    summary.accepted += 1;
                }
                Err(reason) => {
                    tracing::debug!(%month, line = line_no, %reason, "Dropping malformed record.");
                    summary.rejected += 1;
                }
            }
        }

        Ok(summary)
    }

    /// Ingests every month in catalog order.
    ///
    /// A month whose source fails is skipped and the pass continues with the
    /// next month.
    pub fn load_all(&self, table: &mut ProfitTable) -> IngestSummary {
        self.load_all_with(table, |_, _| {})
    }

    /// Like [`Loader::load_all`], calling `on_month` after each month is attempted.
    pub fn load_all_with<F>(&self, table: &mut ProfitTable, mut on_month: F) -> IngestSummary
    where
        F: FnMut(Month, Result<&MonthSummary, &IngestError>),
    {
        let mut summary = IngestSummary::default();

        for month in Month::ALL {
            match self.load_month(table, month) {
                Ok(month_summary) => {
                    summary.record(month, month_summary);
                    on_month(month, Ok(&month_summary));
                }
                Err(e) => {
                    tracing::warn!(%month, error = %e, "Skipping month source.");
                    summary.months_skipped.push(month);
                    on_month(month, Err(&e));
                }
            }
        }

        tracing::info!(
            accepted = summary.accepted,
            rejected = summary.rejected,
            skipped = summary.months_skipped.len(),
            "Ingestion complete."
        );
        summary
    }
}

/// Builds a fresh table from a source in one pass.
pub fn build_table<S: MonthSource>(source: S) -> (ProfitTable, IngestSummary) {
    let mut table = ProfitTable::new();
    let summary = Loader::new(source).load_all(&mut table);
    (table, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemorySource;
    use core_types::{Commodity, Day};
    use std::io::{self, Read};

    fn day(n: i64) -> Day {
        Day::new(n).unwrap()
    }

    #[test]
    fn test_malformed_lines_are_dropped() {
        let source = MemorySource::new().with_month(
            Month::January,
            "1,Gold,500\n\
             garbage\n\
             2,gold,10\n\
             29,Oil,10\n\
             x,Oil,10\n\
             3,Oil,ten\n\
             3,Oil,10,11\n\
             4, Silver , -20 \n",
        );
        let mut table = ProfitTable::new();
        let summary = Loader::new(source).load_month(&mut table, Month::January).unwrap();

        assert_eq!(summary, MonthSummary { accepted: 2, rejected: 6 });
        assert_eq!(table.get(Month::January, day(1), Commodity::Gold), 500);
        assert_eq!(table.get(Month::January, day(4), Commodity::Silver), -20);
        assert_eq!(table.get(Month::January, day(3), Commodity::Oil), 0);
        assert_eq!(table.get(Month::January, day(2), Commodity::Gold), 0);
    }

    #[test]
    fn test_trailing_commas_are_stored() {
        let source = MemorySource::new().with_month(
            Month::June,
            "1,Gold,5,\r\n2,Oil,-8,,,\n,3,Wheat,1\n",
        );
        let mut table = ProfitTable::new();
        let summary = Loader::new(source).load_month(&mut table, Month::June).unwrap();

        assert_eq!(summary, MonthSummary { accepted: 2, rejected: 1 });
        assert_eq!(table.get(Month::June, day(1), Commodity::Gold), 5);
        assert_eq!(table.get(Month::June, day(2), Commodity::Oil), -8);
        assert_eq!(table.get(Month::June, day(3), Commodity::Wheat), 0);
    }

    #[test]
    fn test_duplicate_keys_keep_last_value() {
        let source = MemorySource::new().with_month(Month::April, "7,Wheat,10\n7,Wheat,25\n");
        let (table, summary) = build_table(source);
        assert_eq!(summary.accepted, 2);
        assert_eq!(table.get(Month::April, day(7), Commodity::Wheat), 25);
    }

    #[test]
    fn test_missing_months_are_skipped() {
        let source = MemorySource::new()
            .with_month(Month::February, "1,Oil,3\n")
            .with_month(Month::November, "1,Oil,4");
        let (table, summary) = build_table(source);

        assert_eq!(summary.months_loaded, vec![Month::February, Month::November]);
        assert_eq!(summary.months_skipped.len(), 10);
        assert_eq!(table.get(Month::February, day(1), Commodity::Oil), 3);
        // Last line without a trailing newline still counts.
        assert_eq!(table.get(Month::November, day(1), Commodity::Oil), 4);
    }

    #[test]
    fn test_reingestion_is_idempotent() {
        let source = MemorySource::new()
            .with_month(Month::March, "1,Gold,5\n2,Copper,-1\n")
            .with_month(Month::August, "28,Wheat,9\n");
        let loader = Loader::new(source);

        let mut first = ProfitTable::new();
        loader.load_all(&mut first);
        let mut second = first.clone();
        loader.load_all(&mut second);
        assert_eq!(first, second);
    }

    /// Yields one good line, then fails.
    struct FlakySource;

    struct FlakyReader {
        served: bool,
    }

    impl Read for FlakyReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served {
                return Err(io::Error::other("disk went away"));
            }
            self.served = true;
            let line = b"5,Gold,42\n";
            buf[..line.len()].copy_from_slice(line);
            Ok(line.len())
        }
    }

    impl MonthSource for FlakySource {
        fn open(&self, _month: Month) -> Result<Box<dyn BufRead + '_>, IngestError> {
            Ok(Box::new(io::BufReader::new(FlakyReader { served: false })))
        }
    }

    #[test]
    fn test_read_error_keeps_applied_lines() {
        let mut table = ProfitTable::new();
        let err = Loader::new(FlakySource)
            .load_month(&mut table, Month::May)
            .unwrap_err();

        assert!(matches!(err, IngestError::Read { month: Month::May, lines: 1, .. }));
        assert_eq!(table.get(Month::May, day(5), Commodity::Gold), 42);
    }

    #[test]
    fn test_progress_callback_sees_every_month() {
        let source = MemorySource::new().with_month(Month::January, "1,Gold,1\n");
        let mut seen = Vec::new();
        let mut table = ProfitTable::new();
        Loader::new(source).load_all_with(&mut table, |month, result| {
            seen.push((month, result.is_ok()));
        });
        assert_eq!(seen.len(), 12);
        assert_eq!(seen[0], (Month::January, true));
        assert_eq!(seen[1], (Month::February, false));
    }
}
