//! # Profit Ingestion
//!
//! Turns the per-month text files into a populated `ProfitTable`.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Adapter:** Hides where the month texts come from behind the
//!   `MonthSource` trait. `DirectorySource` reads `<dir>/<Month>.<ext>` files;
//!   `MemorySource` serves texts held in memory.
//! - **Drop and Continue:** A malformed line is dropped and counted, a month that
//!   cannot be read is skipped and counted. Neither stops the pass; the
//!   `IngestSummary` reports what happened.
//!
//! ## Public API
//!
//! - `parse_record`: parses one `<day>,<commodity>,<profit>` line.
//! - `Loader`: runs the ingestion pass over a `MonthSource`.
//! - `build_table`: convenience wrapper returning a fresh table and its summary.

pub mod error;
pub mod loader;
pub mod record;
pub mod source;

pub use error::{IngestError, RecordError};
pub use loader::{build_table, IngestSummary, Loader, MonthSummary};
pub use record::parse_record;
pub use source::{DirectorySource, MemorySource, MonthSource};
