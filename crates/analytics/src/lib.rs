//! # Profit Analytics Engine
//!
//! This crate answers the fixed set of analytical questions asked of a loaded
//! `ProfitTable`: best commodity, day, month and week, loss streaks, threshold
//! counts, daily swings and head-to-head comparisons.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of where the
//!   table came from. It depends only on `core-types` and, for the report
//!   arguments, `configuration`.
//! - **Read-Only Queries:** The `AnalyticsEngine` borrows the table immutably. Queries
//!   are independent of each other and can run in any order.
//! - **Sentinels, Not Errors:** Every query validates its own arguments. The plain
//!   methods return a documented sentinel (`INVALID_MONTH`, `INVALID_COMMODITY`,
//!   `INVALID_AMOUNT`, `INVALID_COUNT`) on bad input; the `try_*` methods expose the
//!   underlying `AnalyticsError`.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: The main struct that contains the query logic.
//! - `ProfitReport`: The ten headline answers, ready for display or serialization.
//! - `AnalyticsError`: The specific error types behind the sentinels.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::{
    AnalyticsEngine, Comparison, Week, INVALID_AMOUNT, INVALID_COMMODITY, INVALID_COUNT,
    INVALID_MONTH,
};
pub use error::AnalyticsError;
pub use report::{ProfitReport, ReportEntry, ReportValue};
