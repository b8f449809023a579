pub mod enums;
pub mod error;
pub mod structs;
pub mod table;

// Re-export the core types to provide a clean public API.
pub use enums::{Commodity, Day, Month};
pub use error::CoreError;
pub use structs::ProfitRecord;
pub use table::ProfitTable;
