//! Draft page extraction: tables -> tidy records.

pub mod clean;
pub mod columns;
pub mod frame;
pub mod parse;
pub mod row;

pub use parse::fetch_year;
pub use row::Record;
