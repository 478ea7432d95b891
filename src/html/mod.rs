//! Minimal HTML table extraction.
//!
//! Only what the draft pages need: `<table>` discovery (nested tables
//! included), header detection, rowspan/colspan expansion and cell text.

pub mod table;
pub mod text;

pub use table::{HtmlTable, TableParser};
