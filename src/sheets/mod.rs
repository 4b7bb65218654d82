// src/sheets/mod.rs
//
// Spreadsheet side of the pipeline. `SheetBackend` opens a worksheet,
// `Worksheet` reads a column and writes a row; `writer` builds the
// find-row/write-row steps on top of those two calls.

pub mod auth;
pub mod google;
pub mod writer;

use crate::{config::SheetConfig, error::SheetError};

pub use google::GoogleSheets;

/// A live handle to one named tab. Obtained per submission, never cached.
pub trait Worksheet {
    fn title(&self) -> &str;

    /// Column `col` (1-based), top to bottom, up to the last non-empty cell.
    fn col_values(&self, col: usize) -> Result<Vec<String>, SheetError>;

    /// Overwrite row `row` (1-based) starting at column A, in a single call.
    fn update_row(&self, row: usize, values: &[String]) -> Result<(), SheetError>;
}

pub trait SheetBackend: Send + Sync {
    fn open(&self, config: &SheetConfig) -> Result<Box<dyn Worksheet>, SheetError>;
}
