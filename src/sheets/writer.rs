// src/sheets/writer.rs
use super::{SheetBackend, Worksheet};
use crate::{config::SheetConfig, error::SheetError, record::ListingRecord};

/// Authorize, open the spreadsheet, select the tab by name.
pub fn open(
    backend: &dyn SheetBackend,
    config: &SheetConfig,
) -> Result<Box<dyn Worksheet>, SheetError> {
    logf!("Sheet: open id={} tab='{}'", config.spreadsheet_id, config.worksheet_name);
    let ws = backend.open(config).inspect_err(|e| loge!("Sheet: open failed: {}", e))?;
    logd!("Sheet: opened '{}'", ws.title());
    Ok(ws)
}

/// Count of non-empty cells in column A, plus one.
/// Reads the whole column every time; nothing is remembered between calls.
pub fn next_empty_row(ws: &dyn Worksheet) -> Result<usize, SheetError> {
    let col = ws.col_values(1)?;
    let filled = col.iter().filter(|v| !v.is_empty()).count();
    Ok(filled + 1)
}

/// Write the record's five cells into `row` as one update.
pub fn write(ws: &dyn Worksheet, row: usize, record: &ListingRecord) -> Result<(), SheetError> {
    let cells = record.to_row();
    ws.update_row(row, &cells)?;
    logf!("Sheet: wrote row {} in '{}' ({})", row, ws.title(), record.identifier);
    Ok(())
}
