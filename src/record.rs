// src/record.rs
use chrono::NaiveDate;

use crate::{
    config::consts::{DATE_FORMAT, STATUS},
    specs::listing::ListingFields,
};

/// Number of cells a record occupies, columns A..E.
pub const ROW_WIDTH: usize = 5;

/// One scraped listing, ready to become a sheet row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingRecord {
    pub capture_date: NaiveDate,
    pub title: String,
    pub identifier: String,
    pub status: &'static str,
    pub description: String,
}

impl ListingRecord {
    pub fn new(fields: ListingFields, capture_date: NaiveDate) -> Self {
        Self {
            capture_date,
            title: fields.title,
            identifier: fields.identifier,
            status: STATUS,
            description: fields.description,
        }
    }

    /// `YYYY,MM,DD`
    pub fn date_cell(&self) -> String {
        self.capture_date.format(DATE_FORMAT).to_string()
    }

    /// Cells in sheet order: date, title, identifier, status, description.
    pub fn to_row(&self) -> [String; ROW_WIDTH] {
        [
            self.date_cell(),
            self.title.clone(),
            self.identifier.clone(),
            s!(self.status),
            self.description.clone(),
        ]
    }
}
