// src/error.rs
use thiserror::Error;

/// Fetch or extraction failed. Shown to the user as one dialog.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("page is missing an expected field")]
    MissingField,

    #[error("invalid selector `{0}`")]
    Selector(String),
}

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("worksheet '{0}' not found")]
    WorksheetNotFound(String),

    #[error("spreadsheet not found")]
    SpreadsheetNotFound,

    #[error("{0}")]
    Access(String),
}

impl From<reqwest::Error> for SheetError {
    fn from(e: reqwest::Error) -> Self {
        SheetError::Access(e.to_string())
    }
}

impl From<serde_json::Error> for SheetError {
    fn from(e: serde_json::Error) -> Self {
        SheetError::Access(format!("malformed response: {e}"))
    }
}

impl From<jsonwebtoken::errors::Error> for SheetError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        SheetError::Access(format!("could not sign credentials: {e}"))
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Scrape(#[from] ScrapeError),

    #[error(transparent)]
    Sheet(#[from] SheetError),
}
