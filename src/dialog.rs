// src/dialog.rs
//
// What the user gets told at the end of a submission. Front ends decide how
// to render it (egui window, stdout).

use crate::error::{ScrapeError, SheetError, SubmitError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogLevel {
    Info,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dialog {
    pub level: DialogLevel,
    pub title: String,
    pub message: String,
}

impl Dialog {
    fn new(level: DialogLevel, title: &str, message: impl Into<String>) -> Self {
        Self { level, title: s!(title), message: message.into() }
    }

    pub fn success() -> Self {
        Self::new(DialogLevel::Info, "Success", "Car data has been added successfully!")
    }

    pub fn input_error() -> Self {
        Self::new(DialogLevel::Warning, "Input Error", "Please enter a valid URL.")
    }

    pub fn scrape_error(e: &ScrapeError) -> Self {
        Self::new(
            DialogLevel::Error,
            "Fetch Error",
            format!("Unable to fetch data from the URL.\nDetails: {e}"),
        )
    }

    pub fn sheet_error(e: &SheetError) -> Self {
        match e {
            SheetError::WorksheetNotFound(name) => Self::new(
                DialogLevel::Error,
                "Worksheet Not Found",
                format!("Worksheet '{name}' not found."),
            ),
            SheetError::SpreadsheetNotFound => Self::new(
                DialogLevel::Error,
                "Spreadsheet Not Found",
                "Spreadsheet not found. Check the spreadsheet ID.",
            ),
            SheetError::Access(details) => Self::new(
                DialogLevel::Error,
                "Google Sheets Error",
                format!("Unable to access Google Sheet.\nDetails: {details}"),
            ),
        }
    }

    pub fn from_error(e: &SubmitError) -> Self {
        match e {
            SubmitError::Scrape(e) => Self::scrape_error(e),
            SubmitError::Sheet(e) => Self::sheet_error(e),
        }
    }

    /// The worker died before it could answer.
    pub fn aborted() -> Self {
        Self::sheet_error(&SheetError::Access(s!("the submission stopped before it finished")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheet_faults_get_distinct_titles() {
        let titles = [
            Dialog::sheet_error(&SheetError::WorksheetNotFound(s!("Tab"))).title,
            Dialog::sheet_error(&SheetError::SpreadsheetNotFound).title,
            Dialog::sheet_error(&SheetError::Access(s!("403"))).title,
            Dialog::scrape_error(&ScrapeError::MissingField).title,
        ];
        for (i, a) in titles.iter().enumerate() {
            for b in &titles[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn worksheet_dialog_names_the_tab() {
        let d = Dialog::sheet_error(&SheetError::WorksheetNotFound(s!("SalvageSalvage")));
        assert_eq!(d.message, "Worksheet 'SalvageSalvage' not found.");
        assert_eq!(d.level, DialogLevel::Error);
    }

    #[test]
    fn access_dialog_carries_details() {
        let d = Dialog::from_error(&SubmitError::Sheet(SheetError::Access(s!("HTTP 403"))));
        assert_eq!(d.message, "Unable to access Google Sheet.\nDetails: HTTP 403");
    }

    #[test]
    fn aborted_reads_as_sheet_error() {
        let d = Dialog::aborted();
        assert_eq!(d.title, "Google Sheets Error");
        assert!(d.message.starts_with("Unable to access Google Sheet.\nDetails: "));
    }

    #[test]
    fn input_error_is_a_warning() {
        let d = Dialog::input_error();
        assert_eq!(d.level, DialogLevel::Warning);
        assert_ne!(d.level, DialogLevel::Error);
    }
}
