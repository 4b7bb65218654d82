// tests/common/mod.rs
//
// In-memory stand-ins for the page source and the spreadsheet service.
#![allow(dead_code)]

pub mod http;

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use salvage_scrape::{
    config::{CredentialSource, SheetConfig},
    core::PageSource,
    error::{ScrapeError, SheetError},
    progress::{Progress, Stage},
    sheets::{SheetBackend, Worksheet},
};

pub const LISTING: &str = include_str!("../fixtures/listing.html");

pub fn config() -> SheetConfig {
    SheetConfig {
        spreadsheet_id: "sheet-1".into(),
        worksheet_name: "SalvageSalvage".into(),
        credentials: CredentialSource::Inline("{}".into()),
    }
}

pub struct FakeSource {
    body: String,
    calls: AtomicUsize,
}

impl FakeSource {
    pub fn new(body: &str) -> Self {
        Self { body: body.into(), calls: AtomicUsize::new(0) }
    }
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PageSource for FakeSource {
    fn fetch(&self, _url: &str) -> Result<String, ScrapeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.body.clone())
    }
}

pub type Writes = Arc<Mutex<Vec<(usize, Vec<String>)>>>;

pub struct FakeSheets {
    pub spreadsheet_exists: bool,
    pub tabs: Vec<String>,
    pub col_a: Vec<String>,
    pub fail_writes: bool,
    opens: AtomicUsize,
    pub writes: Writes,
}

impl FakeSheets {
    /// A spreadsheet with the expected tab whose column A has `filled` entries.
    pub fn with_rows(filled: usize) -> Self {
        let mut col_a = vec!["Date".to_string()];
        col_a.extend((1..filled).map(|i| format!("2024,01,{:02}", i)));
        Self {
            spreadsheet_exists: true,
            tabs: vec!["Sheet1".into(), "SalvageSalvage".into()],
            col_a,
            fail_writes: false,
            opens: AtomicUsize::new(0),
            writes: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn opens(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }

    pub fn written(&self) -> Vec<(usize, Vec<String>)> {
        self.writes.lock().unwrap().clone()
    }
}

impl SheetBackend for FakeSheets {
    fn open(&self, config: &SheetConfig) -> Result<Box<dyn Worksheet>, SheetError> {
        self.opens.fetch_add(1, Ordering::SeqCst);
        if !self.spreadsheet_exists {
            return Err(SheetError::SpreadsheetNotFound);
        }
        if !self.tabs.contains(&config.worksheet_name) {
            return Err(SheetError::WorksheetNotFound(config.worksheet_name.clone()));
        }
        Ok(Box::new(FakeTab {
            title: config.worksheet_name.clone(),
            col_a: self.col_a.clone(),
            fail_writes: self.fail_writes,
            writes: Arc::clone(&self.writes),
        }))
    }
}

struct FakeTab {
    title: String,
    col_a: Vec<String>,
    fail_writes: bool,
    writes: Writes,
}

impl Worksheet for FakeTab {
    fn title(&self) -> &str {
        &self.title
    }

    fn col_values(&self, col: usize) -> Result<Vec<String>, SheetError> {
        assert_eq!(col, 1, "only column A is ever read");
        Ok(self.col_a.clone())
    }

    fn update_row(&self, row: usize, values: &[String]) -> Result<(), SheetError> {
        if self.fail_writes {
            return Err(SheetError::Access("HTTP 403: The caller does not have permission".into()));
        }
        self.writes.lock().unwrap().push((row, values.to_vec()));
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingProgress {
    pub total: Option<usize>,
    pub lines: Vec<String>,
    pub stages: Vec<Stage>,
    pub finished: bool,
}

impl Progress for RecordingProgress {
    fn begin(&mut self, total: usize) {
        self.total = Some(total);
    }
    fn log(&mut self, msg: &str) {
        self.lines.push(msg.into());
    }
    fn stage_done(&mut self, stage: Stage) {
        self.stages.push(stage);
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}
