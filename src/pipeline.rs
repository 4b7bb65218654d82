// src/pipeline.rs
//
// One submission, start to finish: trim → fetch → extract → open sheet →
// find row → write. Any fault ends the submission; nothing is retried.

use std::{error::Error, sync::Arc};

use chrono::NaiveDate;

use crate::{
    config::{AppOptions, SheetConfig},
    core::net::{HttpSource, PageSource},
    dialog::Dialog,
    error::{ScrapeError, SubmitError},
    progress::{Progress, Stage},
    record::ListingRecord,
    sheets::{GoogleSheets, SheetBackend, writer},
    specs::listing,
};

/// How a submission ended. Each variant maps to exactly one dialog.
#[derive(Debug)]
pub enum Outcome {
    Added { row: usize, record: ListingRecord },
    InputError,
    Failed(SubmitError),
}

impl Outcome {
    pub fn dialog(&self) -> Dialog {
        match self {
            Outcome::Added { .. } => Dialog::success(),
            Outcome::InputError => Dialog::input_error(),
            Outcome::Failed(e) => Dialog::from_error(e),
        }
    }

    pub fn is_added(&self) -> bool {
        matches!(self, Outcome::Added { .. })
    }
}

/// Trimmed URL, or `None` when nothing is left.
pub fn normalize_url(raw: &str) -> Option<&str> {
    let url = raw.trim();
    (!url.is_empty()).then_some(url)
}

/// Owned, thread-shareable handles to the two outside collaborators.
#[derive(Clone)]
pub struct Services {
    pub source: Arc<dyn PageSource>,
    pub sheets: Arc<dyn SheetBackend>,
}

impl Services {
    pub fn new(source: Arc<dyn PageSource>, sheets: Arc<dyn SheetBackend>) -> Self {
        Self { source, sheets }
    }

    /// Real HTTP fetcher and Google Sheets backend.
    pub fn live(opts: &AppOptions) -> Result<Self, Box<dyn Error>> {
        let source = HttpSource::new(&opts.net)?;
        let sheets = GoogleSheets::new(&opts.net)?;
        Ok(Self::new(Arc::new(source), Arc::new(sheets)))
    }

    pub fn pipeline<'a>(&'a self, config: &'a SheetConfig) -> Pipeline<'a> {
        Pipeline::new(&*self.source, &*self.sheets, config)
    }
}

pub struct Pipeline<'a> {
    source: &'a dyn PageSource,
    sheets: &'a dyn SheetBackend,
    config: &'a SheetConfig,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        source: &'a dyn PageSource,
        sheets: &'a dyn SheetBackend,
        config: &'a SheetConfig,
    ) -> Self {
        Self { source, sheets, config }
    }

    /// Fetch + extract only. Touches no sheet.
    pub fn scrape(
        &self,
        url: &str,
        today: NaiveDate,
        progress: &mut dyn Progress,
    ) -> Result<ListingRecord, ScrapeError> {
        report(progress, Stage::Fetch);
        let html = self.source.fetch(url)?;
        progress.stage_done(Stage::Fetch);

        report(progress, Stage::Extract);
        let fields = listing::parse_doc(&html)?;
        progress.stage_done(Stage::Extract);

        Ok(ListingRecord::new(fields, today))
    }

    pub fn submit(
        &self,
        raw_url: &str,
        today: NaiveDate,
        progress: &mut dyn Progress,
    ) -> Outcome {
        let Some(url) = normalize_url(raw_url) else {
            logd!("Submit: empty input");
            return Outcome::InputError;
        };

        logf!("Submit: Begin url={}", url);
        progress.begin(Stage::ALL.len());

        let outcome = match self.run(url, today, progress) {
            Ok((row, record)) => {
                logf!("Submit: OK row={} sku={}", row, record.identifier);
                Outcome::Added { row, record }
            }
            Err(e) => {
                loge!("Submit: Error url={}: {}", url, e);
                Outcome::Failed(e)
            }
        };

        progress.finish();
        outcome
    }

    fn run(
        &self,
        url: &str,
        today: NaiveDate,
        progress: &mut dyn Progress,
    ) -> Result<(usize, ListingRecord), SubmitError> {
        let record = self.scrape(url, today, progress)?;

        report(progress, Stage::Open);
        let ws = writer::open(self.sheets, self.config)?;
        progress.stage_done(Stage::Open);

        report(progress, Stage::LocateRow);
        let row = writer::next_empty_row(ws.as_ref())?;
        progress.stage_done(Stage::LocateRow);

        report(progress, Stage::Write);
        writer::write(ws.as_ref(), row, &record)?;
        progress.stage_done(Stage::Write);

        Ok((row, record))
    }
}

fn report(progress: &mut dyn Progress, stage: Stage) {
    progress.log(&join!(stage.label(), "…"));
}
