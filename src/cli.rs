// src/cli.rs
use std::{error::Error, path::PathBuf};

use chrono::Local;

use crate::{
    config::{AppOptions, CredentialSource, options::report_credentials},
    pipeline::{Outcome, Services},
    progress::{Progress, Stage},
};

const HELP: &str = "\
Usage: cli --url <URL> [options]

  -u, --url <URL>           Listing page to scrape
      --spreadsheet <ID>    Target spreadsheet id
      --worksheet <NAME>    Target worksheet (tab) name
      --credentials <PATH>  Service-account key file
      --dry-run             Fetch and extract only; print the row, touch no sheet
  -h, --help                Show this help";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Params {
    pub url: Option<String>,
    pub spreadsheet: Option<String>,
    pub worksheet: Option<String>,
    pub credentials: Option<PathBuf>,
    pub dry_run: bool,
    pub help: bool,
}

impl Params {
    /// Layer the flags over the built-in defaults.
    pub fn apply(&self, opts: &mut AppOptions) {
        if let Some(id) = &self.spreadsheet {
            opts.sheet.spreadsheet_id = id.clone();
        }
        if let Some(name) = &self.worksheet {
            opts.sheet.worksheet_name = name.clone();
        }
        if let Some(path) = &self.credentials {
            opts.sheet.credentials = CredentialSource::File(path.clone());
        }
    }
}

pub fn parse_args<I>(args: I) -> Result<Params, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut params = Params::default();
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "-u" | "--url" => params.url = Some(args.next().ok_or("Missing value for --url")?),
            "--spreadsheet" => {
                params.spreadsheet = Some(args.next().ok_or("Missing value for --spreadsheet")?)
            }
            "--worksheet" => {
                params.worksheet = Some(args.next().ok_or("Missing value for --worksheet")?)
            }
            "--credentials" => {
                let v = args.next().ok_or("Missing value for --credentials")?;
                params.credentials = Some(PathBuf::from(v));
            }
            "--dry-run" => params.dry_run = true,
            "-h" | "--help" => params.help = true,
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }
    Ok(params)
}

/// Prints stage lines to stderr so stdout carries only the result.
struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn stage_done(&mut self, stage: Stage) {
        logd!("CLI: {:?} done", stage);
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let params = parse_args(std::env::args().skip(1))?;
    if params.help {
        eprintln!("{HELP}");
        return Ok(());
    }

    let mut opts = AppOptions::default();
    params.apply(&mut opts);
    report_credentials(&opts.sheet.credentials);

    let services = Services::live(&opts)?;
    let pipeline = services.pipeline(&opts.sheet);
    let url = params.url.as_deref().unwrap_or_default();
    let today = Local::now().date_naive();

    if params.dry_run {
        let Some(url) = crate::pipeline::normalize_url(url) else {
            return Err("Please enter a valid URL.".into());
        };
        let record = pipeline.scrape(url, today, &mut CliProgress)?;
        println!("{}", record.to_row().join("\t"));
        return Ok(());
    }

    let outcome = pipeline.submit(url, today, &mut CliProgress);
    let dialog = outcome.dialog();
    println!("{}: {}", dialog.title, dialog.message);
    match outcome {
        Outcome::Added { row, .. } => {
            println!("Row {row}");
            Ok(())
        }
        _ => Err(dialog.title.into()),
    }
}
