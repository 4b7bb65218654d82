// src/sheets/google.rs
//
// Google Sheets v4 over REST. One token per `open`; the worksheet handle keeps
// it for the column read and the row write that follow.

use reqwest::{
    StatusCode, Url,
    blocking::{Client, Response},
};
use serde::{Deserialize, Serialize};

use super::{SheetBackend, Worksheet, auth};
use crate::{
    config::{NetOptions, SheetConfig, consts::SHEETS_API},
    error::SheetError,
};

pub struct GoogleSheets {
    http: Client,
    api_base: String,
}

impl GoogleSheets {
    /// Certificate checks stay on here; only the listing fetch relaxes them.
    pub fn new(opts: &NetOptions) -> Result<Self, SheetError> {
        Self::with_api_base(opts, SHEETS_API)
    }

    /// Same client, different `spreadsheets` root (proxies, local test servers).
    pub fn with_api_base(opts: &NetOptions, api_base: impl Into<String>) -> Result<Self, SheetError> {
        let http = Client::builder()
            .timeout(opts.timeout)
            .user_agent(opts.user_agent.as_str())
            .build()?;
        Ok(Self { http, api_base: api_base.into() })
    }
}

impl SheetBackend for GoogleSheets {
    fn open(&self, config: &SheetConfig) -> Result<Box<dyn Worksheet>, SheetError> {
        let key = auth::ServiceAccountKey::load(&config.credentials)?;
        let token = auth::fetch_token(&self.http, &key)?;

        let url = endpoint(&self.api_base, &config.spreadsheet_id, &[])?;
        let resp = self
            .http
            .get(url)
            .query(&[("fields", "sheets.properties.title")])
            .bearer_auth(&token)
            .send()?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Err(SheetError::SpreadsheetNotFound);
        }
        let meta: SpreadsheetMeta = check(resp)?.json()?;

        if !meta.has_sheet(&config.worksheet_name) {
            return Err(SheetError::WorksheetNotFound(config.worksheet_name.clone()));
        }

        Ok(Box::new(RemoteWorksheet {
            http: self.http.clone(),
            api_base: self.api_base.clone(),
            token,
            spreadsheet_id: config.spreadsheet_id.clone(),
            title: config.worksheet_name.clone(),
        }))
    }
}

struct RemoteWorksheet {
    http: Client,
    api_base: String,
    token: String,
    spreadsheet_id: String,
    title: String,
}

impl Worksheet for RemoteWorksheet {
    fn title(&self) -> &str {
        &self.title
    }

    fn col_values(&self, col: usize) -> Result<Vec<String>, SheetError> {
        let range = column_range(&self.title, col);
        let url = endpoint(&self.api_base, &self.spreadsheet_id, &["values", range.as_str()])?;
        let resp = self
            .http
            .get(url)
            .query(&[("majorDimension", "COLUMNS")])
            .bearer_auth(&self.token)
            .send()?;
        let body: ValueRange = check(resp)?.json()?;
        Ok(body.values.into_iter().next().unwrap_or_default())
    }

    fn update_row(&self, row: usize, values: &[String]) -> Result<(), SheetError> {
        let range = row_range(&self.title, row, values.len());
        let url = endpoint(&self.api_base, &self.spreadsheet_id, &["values", range.as_str()])?;
        let body = ValueRange {
            range: Some(range),
            major_dimension: Some(s!("ROWS")),
            values: vec![values.to_vec()],
        };
        let resp = self
            .http
            .put(url)
            .query(&[("valueInputOption", "RAW")])
            .bearer_auth(&self.token)
            .json(&body)
            .send()?;
        check(resp)?;
        Ok(())
    }
}

#[derive(Deserialize)]
struct SpreadsheetMeta {
    #[serde(default)]
    sheets: Vec<SheetEntry>,
}

#[derive(Deserialize)]
struct SheetEntry {
    properties: SheetProperties,
}

#[derive(Deserialize)]
struct SheetProperties {
    title: String,
}

impl SpreadsheetMeta {
    fn has_sheet(&self, title: &str) -> bool {
        self.sheets.iter().any(|s| s.properties.title == title)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValueRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    major_dimension: Option<String>,
    #[serde(default)]
    values: Vec<Vec<String>>,
}

#[derive(Deserialize)]
struct ApiErrorEnvelope {
    error: ApiError,
}

#[derive(Deserialize)]
struct ApiError {
    message: String,
}

/// `<base>/<id>/<segments…>`, each segment percent-encoded.
fn endpoint(base: &str, spreadsheet_id: &str, segments: &[&str]) -> Result<Url, SheetError> {
    let mut url = Url::parse(base).map_err(|e| SheetError::Access(format!("bad api base {base}: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| SheetError::Access(s!("sheets endpoint cannot take a path")))?
        .push(spreadsheet_id)
        .extend(segments);
    Ok(url)
}

fn check(resp: Response) -> Result<Response, SheetError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().unwrap_or_default();
    Err(SheetError::Access(api_error(status, &body)))
}

fn api_error(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ApiErrorEnvelope>(body) {
        Ok(env) => format!("HTTP {}: {}", status.as_u16(), env.error.message),
        Err(_) => format!("HTTP {status}"),
    }
}

/// A1 sheet prefix; single quotes inside the title are doubled.
pub fn quote_title(title: &str) -> String {
    join!("'", &title.replace('\'', "''"), "'")
}

/// 1 → A, 26 → Z, 27 → AA.
pub fn column_letter(col: usize) -> String {
    let mut n = col;
    let mut out = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        out.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

/// Whole column, e.g. `'Tab'!A:A`.
pub fn column_range(title: &str, col: usize) -> String {
    let c = column_letter(col);
    format!("{}!{c}:{c}", quote_title(title))
}

/// `width` cells of one row from column A, e.g. `'Tab'!A8:E8`.
pub fn row_range(title: &str, row: usize, width: usize) -> String {
    let last = column_letter(width.max(1));
    format!("{}!A{row}:{last}{row}", quote_title(title))
}
