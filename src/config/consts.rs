// src/config/consts.rs

// Target spreadsheet
pub const SPREADSHEET_ID: &str = "1zAeHbVYi2NHvx3r8tiWQEtQaKpHgL2Gp3lT4u42G3lY";
pub const WORKSHEET_NAME: &str = "SalvageSalvage";

// Service-account key, looked up next to the executable, then in the working dir
pub const CREDENTIALS_FILE: &str = "scrap-salvagesalvage-data-71cd1942426e.json";

pub const SCOPES: &[&str] = &[
    "https://spreadsheets.google.com/feeds",
    "https://www.googleapis.com/auth/spreadsheets",
    "https://www.googleapis.com/auth/drive.file",
    "https://www.googleapis.com/auth/drive",
];

pub const SHEETS_API: &str = "https://sheets.googleapis.com/v4/spreadsheets";
pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
pub const TOKEN_LIFETIME_SECS: i64 = 3600;

// Record
pub const STATUS: &str = "Salvage";
pub const DATE_FORMAT: &str = "%Y,%m,%d";

// Net
pub const USER_AGENT: &str = concat!("salvage_scrape/", env!("CARGO_PKG_VERSION"));

// Local log
pub const LOG_FILE: &str = ".store/debug.log";
