// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub sheet: SheetConfig,
    pub net: NetOptions,
}

/// Where the service-account key comes from.
#[derive(Clone, PartialEq, Eq)]
pub enum CredentialSource {
    File(PathBuf),
    /// Key JSON handed in directly (tests, secret managers).
    Inline(String),
}

// Never print inline key material.
impl std::fmt::Debug for CredentialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CredentialSource::File(p) => f.debug_tuple("File").field(p).finish(),
            CredentialSource::Inline(_) => f.write_str("Inline(<redacted>)"),
        }
    }
}

impl CredentialSource {
    /// Default key file: next to the executable if present there, else the working dir.
    pub fn default_file() -> Self {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(Path::to_path_buf));
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        CredentialSource::File(resolve_credentials(exe_dir.as_deref(), &cwd))
    }

    /// `Some(exists)` for file sources, `None` for inline keys.
    pub fn file_exists(&self) -> Option<bool> {
        match self {
            CredentialSource::File(p) => Some(p.is_file()),
            CredentialSource::Inline(_) => None,
        }
    }
}

/// Pick the credential path: `exe_dir/<file>` when it exists, otherwise `cwd/<file>`.
pub fn resolve_credentials(exe_dir: Option<&Path>, cwd: &Path) -> PathBuf {
    if let Some(dir) = exe_dir {
        let p = dir.join(CREDENTIALS_FILE);
        if p.is_file() {
            return p;
        }
    }
    cwd.join(CREDENTIALS_FILE)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetConfig {
    pub spreadsheet_id: String,
    pub worksheet_name: String,
    pub credentials: CredentialSource,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            spreadsheet_id: s!(SPREADSHEET_ID),
            worksheet_name: s!(WORKSHEET_NAME),
            credentials: CredentialSource::default_file(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetOptions {
    /// The listing site serves a chain we have to accept as-is.
    pub accept_invalid_certs: bool,
    /// `None` = wait forever.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for NetOptions {
    fn default() -> Self {
        Self {
            accept_invalid_certs: true,
            timeout: None,
            user_agent: s!(USER_AGENT),
        }
    }
}

/// Startup check: report whether the key file is where we expect it.
/// Missing keys don't block startup; the sheet stage reports them later.
pub fn report_credentials(source: &CredentialSource) {
    match source {
        CredentialSource::File(p) if source.file_exists() == Some(true) => {
            println!("Credentials file found at {}", p.display());
            logf!("Config: credentials found at {}", p.display());
        }
        CredentialSource::File(p) => {
            println!("Error: Credentials file not found at {}", p.display());
            loge!("Config: credentials missing at {}", p.display());
        }
        CredentialSource::Inline(_) => {
            logf!("Config: using inline credentials");
        }
    }
}
