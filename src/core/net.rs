// src/core/net.rs
//
// Page fetch over reqwest's blocking client. Callers run this off the UI thread.

use encoding_rs::{Encoding, UTF_8};
use reqwest::{blocking::Client, header::CONTENT_TYPE};

use crate::{config::NetOptions, error::ScrapeError};

/// Anything that can hand back the body behind a URL.
pub trait PageSource: Send + Sync {
    fn fetch(&self, url: &str) -> Result<String, ScrapeError>;
}

pub fn build_client(opts: &NetOptions) -> Result<Client, reqwest::Error> {
    Client::builder()
        .danger_accept_invalid_certs(opts.accept_invalid_certs)
        .timeout(opts.timeout)
        .user_agent(opts.user_agent.as_str())
        .build()
}

/// One GET, body returned whatever the status code.
/// Error pages still get parsed; the extractor decides whether they're usable.
pub fn fetch_page(client: &Client, url: &str) -> Result<String, ScrapeError> {
    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        logd!("Fetch: {} answered {}, parsing anyway", url, status);
    }
    let header_charset = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(charset_param)
        .map(str::to_owned);
    let bytes = resp.bytes()?;
    logd!("Fetch: {} bytes from {}", bytes.len(), url);
    Ok(decode_body(&bytes, header_charset.as_deref()))
}

/// Charset from the header, else from a `<meta>` tag, else UTF-8. A BOM beats both.
pub fn decode_body(bytes: &[u8], header_charset: Option<&str>) -> String {
    let label = header_charset.map(str::to_owned).or_else(|| meta_charset(bytes));
    let encoding = label
        .and_then(|l| Encoding::for_label(l.trim().as_bytes()))
        .unwrap_or(UTF_8);
    let (text, used, _) = encoding.decode(bytes);
    if used != UTF_8 {
        logd!("Fetch: decoded as {}", used.name());
    }
    text.into_owned()
}

fn charset_param(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches('"'))
    })
}

/// `<meta charset=…>` or `<meta http-equiv=… content="…; charset=…">`, first 1024 bytes only.
fn meta_charset(bytes: &[u8]) -> Option<String> {
    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(1024)]).to_ascii_lowercase();
    let mut rest = head.as_str();
    while let Some(start) = rest.find("<meta") {
        rest = &rest[start + 5..];
        let tag = &rest[..rest.find('>').unwrap_or(rest.len())];
        let Some(at) = tag.find("charset=") else { continue };
        let value = tag[at + 8..].trim_start_matches(['"', '\'', ' ']);
        let end = value
            .find(|c: char| matches!(c, '"' | '\'' | ';' | '/') || c.is_whitespace())
            .unwrap_or(value.len());
        if end > 0 {
            return Some(value[..end].to_string());
        }
    }
    None
}

/// Live HTTP source.
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(opts: &NetOptions) -> Result<Self, ScrapeError> {
        Ok(Self { client: build_client(opts)? })
    }
}

impl PageSource for HttpSource {
    fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        fetch_page(&self.client, url)
    }
}
