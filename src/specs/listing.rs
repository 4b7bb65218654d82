// src/specs/listing.rs
//
// Listing page: three fields, one selector each, first match wins.

use scraper::{Html, Selector};

use crate::error::ScrapeError;

pub const TITLE_SELECTOR: &str = "div.product-title";
pub const SKU_SELECTOR: &str = "div.product-sku";
pub const DESCRIPTION_SELECTOR: &str = "div.product-summary > div";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingFields {
    pub title: String,
    pub identifier: String,
    pub description: String,
}

fn selector(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector(format!("{css}: {e}")))
}

/// All descendant text of the first match, trimmed.
fn first_text(doc: &Html, css: &str) -> Result<String, ScrapeError> {
    let sel = selector(css)?;
    match doc.select(&sel).next() {
        Some(el) => Ok(el.text().collect::<String>().trim().to_string()),
        None => {
            logd!("Extract: no match for `{}`", css);
            Err(ScrapeError::MissingField)
        }
    }
}

pub fn parse_doc(html: &str) -> Result<ListingFields, ScrapeError> {
    let doc = Html::parse_document(html);
    Ok(ListingFields {
        title: first_text(&doc, TITLE_SELECTOR)?,
        identifier: first_text(&doc, SKU_SELECTOR)?,
        description: first_text(&doc, DESCRIPTION_SELECTOR)?,
    })
}
