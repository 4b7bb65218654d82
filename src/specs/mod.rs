//! # Scraping "specs" module
//!
//! Page-specific extraction rules. Each spec knows **where the fields live in
//! the HTML** of one kind of page and nothing else.
//!
//! ## What lives here
//! - **Pure HTML parsing** of an already-fetched document.
//! - **Selector choice** for each field, kept as constants next to the parser.
//! - **Light shaping** into a small fields struct the pipeline turns into a row.
//!
//! ## What does **not** live here
//! - **Networking** (`core::net`) and **sheet access** (`sheets`).
//! - **Dialogs or status text**; a missing field is reported as one
//!   `ScrapeError::MissingField` and the front end words it.
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → pipeline::Pipeline::submit → PageSource::fetch
//!                                        → specs::listing::parse_doc
//!                                        → sheets::writer
//! ```
//!
//! ## Testing notes
//! Specs are tested offline against fixtures under `tests/fixtures/`.
pub mod listing;
