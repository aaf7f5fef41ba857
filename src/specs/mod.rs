// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific extraction rules: *where the ground truth lives in the HTML*
//! and how to lift it into raw records.
//!
//! ## What lives here
//! - **Pure HTML parsing** of already-fetched pages (no networking).
//! - **Selector choice** for the fixed page shapes: CSS selectors parsed once
//!   with `scraper`, text pulled through the `core::html` helpers.
//!
//! ## What does **not** live here
//! - Fetching and pacing (`scrape`), persistence (`file`), and any text
//!   normalization beyond visible-text extraction (`normalize`).
//!
//! ## Testing notes
//! - Specs are tested offline against inline HTML fixtures.
pub mod catalog;
pub mod horari;
