// src/specs/horari.rs
//! Scraping *spec* for a facility detail page.
//!
//! Purpose:
//! - Read the schedule block `div.horari > ul.content-horari > *` and turn it
//!   into raw `{period, details: [{days, hours}]}` entries.
//!
//! Page shape (children of the list, in order):
//! - `li.periode` starts a new period; its `p.periode-title` is the period text,
//!   and it may carry its own `p.dies` / `div.hores` pairs.
//! - `li.dies` / `li.hores` siblings follow with one days or hours text each.
//! - Some pages drop the period and put bare `<li>` items with inner
//!   `p.dies` / `div.hores`.
//!
//! Non-Responsibilities:
//! - No networking, no cleanup beyond visible-text extraction.

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use crate::config::consts::MISSING_PERIOD;
use crate::core::html;
use crate::model::{RawDetail, RawScheduleEntry};

static SCHEDULE_ITEMS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.horari > ul.content-horari > *").unwrap());
static PERIOD_TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p.periode-title").unwrap());
static DAYS: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p.dies").unwrap());
static HOURS: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div.hores").unwrap());

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseMode {
    /// First scrape: details only count once a period has been seen.
    Strict,
    /// Update pass: keep half-filled details and period-less entries.
    Lenient,
}

/// Parse the schedule block of a detail page. Pages without the block
/// yield an empty list.
pub fn parse_schedule(doc: &str, mode: ParseMode) -> Vec<RawScheduleEntry> {
    let page = html::parse_document(doc);
    let mut walk = Walk::new(mode);
    for item in page.select(&SCHEDULE_ITEMS) {
        walk.visit(item);
    }
    walk.finish()
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

struct Walk {
    mode: ParseMode,
    out: Vec<RawScheduleEntry>,
    period: Option<String>,
    details: Vec<RawDetail>,
    /// Last `li.dies` text, waiting for its hours (strict mode).
    days: String,
}

impl Walk {
    fn new(mode: ParseMode) -> Self {
        Self { mode, out: Vec::new(), period: None, details: Vec::new(), days: s!() }
    }

    fn lenient(&self) -> bool {
        self.mode == ParseMode::Lenient
    }

    fn has_pending(&self) -> bool {
        match self.mode {
            ParseMode::Strict => self.period.is_some(),
            ParseMode::Lenient => self.period.is_some() || !self.details.is_empty(),
        }
    }

    fn flush(&mut self) {
        if self.has_pending() {
            let period = self.period.take().unwrap_or_else(|| s!(MISSING_PERIOD));
            let details = std::mem::take(&mut self.details);
            self.out.push(RawScheduleEntry { period, details });
        }
        self.details.clear();
    }

    fn visit(&mut self, el: ElementRef) {
        if html::class_contains(el, "periode") {
            self.flush();
            self.period = Some(html::joined_text(el, &PERIOD_TITLE));

            let days = html::texts(el, &DAYS);
            let hours = html::texts(el, &HOURS);
            self.details.extend(days.into_iter().zip(hours).map(|(d, h)| RawDetail::new(d, h)));
        } else if html::class_contains(el, "dies") {
            let days = html::text_of(el);
            if self.lenient() {
                self.details.push(RawDetail { days: Some(days), hours: None });
            } else {
                self.days = days;
            }
        } else if html::class_contains(el, "hores") {
            let hours = html::text_of(el);
            if self.lenient() {
                match self.details.last_mut() {
                    Some(last) if last.hours.is_none() => last.hours = Some(hours),
                    _ => self.details.push(RawDetail { days: None, hours: Some(hours) }),
                }
            } else if self.period.is_some() {
                self.details.push(RawDetail::new(self.days.clone(), hours));
            }
        } else if self.lenient() && html::is_tag(el, "li") {
            let days = non_empty(html::joined_text(el, &DAYS));
            let hours = non_empty(html::joined_text(el, &HOURS));
            if days.is_some() || hours.is_some() {
                self.details.push(RawDetail { days, hours });
            }
        }
    }

    fn finish(mut self) -> Vec<RawScheduleEntry> {
        self.flush();
        self.out
    }
}
