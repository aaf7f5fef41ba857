// src/normalize/mod.rs
//! # Normalization core
//!
//! Turns raw scraped schedule records into structured ones. Pure and
//! synchronous: no I/O, no shared state. Every input record yields an output
//! record; text the rules cannot read degrades to the `"to check"` sentinel
//! (periods) or an empty list (hours) instead of failing.
//!
//! ```text
//! RawSchedules ──clean_schedules──▶ RawSchedules (first pass, optional)
//!              ──structure_places─▶ Vec<StructuredPlace>
//! ```
//!
//! All lookup data lives in [`Tables`]; a [`Normalizer`] compiles it once.

pub mod days;
pub mod hours;
pub mod period;
pub mod translate;

use tracing::{debug, warn};

use crate::config::Tables;
use crate::config::consts::TO_CHECK;
use crate::core::sanitize::clean_text;
use crate::error::Result;
use crate::model::{
    RawDetail, RawScheduleEntry, RawSchedules, StructuredDetail, StructuredPlace,
    StructuredSchedule,
};

pub use days::{CategorizedDays, categorize_days};
pub use hours::{extract_hours, standardize_hours};
pub use period::{Period, PeriodStandardizer, format_period};
pub use translate::Translator;

#[derive(Debug)]
pub struct Normalizer {
    translator: Translator,
    periods: PeriodStandardizer,
}

impl Normalizer {
    pub fn new(tables: &Tables) -> Result<Self> {
        Ok(Self {
            translator: Translator::new(tables)?,
            periods: PeriodStandardizer::new(tables)?,
        })
    }

    /// Normalizer over the built-in Catalan tables.
    pub fn catalan() -> Result<Self> {
        Self::new(&Tables::catalan())
    }

    pub fn translate_days(&self, days: &str) -> String {
        self.translator.translate(days)
    }

    pub fn standardize_period(&self, period: &str) -> Period {
        self.periods.standardize(period)
    }

    /// Period as written to the output: canonical range or sentinel, with
    /// leftovers space-to-dash formatted.
    pub fn structure_period(&self, id: &str, period: &str) -> String {
        match self.standardize_period(period) {
            Period::Canonical(p) => p,
            Period::ToCheck => s!(TO_CHECK),
            Period::Unparsed(text) => {
                let out = format_period(&text);
                warn!(%id, raw = %period, kept = %out, "period not recognised; kept as-is");
                out
            }
        }
    }

    pub fn structure_detail(&self, detail: &RawDetail) -> StructuredDetail {
        let CategorizedDays { days, day_type, exception } =
            categorize_days(&self.translate_days(detail.days()));
        let hours = extract_hours(&standardize_hours(detail.hours()));
        StructuredDetail { days, hours, day_type, exception }
    }

    pub fn structure_schedule(&self, id: &str, entry: &RawScheduleEntry) -> StructuredSchedule {
        StructuredSchedule {
            period: self.structure_period(id, &entry.period),
            details: entry.details.iter().map(|d| self.structure_detail(d)).collect(),
        }
    }

    pub fn structure_place(&self, id: &str, entries: &[RawScheduleEntry]) -> StructuredPlace {
        StructuredPlace {
            id: s!(id),
            schedules: entries.iter().map(|e| self.structure_schedule(id, e)).collect(),
        }
    }

    /// One structured record per facility, in id order.
    pub fn structure_places(&self, raw: &RawSchedules) -> Vec<StructuredPlace> {
        let places: Vec<_> = raw.iter().map(|(id, entries)| self.structure_place(id, entries)).collect();
        debug!(places = places.len(), "structured");
        places
    }

    /// First pass: strip artifacts everywhere and reduce periods to the
    /// short `DD/MM DD/MM` form when they contain numeric date pairs.
    pub fn clean_schedules(&self, raw: &RawSchedules) -> RawSchedules {
        raw.iter()
            .map(|(id, entries)| {
                let cleaned = entries
                    .iter()
                    .map(|e| RawScheduleEntry {
                        period: self.periods.short_form(&clean_text(&e.period)),
                        details: e
                            .details
                            .iter()
                            .map(|d| RawDetail {
                                days: d.days.as_deref().map(clean_text),
                                hours: d.hours.as_deref().map(clean_text),
                            })
                            .collect(),
                    })
                    .collect();
                (id.clone(), cleaned)
            })
            .collect()
    }
}
