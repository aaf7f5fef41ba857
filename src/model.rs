// src/model.rs
//! Record shapes at each stage of the pipeline.
//!
//! Raw records come from the extractor (or a previously written
//! `schedules.json`); structured records are the normalizer's output.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Facility id → schedule entries, as scraped.
pub type RawSchedules = BTreeMap<String, Vec<RawScheduleEntry>>;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawScheduleEntry {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub period: String,
    #[serde(default)]
    pub details: Vec<RawDetail>,
}

/// One days/hours pair. Either side may be missing on the page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDetail {
    #[serde(default)]
    pub days: Option<String>,
    #[serde(default)]
    pub hours: Option<String>,
}

impl RawDetail {
    pub fn new(days: impl Into<String>, hours: impl Into<String>) -> Self {
        Self { days: Some(days.into()), hours: Some(hours.into()) }
    }

    pub fn days(&self) -> &str {
        self.days.as_deref().unwrap_or("")
    }

    pub fn hours(&self) -> &str {
        self.hours.as_deref().unwrap_or("")
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredPlace {
    pub id: String,
    pub schedules: Vec<StructuredSchedule>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredSchedule {
    /// `DD/MM-DD/MM`, or `"to check"`.
    pub period: String,
    pub details: Vec<StructuredDetail>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredDetail {
    pub days: String,
    pub hours: Vec<HourRange>,
    pub day_type: DayType,
    pub exception: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourRange {
    pub start: String,
    pub end: String,
}

impl HourRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self { start: start.into(), end: end.into() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayType {
    Single,
    List,
    Range,
    Exception,
}
