// src/normalize/hours.rs
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::core::sanitize::clean_folded;
use crate::model::HourRange;

static RE_FROM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bde\b").unwrap());
static RE_TO: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\ba\b").unwrap());
static RE_UNIT_H: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?P<h>\d{1,2})(?P<m>[:.]\d{2})?\s*h\b").unwrap());

// H, HH, H:MM, HH.MM or HHhMM, twice, joined by "to". A pair only counts
// as a time range when at least one side carries minutes.
static RE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?P<sh>\d{1,2})(?:[:.h](?P<sm>\d{2}))?\s*a?\s*to\s*(?P<eh>\d{1,2})(?:[:.h](?P<em>\d{2}))?\b",
    )
    .unwrap()
});

/// Clean, lowercase, translate connectors, drop the `h` unit after numbers.
/// A whole hour written with the unit (`14h`) keeps it as `14:00`.
pub fn standardize_hours(hours: &str) -> String {
    let text = clean_folded(hours).to_lowercase();
    let text = RE_FROM.replace_all(&text, "from");
    let text = RE_TO.replace_all(&text, "to");
    RE_UNIT_H
        .replace_all(&text, |c: &Captures| match c.name("m") {
            Some(m) => format!("{}{}", &c["h"], m.as_str()),
            None => format!("{}:00", &c["h"]),
        })
        .into_owned()
}

/// Every `start to end` pair in standardized hour text. Pairs with an
/// impossible time are skipped, so the result never holds a malformed entry.
pub fn extract_hours(hours: &str) -> Vec<HourRange> {
    RE_RANGE
        .captures_iter(hours)
        .filter(|c| c.name("sm").is_some() || c.name("em").is_some())
        .filter_map(|c| {
            let start = time_of(&c, "sh", "sm")?;
            let end = time_of(&c, "eh", "em")?;
            Some(HourRange { start, end })
        })
        .collect()
}

fn time_of(c: &Captures, hour: &str, minute: &str) -> Option<String> {
    let h: u32 = c.name(hour)?.as_str().parse().ok()?;
    let m: u32 = c.name(minute).map_or(Some(0), |m| m.as_str().parse().ok())?;
    (h <= 24 && m <= 59).then(|| format!("{h:02}:{m:02}"))
}
