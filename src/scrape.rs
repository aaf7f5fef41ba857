// src/scrape.rs
use std::{thread, time::Duration};

use rand::Rng;
use tracing::{error, info, warn};

use crate::{
    config::options::Delay,
    core::Fetch,
    model::{RawScheduleEntry, RawSchedules},
    progress::Progress,
    specs::horari::{self, ParseMode},
};

/// Fetch and parse one facility. A failed request is logged and yields an
/// empty schedule; it never stops the run.
pub fn fetch_schedule(fetcher: &dyn Fetch, id: &str, mode: ParseMode) -> Vec<RawScheduleEntry> {
    match fetcher.fetch(id) {
        Ok(doc) => {
            let entries = horari::parse_schedule(&doc, mode);
            if entries.is_empty() {
                warn!(%id, "no schedule block on page");
            }
            entries
        }
        Err(e) => {
            error!(%id, error = %e, "fetch failed");
            Vec::new()
        }
    }
}

/// Sequential scrape of `ids` with a random pause between requests.
pub fn collect_schedules(
    ids: &[String],
    fetcher: &dyn Fetch,
    delay: Delay,
    mode: ParseMode,
    mut progress: Option<&mut dyn Progress>,
) -> RawSchedules {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(ids.len());
    }

    let mut out = RawSchedules::new();
    for (i, id) in ids.iter().enumerate() {
        let entries = fetch_schedule(fetcher, id, mode);
        info!(%id, periods = entries.len(), "scraped");
        out.insert(id.clone(), entries);

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(id);
        }
        if i + 1 < ids.len() {
            pause(delay);
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    out
}

/// Catalog ids whose schedule is absent or empty in `existing`.
pub fn missing_ids(existing: &RawSchedules, ids: &[String]) -> Vec<String> {
    ids.iter()
        .filter(|id| existing.get(id.as_str()).is_none_or(|s| s.is_empty()))
        .cloned()
        .collect()
}

/// Re-scrape only the missing ids (lenient page reading) and merge them
/// into `existing`. Returns the ids that were retried.
pub fn update_missing(
    existing: &mut RawSchedules,
    ids: &[String],
    fetcher: &dyn Fetch,
    delay: Delay,
    mut progress: Option<&mut dyn Progress>,
) -> Vec<String> {
    let missing = missing_ids(existing, ids);
    info!(missing = missing.len(), total = ids.len(), "ids without schedule");
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("{} ids without schedule", missing.len()));
    }

    let fresh = collect_schedules(&missing, fetcher, delay, ParseMode::Lenient, progress);
    existing.extend(fresh);
    missing
}

fn pause(delay: Delay) {
    if delay.max_ms == 0 {
        return;
    }
    let lo = delay.min_ms.min(delay.max_ms);
    let ms = rand::thread_rng().gen_range(lo..=delay.max_ms);
    thread::sleep(Duration::from_millis(ms)); // be polite
}
