// src/runner.rs
use std::io::{self, Write};
use std::path::PathBuf;

use tracing::info;

use crate::{
    config::options::{Command, Params},
    core::{Fetch, HttpFetcher},
    error::{Error, Result},
    file::{self, load_catalog_ids, read_json, write_json},
    model::RawSchedules,
    normalize::Normalizer,
    progress::Progress,
    scrape,
    specs::horari::ParseMode,
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub output: PathBuf,
    pub records: usize,
}

/// Top-level runner: dispatch on command, hitting the network only for
/// `scrape` / `update`.
pub fn run(params: &Params, progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    match params.command {
        Command::Scrape | Command::Update => {
            let fetcher = HttpFetcher::new()?;
            run_with_fetcher(params, &fetcher, progress)
        }
        Command::Clean => clean(params),
        Command::Structure => structure(params),
    }
}

/// Same as [`run`] with an injected page source.
pub fn run_with_fetcher(
    params: &Params,
    fetcher: &dyn Fetch,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    match params.command {
        Command::Scrape => {
            let ids = load_catalog_ids(&params.input_path())?;
            info!(ids = ids.len(), "starting scrape");
            let schedules = scrape::collect_schedules(&ids, fetcher, params.delay, ParseMode::Strict, progress);
            finish_raw(params, &schedules)
        }
        Command::Update => {
            let ids = load_catalog_ids(&params.catalog_path())?;
            let mut schedules: RawSchedules = read_json(&params.input_path())?;
            let retried = scrape::update_missing(&mut schedules, &ids, fetcher, params.delay, progress);
            info!(retried = retried.len(), "update done");
            finish_raw(params, &schedules)
        }
        Command::Clean => clean(params),
        Command::Structure => structure(params),
    }
}

fn clean(params: &Params) -> Result<RunSummary> {
    let raw: RawSchedules = read_json(&params.input_path())?;
    let cleaned = Normalizer::catalan()?.clean_schedules(&raw);
    finish_raw(params, &cleaned)
}

fn structure(params: &Params) -> Result<RunSummary> {
    let raw: RawSchedules = read_json(&params.input_path())?;
    let places = Normalizer::catalan()?.structure_places(&raw);

    let output = params.output_path();
    write_json(&output, &places)?;
    if params.print {
        print!("{}", file::to_json_string(&places)?);
    }
    info!(places = places.len(), output = %output.display(), "wrote structured places");
    Ok(RunSummary { output, records: places.len() })
}

fn finish_raw(params: &Params, schedules: &RawSchedules) -> Result<RunSummary> {
    let output = params.output_path();
    write_json(&output, schedules)?;
    if params.print {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        file::write_listing(&mut lock, schedules)
            .and_then(|_| lock.flush())
            .map_err(|source| Error::Write { path: PathBuf::from("<stdout>"), source })?;
    }
    info!(ids = schedules.len(), output = %output.display(), "wrote schedules");
    Ok(RunSummary { output, records: schedules.len() })
}
