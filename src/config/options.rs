// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Fetch every catalog id and write the raw schedules.
    Scrape,
    /// Re-fetch only ids with an empty or missing schedule.
    Update,
    /// First pass: strip artifacts, short-form period dates.
    Clean,
    /// Full normalization into structured records.
    Structure,
}

impl Command {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "scrape" => Some(Command::Scrape),
            "update" => Some(Command::Update),
            "clean" => Some(Command::Clean),
            "structure" => Some(Command::Structure),
            _ => None,
        }
    }

    pub fn default_input(&self) -> PathBuf {
        let file = match self {
            Command::Scrape => CATALOG_FILE,
            Command::Update | Command::Clean => SCHEDULES_FILE,
            Command::Structure => CLEANED_FILE,
        };
        data_path(file)
    }

    pub fn default_output(&self) -> PathBuf {
        let file = match self {
            Command::Scrape | Command::Update => SCHEDULES_FILE,
            Command::Clean => CLEANED_FILE,
            Command::Structure => STRUCTURED_FILE,
        };
        data_path(file)
    }
}

pub fn data_path(file: &str) -> PathBuf {
    Path::new(DATA_DIR).join(file)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Delay {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl Delay {
    pub const NONE: Delay = Delay { min_ms: 0, max_ms: 0 };
}

impl Default for Delay {
    fn default() -> Self {
        Self { min_ms: DELAY_MIN_MS, max_ms: DELAY_MAX_MS }
    }
}

#[derive(Clone, Debug)]
pub struct Params {
    pub command: Command,
    pub input: Option<PathBuf>,      // overrides the command's default input
    pub output: Option<PathBuf>,     // overrides the command's default output
    pub catalog: Option<PathBuf>,    // catalog for `update` (scrape reads it as input)
    pub delay: Delay,
    pub print: bool,                 // echo result to stdout
    pub verbose: bool,
}

impl Params {
    pub fn new(command: Command) -> Self {
        Self {
            command,
            input: None,
            output: None,
            catalog: None,
            delay: Delay::default(),
            print: false,
            verbose: false,
        }
    }

    pub fn input_path(&self) -> PathBuf {
        self.input.clone().unwrap_or_else(|| self.command.default_input())
    }

    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| self.command.default_output())
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.catalog.clone().unwrap_or_else(|| data_path(CATALOG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_chain_through_default_files() {
        assert_eq!(Command::Scrape.default_output(), Command::Clean.default_input());
        assert_eq!(Command::Clean.default_output(), Command::Structure.default_input());
        assert_eq!(Command::Update.default_input(), Command::Update.default_output());
    }

    #[test]
    fn overrides_win() {
        let mut p = Params::new(Command::Structure);
        p.output = Some(PathBuf::from("x.json"));
        assert_eq!(p.output_path(), PathBuf::from("x.json"));
        assert_eq!(p.input_path(), data_path(CLEANED_FILE));
    }
}
