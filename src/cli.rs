// src/cli.rs
use std::{env, path::PathBuf};

use crate::config::options::{Command, Params};
use crate::error::{Error, Result};
use crate::progress::BarProgress;

pub const HELP: &str = include_str!("cli_help.txt");

pub enum Parsed {
    Run(Params),
    Help,
}

pub fn run() -> Result<()> {
    let params = match parse_args(env::args().skip(1))? {
        Parsed::Run(p) => p,
        Parsed::Help => {
            eprintln!("{HELP}");
            return Ok(());
        }
    };
    crate::log::init(params.verbose);

    let mut bar = BarProgress::new();
    let summary = crate::runner::run(&params, Some(&mut bar))?;
    eprintln!("Wrote {} ({} records)", summary.output.display(), summary.records);
    Ok(())
}

fn usage(msg: impl Into<String>) -> Error {
    Error::Usage(msg.into())
}

fn next_value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String> {
    args.next().ok_or_else(|| usage(format!("Missing value for {flag}")))
}

fn parse_ms(v: &str, flag: &str) -> Result<u64> {
    v.parse().map_err(|_| usage(format!("Invalid {flag}: {v}")))
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Parsed> {
    let mut args = args.into_iter();

    let Some(first) = args.next() else { return Ok(Parsed::Help) };
    if matches!(first.as_str(), "-h" | "--help" | "help") {
        return Ok(Parsed::Help);
    }
    let command = Command::parse(&first).ok_or_else(|| usage(format!("Unknown command: {first}")))?;
    let mut params = Params::new(command);

    while let Some(a) = args.next() {
        match a.as_str() {
            "-i" | "--input" => params.input = Some(PathBuf::from(next_value(&mut args, &a)?)),
            "-o" | "--output" => params.output = Some(PathBuf::from(next_value(&mut args, &a)?)),
            "--catalog" => params.catalog = Some(PathBuf::from(next_value(&mut args, &a)?)),
            "--min-delay" => params.delay.min_ms = parse_ms(&next_value(&mut args, &a)?, &a)?,
            "--max-delay" => params.delay.max_ms = parse_ms(&next_value(&mut args, &a)?, &a)?,
            "--print" => params.print = true,
            "-v" | "--verbose" => params.verbose = true,
            "-h" | "--help" => return Ok(Parsed::Help),
            _ => return Err(usage(format!("Unknown arg: {a}"))),
        }
    }

    if params.delay.min_ms > params.delay.max_ms {
        return Err(usage("--min-delay must not exceed --max-delay"));
    }
    Ok(Parsed::Run(params))
}
