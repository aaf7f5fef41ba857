// src/file.rs

use std::{
    fs,
    io::Write,
    path::Path,
};

use serde::{Serialize, de::DeserializeOwned};
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::config::consts::JSON_INDENT;
use crate::error::{Error, Result};
use crate::model::RawSchedules;
use crate::specs::catalog::Catalog;

pub fn ensure_directory(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| Error::Write { path: dir.to_path_buf(), source })
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path)
        .map_err(|source| Error::Read { path: path.to_path_buf(), source })?;
    serde_json::from_str(&text).map_err(|source| Error::Json { path: path.to_path_buf(), source })
}

/// Indented JSON, non-ASCII kept as-is, trailing newline.
pub fn to_json_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
    value.serialize(&mut ser).map_err(Error::Encode)?;
    buf.push(b'\n');
    // serde_json only emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Ensure parent dir exists; create/truncate file; write JSON.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let contents = to_json_string(value)?;
    fs::write(path, contents).map_err(|source| Error::Write { path: path.to_path_buf(), source })
}

pub fn load_catalog_ids(path: &Path) -> Result<Vec<String>> {
    let catalog: Catalog = read_json(path)?;
    Ok(catalog.ids())
}

/// Human-readable listing of raw schedules.
pub fn write_listing<W: Write>(out: &mut W, schedules: &RawSchedules) -> std::io::Result<()> {
    for (id, entries) in schedules {
        writeln!(out, "ID: {id}")?;
        for entry in entries {
            writeln!(out, "  Period: {}", entry.period)?;
            for d in &entry.details {
                writeln!(out, "    Days: {}", d.days())?;
                writeln!(out, "    Hours: {}", d.hours())?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RawDetail, RawScheduleEntry};

    #[test]
    fn json_is_four_space_indented_and_keeps_accents() {
        let mut raw = RawSchedules::new();
        raw.insert(s!("1"), vec![RawScheduleEntry { period: s!("Tot l'any"), details: vec![RawDetail::new("Dimecres", "Romandrà tancada")] }]);
        let text = to_json_string(&raw).unwrap();
        assert!(text.contains("\n    \"1\": ["));
        assert!(text.contains("Romandrà tancada"));
        assert!(text.ends_with("]\n}\n"));
    }

    #[test]
    fn listing_prints_every_detail() {
        let mut raw = RawSchedules::new();
        raw.insert(s!("9"), vec![RawScheduleEntry { period: s!("Estiu"), details: vec![RawDetail { days: Some(s!("Dilluns")), hours: None }] }]);
        let mut out = Vec::new();
        write_listing(&mut out, &raw).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "ID: 9\n  Period: Estiu\n    Days: Dilluns\n    Hours: \n\n");
    }
}
