// tests/pipeline_files.rs
//
// Runner stages against files on disk, with a stub page source for the
// network stages.
//
use std::fs;
use std::path::Path;

use horaris_scrape::Result;
use horaris_scrape::config::options::{Command, Delay, Params};
use horaris_scrape::core::Fetch;
use horaris_scrape::file::read_json;
use horaris_scrape::model::{RawSchedules, StructuredPlace};
use horaris_scrape::runner::{run, run_with_fetcher};

struct FixturePages;

impl Fetch for FixturePages {
    fn fetch(&self, id: &str) -> Result<String> {
        Ok(match id {
            "2" => String::from("<html><p>Sense horari</p></html>"),
            _ => format!(
                r#"<div class="horari"><ul class="content-horari">
                    <li class="periode">
                      <p class="periode-title">Del 1 agost al 31 agost</p>
                      <p class="dies">Dimecres excepte festius</p>
                      <div class="hores">De 9 a 14h</div>
                    </li>
                    <li class="dies">Dissabte</li><li class="hores">De 10 a 13h (id {id})</li>
                </ul></div>"#
            ),
        })
    }
}

fn params(command: Command, input: &Path, output: &Path) -> Params {
    let mut p = Params::new(command);
    p.input = Some(input.to_path_buf());
    p.output = Some(output.to_path_buf());
    p.delay = Delay::NONE;
    p
}

#[test]
fn scrape_clean_structure() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("json_refugis.json");
    let schedules = dir.path().join("data/schedules.json");
    let cleaned = dir.path().join("data/cleaned_schedules.json");
    let structured = dir.path().join("data/structured_places.json");
    fs::write(&catalog, r#"{"data": [{"id": "1"}, {"id": 2}]}"#).unwrap();

    let s = run_with_fetcher(&params(Command::Scrape, &catalog, &schedules), &FixturePages, None).unwrap();
    assert_eq!(s.records, 2);
    let raw: RawSchedules = read_json(&schedules).unwrap();
    assert!(raw["2"].is_empty());
    assert_eq!(raw["1"][0].details.len(), 2);

    run(&params(Command::Clean, &schedules, &cleaned), None).unwrap();
    let first: RawSchedules = read_json(&cleaned).unwrap();
    assert_eq!(first["1"][0].period, "01/08 31/08");

    let s = run(&params(Command::Structure, &cleaned, &structured), None).unwrap();
    assert_eq!(s.records, 2);
    let places: Vec<StructuredPlace> = read_json(&structured).unwrap();
    assert_eq!(places[0].id, "1");
    assert_eq!(places[0].schedules[0].period, "01/08-31/08");
    assert_eq!(places[0].schedules[0].details[0].days, "wednesday");
    assert_eq!(places[0].schedules[0].details[1].hours[0].start, "10:00");
    assert!(places[1].schedules.is_empty());

    // indented with four spaces, accents untouched
    let text = fs::read_to_string(&structured).unwrap();
    assert!(text.starts_with("[\n    {"));
}

#[test]
fn update_fills_only_missing_ids() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("json_refugis.json");
    let schedules = dir.path().join("schedules.json");
    fs::write(&catalog, r#"{"data": [{"id": "1"}, {"id": "3"}]}"#).unwrap();
    fs::write(&schedules, r#"{"1": [{"period": "Tot l'any", "details": []}], "3": []}"#).unwrap();

    let mut p = params(Command::Update, &schedules, &schedules);
    p.catalog = Some(catalog);
    run_with_fetcher(&p, &FixturePages, None).unwrap();

    let raw: RawSchedules = read_json(&schedules).unwrap();
    assert_eq!(raw["1"][0].period, "Tot l'any");
    assert_eq!(raw["3"][0].period, "Del 1 agost al 31 agost");
    assert_eq!(raw["3"][0].details[1].hours.as_deref(), Some("De 10 a 13h (id 3)"));
}

#[test]
fn structure_tolerates_nulls_and_missing_details() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("schedules.json");
    let output = dir.path().join("structured.json");
    fs::write(
        &input,
        r#"{"5": [{"period": "Del 1 de juliol al 31 d'agost", "details": [{"days": null, "hours": "De 9 a 14h"}]},
                 {"period": "Tardor"}]}"#,
    )
    .unwrap();

    run(&params(Command::Structure, &input, &output), None).unwrap();
    let places: Vec<StructuredPlace> = read_json(&output).unwrap();
    let s = &places[0].schedules;
    assert_eq!(s[0].period, "01/07-31/08");
    assert_eq!(s[0].details[0].days, "");
    assert_eq!(s[0].details[0].hours.len(), 1);
    assert_eq!(s[1].period, "Tardor");
    assert!(s[1].details.is_empty());
}

#[test]
fn unreadable_input_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    let err = run(&params(Command::Clean, &missing, &dir.path().join("o.json")), None).unwrap_err();
    assert!(err.to_string().contains("nope.json"));
}
