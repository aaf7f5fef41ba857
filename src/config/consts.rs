// src/config/consts.rs

// Net config
pub const BASE_URL: &str =
    "https://www.barcelona.cat/barcelona-pel-clima/ca/ajuntament-maps/data/getDetall?bloc=ajuntament_maps&lang=ca&id=";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Scrape
pub const DELAY_MIN_MS: u64 = 500; // be polite
pub const DELAY_MAX_MS: u64 = 2_000;
pub const MISSING_PERIOD: &str = "N/A";

// Data files
pub const DATA_DIR: &str = "data";
pub const CATALOG_FILE: &str = "json_refugis.json";
pub const SCHEDULES_FILE: &str = "schedules.json";
pub const CLEANED_FILE: &str = "cleaned_schedules.json";
pub const STRUCTURED_FILE: &str = "structured_places.json";

// Output
pub const JSON_INDENT: &[u8] = b"    ";
pub const TO_CHECK: &str = "to check";
