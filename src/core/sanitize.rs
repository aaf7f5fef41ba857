// src/core/sanitize.rs
use unicode_normalization::UnicodeNormalization;

/// Remnant of a UTF-8 non-breaking space decoded as Latin-1.
const STRAY_ARTIFACT: char = 'Â';

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// First-stage cleaner: drop the stray artifact, trim.
pub fn clean_text(s: &str) -> String {
    s.replace(STRAY_ARTIFACT, "").trim().to_string()
}

/// Second-stage cleaner: [`clean_text`] plus accent folding, so later
/// matching works on plain ASCII.
pub fn clean_folded(s: &str) -> String {
    fold_accents(&clean_text(s)).trim().to_string()
}

/// NFKD-decompose and keep only ASCII. Typographic apostrophes become `'`
/// first so `d’agost` keeps its separator.
pub fn fold_accents(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' | '\u{00B4}' => '\'',
            _ => c,
        })
        .collect::<String>()
        .nfkd()
        .filter(char::is_ascii)
        .collect()
}
