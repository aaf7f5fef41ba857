// src/normalize/period.rs
//! Period text → `DD/MM-DD/MM`.
//!
//! Generic rules cover the regular phrasings ("del 15 de juny al 15 de
//! setembre"). The long tail is handled by the two hand-curated tables in
//! [`Tables`]: exact replacements (checked first, so they shadow the generic
//! rules) and a deny-list of phrasings that are flagged for review.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::config::Tables;
use crate::core::sanitize::{clean_folded, normalize_ws};
use crate::error::Result;

static RE_NUMERIC_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d{1,2})(?:\s*/\s*|\s+de\s+|\s*d'\s*|\s+d\s+)(\d{1,2})\b").unwrap()
});
static RE_DASH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*-\s*").unwrap());
static RE_CONNECTOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\s+al?\s+").unwrap());
static RE_SPACED_DATES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{2}/\d{2})\s+(\d{2}/\d{2})\b").unwrap());
static RE_BARE_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{2}$").unwrap());
static RE_SINGLE_DATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{1,2}/\d{1,2}$").unwrap());
static RE_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,2})/(\d{1,2})-(\d{1,2})/(\d{1,2})\b").unwrap());
static RE_SHORT_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d{1,2})\s+(?:de\s+|d'\s*|d\s+)?(\d{1,2})\b").unwrap()
});
// Rewrite older tooling applied before its deny-list lookup; the
// mangled entries in the list were recorded against this form.
static RE_LEGACY_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2})\s*[dDe]\s*(\d{1,2})").unwrap());
static RE_LEGACY_A: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*[aA]\s*").unwrap());

/// Outcome of standardizing one period.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Period {
    /// `DD/MM-DD/MM`
    Canonical(String),
    /// Recognisably not a range; needs a human.
    ToCheck,
    /// No rule applied; the normalized text as it stood.
    Unparsed(String),
}

#[derive(Debug)]
pub struct PeriodStandardizer {
    tables: Tables,
    /// `<day> [de|d'] <month name>` on folded text.
    named_date: Regex,
    /// Whole-word month names, accented or folded (first pass).
    month_word: Regex,
}

fn pad2(s: &str) -> String {
    format!("{s:0>2}")
}

impl PeriodStandardizer {
    pub fn new(tables: &Tables) -> Result<Self> {
        let folded: Vec<String> = tables.months.iter().map(|m| regex::escape(m.folded)).collect();
        let mut any: Vec<String> = tables.months.iter().map(|m| regex::escape(m.catalan)).collect();
        any.extend(folded.iter().cloned());

        let named_date = Regex::new(&format!(
            r"(?i)\b(\d{{1,2}})\s*(?:de\s+|d'\s*|d\s+)?({})\b",
            folded.join("|")
        ))?;
        let month_word = Regex::new(&format!(r"(?i)\b({})\b", any.join("|")))?;

        Ok(Self { tables: *tables, named_date, month_word })
    }

    /// Step 3 date rewrite: every `<D> de <month>`, `<D> d'<MM>` or `D/M`
    /// becomes zero-padded `DD/MM`.
    pub fn normalize_dates(&self, text: &str) -> String {
        let text = self.named_date.replace_all(text, |c: &Captures| {
            let month = self.tables.month_number(&c[2]).unwrap_or("00");
            format!("{}/{}", pad2(&c[1]), month)
        });
        RE_NUMERIC_DATE
            .replace_all(&text, |c: &Captures| format!("{}/{}", pad2(&c[1]), pad2(&c[2])))
            .into_owned()
    }

    pub fn standardize(&self, raw: &str) -> Period {
        let text = clean_folded(raw);

        if let Some(&(_, canonical)) =
            self.tables.period_replacements.iter().find(|(known, _)| text.contains(known))
        {
            return Period::Canonical(s!(canonical));
        }

        let published = normalize_ws(&text);
        let text = self.normalize_dates(&published);
        let text = RE_DASH.replace_all(&text, "-");
        let text = RE_CONNECTOR.replace_all(&text, "-");
        let text = RE_SPACED_DATES.replace_all(&text, "$1-$2");
        let text = text.trim();

        if RE_BARE_NUMBER.is_match(text) || RE_SINGLE_DATE.is_match(text) {
            return Period::ToCheck;
        }

        let legacy = legacy_form(&published);
        if self
            .tables
            .period_to_check
            .iter()
            .any(|p| published.contains(p) || text.contains(p) || legacy.contains(p))
        {
            return Period::ToCheck;
        }

        if let Some(c) = RE_RANGE.captures(text) {
            return canonical_range(&c[1], &c[2], &c[3], &c[4]).map_or(Period::ToCheck, Period::Canonical);
        }

        Period::Unparsed(s!(text))
    }

    /// First-pass short form: month names → numbers, then every
    /// `<D> <MM>`, `<D> de <MM>` or `<D> d'<MM>` pair as `DD/MM`, space-joined.
    /// Falls back to the month-substituted text when no pair is found.
    pub fn short_form(&self, period: &str) -> String {
        let text = self.month_word.replace_all(period, |c: &Captures| {
            s!(self.tables.month_number(&c[1]).unwrap_or("00"))
        });

        let dates: Vec<String> = RE_SHORT_PAIR
            .captures_iter(&text)
            .map(|c| format!("{}/{}", pad2(&c[1]), pad2(&c[2])))
            .collect();

        if dates.is_empty() { text.into_owned() } else { dates.join(" ") }
    }
}

fn legacy_form(text: &str) -> String {
    let text = RE_LEGACY_DATE.replace_all(text, "$1/$2");
    let text = RE_DASH.replace_all(&text, "-");
    RE_LEGACY_A.replace_all(&text, "-").into_owned()
}

fn canonical_range(d1: &str, m1: &str, d2: &str, m2: &str) -> Option<String> {
    let valid = |d: &str, m: &str| {
        let d: u32 = d.parse().unwrap_or(0);
        let m: u32 = m.parse().unwrap_or(0);
        (1..=31).contains(&d) && (1..=12).contains(&m)
    };
    (valid(d1, m1) && valid(d2, m2))
        .then(|| format!("{}/{}-{}/{}", pad2(d1), pad2(m1), pad2(d2), pad2(m2)))
}

/// Leftover periods keep their words but lose spaces.
pub fn format_period(period: &str) -> String {
    period.replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tables::MONTHS;

    fn std() -> PeriodStandardizer {
        PeriodStandardizer::new(&Tables::catalan()).unwrap()
    }

    fn canonical(s: &str) -> Period {
        Period::Canonical(s!(s))
    }

    #[test]
    fn curated_replacements_win() {
        let p = std();
        for &(known, expected) in Tables::catalan().period_replacements {
            assert_eq!(p.standardize(known), canonical(expected), "{known}");
        }
        assert_eq!(
            p.standardize("  Horari d'estiu: de l'1 d'abril al 31 d'octubre  "),
            canonical("01/04-31/10")
        );
    }

    #[test]
    fn every_day_month_pair_is_padded() {
        let p = std();
        for m in MONTHS {
            for d in 1..=31 {
                let out = p.normalize_dates(&format!("{d} de {}", m.folded));
                assert_eq!(out, format!("{d:02}/{}", m.number));
            }
        }
        assert_eq!(p.normalize_dates("l'1 d'agost"), "l'01/08");
        assert_eq!(p.normalize_dates("5 d'08"), "05/08");
    }

    #[test]
    fn catalan_range_becomes_canonical() {
        let p = std();
        assert_eq!(p.standardize("de l'1 d'agost al 31 d'agost"), canonical("01/08-31/08"));
        assert_eq!(p.standardize("Del 15 de juny al 15 de setembre"), canonical("15/06-15/09"));
        assert_eq!(p.standardize("De l’1 de març a 31 de maig"), canonical("01/03-31/05"));
        assert_eq!(p.standardize("1/6 - 30/9"), canonical("01/06-30/09"));
    }

    #[test]
    fn first_pass_output_is_accepted() {
        let p = std();
        assert_eq!(p.standardize("01/08 31/08"), canonical("01/08-31/08"));
        assert_eq!(p.standardize("de l'1 d'08 al 31 d'08"), canonical("01/08-31/08"));
    }

    #[test]
    fn single_dates_and_numbers_need_checking() {
        let p = std();
        assert_eq!(p.standardize("09"), Period::ToCheck);
        assert_eq!(p.standardize("1 de maig"), Period::ToCheck);
        assert_eq!(p.standardize("01/11"), Period::ToCheck);
    }

    #[test]
    fn deny_listed_phrasings_need_checking() {
        let p = std();
        assert_eq!(p.standardize("Tot l'any"), Period::ToCheck);
        assert_eq!(p.standardize("Horari al llarg del curs"), Period::ToCheck);
        assert_eq!(p.standardize("De 09 a 07 Horari habitual"), Period::ToCheck);
        assert_eq!(p.standardize("N/A"), Period::ToCheck);
        assert_eq!(p.standardize("D'10 a marÃ§"), Period::ToCheck);
    }

    #[test]
    fn every_deny_list_entry_is_flagged_as_written() {
        let p = std();
        for &phrase in Tables::catalan().period_to_check {
            assert_eq!(p.standardize(phrase), Period::ToCheck, "{phrase}");
        }
    }

    #[test]
    fn mangled_entries_match_through_the_legacy_rewrite() {
        let p = std();
        assert_eq!(legacy_form("Horari habitual"), "Hor-ri h-bitu-l");
        assert_eq!(legacy_form("Tot l'any"), "Tot l'-ny");
        assert_eq!(p.standardize("Horari al llarg de l'any"), Period::ToCheck);
        assert_eq!(p.standardize("de l'1 d'04-l 31 d'10"), Period::ToCheck);
        assert_eq!(p.standardize("01/11-31/03"), Period::ToCheck);
        assert_eq!(p.standardize("Del 1 de novembre al 31 de març"), Period::ToCheck);
    }

    #[test]
    fn deny_list_is_case_sensitive() {
        let p = std();
        assert_eq!(p.standardize("TOT L'ANY"), Period::Unparsed(s!("TOT L'ANY")));
    }

    #[test]
    fn impossible_dates_need_checking() {
        assert_eq!(std().standardize("32/01-15/13"), Period::ToCheck);
    }

    #[test]
    fn unknown_text_is_left_as_is() {
        assert_eq!(std().standardize("Juliol"), Period::Unparsed(s!("Juliol")));
        assert_eq!(format_period("Horari d'hivern"), "Horari-d'hivern");
    }

    #[test]
    fn short_form_extracts_spaced_pairs() {
        let p = std();
        assert_eq!(p.short_form("1 de 8 a 31 8"), "01/08 31/08");
        assert_eq!(p.short_form("Del 1 agost al 31 agost"), "01/08 31/08");
        assert_eq!(p.short_form("de l'1 d'agost al 31 d'agost"), "01/08 31/08");
        assert_eq!(p.short_form("Del 1 de juliol al 31 d'agost"), "01/07 31/08");
        assert_eq!(p.short_form("De l'1 d'abril al 30 de setembre"), "01/04 30/09");
        assert_eq!(p.short_form("Tot l'any"), "Tot l'any");
        assert_eq!(p.short_form("1 de Març"), "01/03");
    }
}
