// src/normalize/translate.rs
// Joined-word repair and Catalan → English day/month translation.

use regex::{NoExpand, Regex};

use crate::config::Tables;
use crate::core::sanitize::{clean_folded, normalize_ws};
use crate::error::Result;

#[derive(Debug)]
struct Rule {
    re: Regex,
    to: &'static str,
}

impl Rule {
    fn apply(&self, text: &str) -> String {
        self.re.replace_all(text, NoExpand(self.to)).into_owned()
    }
}

/// Plain substring, any case.
fn substring_rule(from: &str, to: &'static str) -> Result<Rule> {
    Ok(Rule { re: Regex::new(&format!("(?i){}", regex::escape(from)))?, to })
}

/// Whole word (or phrase), any case.
fn word_rule(from: &str, to: &'static str) -> Result<Rule> {
    Ok(Rule { re: Regex::new(&format!(r"(?i)\b{}\b", regex::escape(from)))?, to })
}

#[derive(Debug)]
pub struct Translator {
    joined: Vec<Rule>,
    words: Vec<Rule>,
}

impl Translator {
    pub fn new(tables: &Tables) -> Result<Self> {
        let joined = tables
            .joined_words
            .iter()
            .map(|&(from, to)| substring_rule(from, to))
            .collect::<Result<Vec<_>>>()?;

        let mut words = tables
            .day_words
            .iter()
            .map(|&(from, to)| word_rule(from, to))
            .collect::<Result<Vec<_>>>()?;
        for m in tables.months {
            words.push(word_rule(m.folded, m.english)?);
        }

        Ok(Self { joined, words })
    }

    /// Re-insert the space in known fused tokens. Unknown fusions pass through.
    pub fn fix_joined_words(&self, text: &str) -> String {
        self.joined.iter().fold(s!(text), |acc, rule| rule.apply(&acc))
    }

    /// Clean, fold, repair and translate a days phrase.
    /// Output is lowercase English with single spaces.
    pub fn translate(&self, days: &str) -> String {
        let text = normalize_ws(&clean_folded(days).to_lowercase());
        let text = self.fix_joined_words(&text);
        let text = self.words.iter().fold(text, |acc, rule| rule.apply(&acc));
        normalize_ws(&text)
    }
}
