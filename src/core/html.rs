// src/core/html.rs
// Small helpers over `scraper` for the fixed page shapes we read.

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;

pub fn parse_document(doc: &str) -> Html {
    Html::parse_document(doc)
}

/// Visible text of an element: text nodes joined by a space, whitespace
/// (including `&nbsp;`) collapsed.
pub fn text_of(el: ElementRef) -> String {
    normalize_ws(&el.text().collect::<Vec<_>>().join(" "))
}

/// Text of every `sel` match below `el`, in document order.
pub fn texts(el: ElementRef, sel: &Selector) -> Vec<String> {
    el.select(sel).map(text_of).collect()
}

/// All `sel` matches below `el` as one line.
pub fn joined_text(el: ElementRef, sel: &Selector) -> String {
    normalize_ws(&texts(el, sel).join(" "))
}

/// Substring test on the raw `class` attribute, so `periode` also matches
/// `periode actiu`.
pub fn class_contains(el: ElementRef, needle: &str) -> bool {
    el.value().attr("class").is_some_and(|c| c.contains(needle))
}

pub fn is_tag(el: ElementRef, name: &str) -> bool {
    el.value().name().eq_ignore_ascii_case(name)
}
