// src/normalize/days.rs
use crate::model::DayType;

/// A translated days phrase split into its category and exception part.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategorizedDays {
    pub days: String,
    pub day_type: DayType,
    pub exception: String,
}

/// Classify translated days text. Markers are checked in a fixed order
/// (`except`, then `to`, then `,`), so "monday to friday except holidays"
/// is an exception.
pub fn categorize_days(days: &str) -> CategorizedDays {
    if days.contains("except") {
        let (main, exception) = days.split_once(" except ").unwrap_or((days, ""));
        return CategorizedDays {
            days: main.trim().to_string(),
            day_type: DayType::Exception,
            exception: exception.trim().to_string(),
        };
    }

    let day_type = if days.contains("to") {
        DayType::Range
    } else if days.contains(',') {
        DayType::List
    } else {
        DayType::Single
    };
    CategorizedDays { days: s!(days), day_type, exception: s!() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exception_splits_on_first_occurrence() {
        let c = categorize_days("wednesday except holidays");
        assert_eq!(c.day_type, DayType::Exception);
        assert_eq!(c.days, "wednesday");
        assert_eq!(c.exception, "holidays");

        let c = categorize_days("every day except monday except august");
        assert_eq!(c.days, "every day");
        assert_eq!(c.exception, "monday except august");
    }

    #[test]
    fn exception_beats_range() {
        let c = categorize_days("from monday to friday except holidays");
        assert_eq!(c.day_type, DayType::Exception);
        assert_eq!(c.days, "from monday to friday");
    }

    #[test]
    fn exception_marker_without_split_keeps_text() {
        let c = categorize_days("except holidays");
        assert_eq!(c.day_type, DayType::Exception);
        assert_eq!(c.days, "except holidays");
        assert_eq!(c.exception, "");
    }

    #[test]
    fn remaining_categories() {
        assert_eq!(categorize_days("from monday to friday").day_type, DayType::Range);
        assert_eq!(categorize_days("saturday, sunday and holidays").day_type, DayType::List);
        assert_eq!(categorize_days("wednesday").day_type, DayType::Single);
        assert_eq!(categorize_days("").day_type, DayType::Single);
        assert_eq!(categorize_days("wednesday").exception, "");
    }
}
