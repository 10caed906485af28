//! Date and time validity rules.
//!
//! The rule functions are strict: an empty value fails them. The "only if
//! filled" condition lives in [`CalendarPicker::validate`](crate::CalendarPicker::validate),
//! which skips every rule while the picker holds no component at all.

use crate::{Components, calendar};

/// The date components form a real calendar date.
///
/// Any missing date component fails the rule.
///
/// ```
/// use calendar_picker::{Components, rules::date_is_valid};
/// assert!(date_is_valid(&Components::date(2024, 2, 29)));
/// assert!(!date_is_valid(&Components::date(2023, 2, 29)));
/// ```
pub fn date_is_valid(components: &Components) -> bool {
    match (components.year, components.month, components.day) {
        (Some(year), Some(month), Some(day)) => calendar::checkdate(year, month, day),
        _ => false,
    }
}

/// Hour in 0..=23, minute and second in 0..=59, all three present.
pub fn time_is_valid(components: &Components) -> bool {
    match (components.hour, components.minute, components.second) {
        (Some(hour), Some(minute), Some(second)) => {
            (0..=23).contains(&hour) && (0..=59).contains(&minute) && (0..=59).contains(&second)
        }
        _ => false,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    Date,
    Time,
}

impl Rule {
    pub fn holds(self, components: &Components) -> bool {
        match self {
            Rule::Date => date_is_valid(components),
            Rule::Time => time_is_valid(components),
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::Date => write!(f, "date"),
            Rule::Time => write!(f, "time"),
        }
    }
}

/// A failed rule together with the message to show the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleViolation {
    pub rule: Rule,
    pub message: String,
}

impl std::fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_date_fails() {
        let mut c = Components::date(2024, 1, 1);
        c.month = None;
        assert!(!date_is_valid(&c));
        assert!(!date_is_valid(&Components::default()));
    }

    #[test]
    fn test_time_bounds() {
        assert!(time_is_valid(&Components::date_time(2024, 1, 1, 0, 0, 0)));
        assert!(time_is_valid(&Components::date_time(2024, 1, 1, 23, 59, 59)));
        assert!(!time_is_valid(&Components::date_time(2024, 1, 1, 24, 0, 0)));
        assert!(!time_is_valid(&Components::date_time(2024, 1, 1, 0, 60, 0)));
        assert!(!time_is_valid(&Components::date_time(2024, 1, 1, 0, 0, -1)));
        assert!(!time_is_valid(&Components::date(2024, 1, 1)));
    }

    #[test]
    fn test_rules_are_independent() {
        let c = Components::date_time(2023, 2, 29, 12, 0, 0);
        assert!(!Rule::Date.holds(&c));
        assert!(Rule::Time.holds(&c));
        let c = Components::date_time(2024, 2, 29, 25, 0, 0);
        assert!(Rule::Date.holds(&c));
        assert!(!Rule::Time.holds(&c));
    }
}
