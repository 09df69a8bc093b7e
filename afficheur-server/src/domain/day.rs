//! Weekday vocabulary and circulation days.
//!
//! The data-entry and import paths store circulation days as English weekday
//! names ("Sunday".."Saturday"), compared case-sensitively. That vocabulary
//! is an external contract and must never be re-localized here.

use std::fmt;

/// A day of the week, in the fixed English vocabulary used by schedule data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Parse a canonical English day name, case-sensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use afficheur_server::domain::Weekday;
    ///
    /// assert_eq!(Weekday::parse("Monday"), Some(Weekday::Monday));
    /// assert_eq!(Weekday::parse("monday"), None);
    /// assert_eq!(Weekday::parse("Lundi"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Sunday" => Some(Weekday::Sunday),
            "Monday" => Some(Weekday::Monday),
            "Tuesday" => Some(Weekday::Tuesday),
            "Wednesday" => Some(Weekday::Wednesday),
            "Thursday" => Some(Weekday::Thursday),
            "Friday" => Some(Weekday::Friday),
            "Saturday" => Some(Weekday::Saturday),
            _ => None,
        }
    }

    /// Returns the canonical English name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(value: chrono::Weekday) -> Self {
        match value {
            chrono::Weekday::Sun => Weekday::Sunday,
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
        }
    }
}

/// The set of weekdays a schedule runs on.
///
/// An empty set means the schedule runs every day. Day names outside the
/// canonical vocabulary are dropped on construction (a miscapitalized name
/// can never match a board's target day), but their presence still marks
/// the circulation as restricted: a list of unrecognized names matches no
/// day at all, exactly as string membership would.
///
/// # Examples
///
/// ```
/// use afficheur_server::domain::{Circulation, Weekday};
///
/// let every_day = Circulation::every_day();
/// assert!(every_day.runs_on(Weekday::Tuesday));
///
/// let weekdays = Circulation::from_names(["Monday", "Friday"]);
/// assert!(weekdays.runs_on(Weekday::Monday));
/// assert!(!weekdays.runs_on(Weekday::Tuesday));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Circulation {
    days: Vec<Weekday>,
    restricted: bool,
}

impl Circulation {
    /// A circulation that runs every day (the empty set).
    pub fn every_day() -> Self {
        Self::default()
    }

    /// Build from day-name strings, dropping names outside the vocabulary.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut days = Vec::new();
        let mut restricted = false;
        for name in names {
            restricted = true;
            if let Some(day) = Weekday::parse(name.as_ref()) {
                if !days.contains(&day) {
                    days.push(day);
                }
            }
        }
        Self { days, restricted }
    }

    /// True if no specific days are set, meaning the schedule runs daily.
    pub fn is_every_day(&self) -> bool {
        !self.restricted
    }

    /// Does the schedule run on the given day?
    pub fn runs_on(&self, day: Weekday) -> bool {
        self.is_every_day() || self.days.contains(&day)
    }

    /// The explicitly listed days, in input order.
    pub fn days(&self) -> &[Weekday] {
        &self.days
    }
}
