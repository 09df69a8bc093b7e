//! Wall-clock time handling for display boards.
//!
//! Schedule records carry times as "HH:MM" strings in local wall-clock time.
//! Boards compare times at minute resolution within a single service day, so
//! `BoardTime` is simply a minute-of-day value with a strict parser.

use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A minute-resolution wall-clock time, as shown on a board.
///
/// Ordered by minute of day. All board comparisons (past-due filtering,
/// chronological sorting, the platform reveal window) happen at this
/// resolution; seconds never enter the model.
///
/// # Examples
///
/// ```
/// use afficheur_server::domain::BoardTime;
///
/// let t = BoardTime::parse_hhmm("14:30").unwrap();
/// assert_eq!(t.to_string(), "14:30");
/// assert_eq!(t.minute_of_day(), 14 * 60 + 30);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardTime {
    minutes: u16,
}

impl BoardTime {
    /// Create a time from hour and minute components.
    ///
    /// Returns an error if the components are out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }
        Ok(Self {
            minutes: (hour * 60 + minute) as u16,
        })
    }

    /// Parse a time from strict "HH:MM" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use afficheur_server::domain::BoardTime;
    ///
    /// assert!(BoardTime::parse_hhmm("00:00").is_ok());
    /// assert!(BoardTime::parse_hhmm("23:59").is_ok());
    ///
    /// assert!(BoardTime::parse_hhmm("1430").is_err());
    /// assert!(BoardTime::parse_hhmm("14:3").is_err());
    /// assert!(BoardTime::parse_hhmm("25:00").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 5 characters: HH:MM
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;

        Self::from_hm(hour, minute)
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        (self.minutes / 60) as u32
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        (self.minutes % 60) as u32
    }

    /// Minutes since local midnight.
    pub fn minute_of_day(&self) -> u32 {
        self.minutes as u32
    }

    /// Signed minutes from `now` until this time.
    ///
    /// Positive when this time is later in the day than `now`, zero when
    /// equal, negative when already past.
    ///
    /// # Examples
    ///
    /// ```
    /// use afficheur_server::domain::BoardTime;
    ///
    /// let now = BoardTime::parse_hhmm("08:00").unwrap();
    /// let dep = BoardTime::parse_hhmm("08:25").unwrap();
    /// assert_eq!(dep.minutes_until(now), 25);
    /// assert_eq!(now.minutes_until(dep), -25);
    /// ```
    pub fn minutes_until(&self, now: BoardTime) -> i32 {
        self.minutes as i32 - now.minutes as i32
    }
}

impl fmt::Debug for BoardTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoardTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for BoardTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl serde::Serialize for BoardTime {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
