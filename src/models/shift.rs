//! Shift library: clock times, shift definitions, hour buckets.
//!
//! A shift is a named clock range (`start`, `end`) that repeats daily.
//! `end <= start` means the shift crosses midnight. The library is loaded
//! once and treated as immutable configuration.
//!
//! # Buckets
//!
//! All per-hour aggregation keys off the weekly bucket grid:
//! `bucket = day_index * 24 + hour`, 168 buckets for a Monday-start week.
//! A shift covers every hour bucket its clock range touches; cross-midnight
//! shifts spill into the following day, and day 6 wraps into day 0.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Days in the weekly horizon.
pub const DAYS_PER_WEEK: usize = 7;

/// Hour buckets in the weekly horizon.
pub const BUCKETS_PER_WEEK: usize = DAYS_PER_WEEK * 24;

/// Day index of Saturday in a Monday-start week.
pub const SATURDAY_INDEX: usize = 5;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// A clock time of day (hours and minutes, no date).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClockTime {
    /// Hour of day (0–23).
    pub hour: u8,
    /// Minute of hour (0–59).
    pub minute: u8,
}

impl ClockTime {
    /// Creates a clock time, clamping to the valid range.
    pub fn new(hour: u8, minute: u8) -> Self {
        Self {
            hour: hour.min(23),
            minute: minute.min(59),
        }
    }

    /// Parses an `HH:MM` string.
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidClockTime(s.to_string());
        let (h, m) = s.split_once(':').ok_or_else(invalid)?;
        let hour: u8 = h.parse().map_err(|_| invalid())?;
        let minute: u8 = m.parse().map_err(|_| invalid())?;
        if hour > 23 || minute > 59 {
            return Err(invalid());
        }
        Ok(Self { hour, minute })
    }

    /// Minutes from midnight.
    #[inline]
    pub fn minutes(&self) -> u32 {
        self.hour as u32 * 60 + self.minute as u32
    }
}

/// A shift definition: a code, a display name, and a daily clock range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftDefinition {
    /// Shift code referenced by area minimums (e.g. `"M"`, `"N12"`).
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// Clock-on time.
    pub start: ClockTime,
    /// Clock-off time. `end <= start` means the shift crosses midnight.
    pub end: ClockTime,
    /// Unpaid break override (minutes). When set, the larger of this and
    /// the scenario-level break is deducted from paid time.
    pub break_minutes: Option<u32>,
}

impl ShiftDefinition {
    /// Creates a shift definition.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        start: ClockTime,
        end: ClockTime,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            start,
            end,
            break_minutes: None,
        }
    }

    /// Sets the per-shift break override.
    pub fn with_break(mut self, minutes: u32) -> Self {
        self.break_minutes = Some(minutes);
        self
    }

    /// Whether the shift clocks off on the following day.
    #[inline]
    pub fn crosses_midnight(&self) -> bool {
        self.end.minutes() <= self.start.minutes()
    }

    /// Shift length in minutes (cross-midnight aware).
    pub fn duration_minutes(&self) -> u32 {
        let start = self.start.minutes();
        let end = self.end.minutes();
        if end <= start {
            end + MINUTES_PER_DAY - start
        } else {
            end - start
        }
    }

    /// Hour buckets this shift covers when worked on `day_index`.
    ///
    /// Returns buckets in the 168-slot weekly grid. Every bucket whose hour
    /// the shift overlaps is included. A half-day covers only the first half
    /// of the window. Day 6 wraps into day 0 (the week is cyclic).
    pub fn buckets(&self, day_index: usize, half: bool) -> Vec<usize> {
        let start = self.start.minutes();
        let mut end = self.end.minutes();
        if end <= start {
            end += MINUTES_PER_DAY;
        }
        if half {
            end = start + (end - start) / 2;
        }

        let first_hour = start / 60;
        let last_hour = end.div_ceil(60);
        (first_hour..last_hour)
            .map(|h| {
                let day = (day_index + h as usize / 24) % DAYS_PER_WEEK;
                day * 24 + h as usize % 24
            })
            .collect()
    }
}

/// An immutable collection of shift definitions, looked up by code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftLibrary {
    shifts: Vec<ShiftDefinition>,
}

impl ShiftLibrary {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self { shifts: Vec::new() }
    }

    /// The standard library: three 8-hour shifts and two 12-hour shifts.
    ///
    /// | Code | Range | |
    /// |------|-------------|----------|
    /// | `M` | 06:00–14:00 | Morning |
    /// | `T` | 14:00–22:00 | Afternoon |
    /// | `N` | 22:00–06:00 | Night (crosses midnight) |
    /// | `D12` | 08:00–20:00 | Day 12h |
    /// | `N12` | 20:00–08:00 | Night 12h (crosses midnight) |
    pub fn standard() -> Self {
        Self::new()
            .with_shift(ShiftDefinition::new(
                "M",
                "Morning",
                ClockTime::new(6, 0),
                ClockTime::new(14, 0),
            ))
            .with_shift(ShiftDefinition::new(
                "T",
                "Afternoon",
                ClockTime::new(14, 0),
                ClockTime::new(22, 0),
            ))
            .with_shift(ShiftDefinition::new(
                "N",
                "Night",
                ClockTime::new(22, 0),
                ClockTime::new(6, 0),
            ))
            .with_shift(ShiftDefinition::new(
                "D12",
                "Day 12h",
                ClockTime::new(8, 0),
                ClockTime::new(20, 0),
            ))
            .with_shift(ShiftDefinition::new(
                "N12",
                "Night 12h",
                ClockTime::new(20, 0),
                ClockTime::new(8, 0),
            ))
    }

    /// Adds a shift definition.
    pub fn with_shift(mut self, shift: ShiftDefinition) -> Self {
        self.shifts.push(shift);
        self
    }

    /// Looks up a shift by code.
    pub fn get(&self, code: &str) -> Option<&ShiftDefinition> {
        self.shifts.iter().find(|s| s.code == code)
    }

    /// Whether a code exists in the library.
    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// All defined shifts, in insertion order.
    pub fn shifts(&self) -> &[ShiftDefinition] {
        &self.shifts
    }
}

impl Default for ShiftLibrary {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_time_parse() {
        let t = ClockTime::parse("06:30").unwrap();
        assert_eq!(t.hour, 6);
        assert_eq!(t.minute, 30);
        assert_eq!(t.minutes(), 390);

        assert!(ClockTime::parse("24:00").is_err());
        assert!(ClockTime::parse("12:60").is_err());
        assert!(ClockTime::parse("noon").is_err());
        assert!(ClockTime::parse("7").is_err());
    }

    #[test]
    fn test_duration() {
        let m = ShiftDefinition::new("M", "", ClockTime::new(6, 0), ClockTime::new(14, 0));
        assert_eq!(m.duration_minutes(), 480);
        assert!(!m.crosses_midnight());

        let n = ShiftDefinition::new("N", "", ClockTime::new(22, 0), ClockTime::new(6, 0));
        assert_eq!(n.duration_minutes(), 480);
        assert!(n.crosses_midnight());
    }

    #[test]
    fn test_buckets_same_day() {
        let m = ShiftDefinition::new("M", "", ClockTime::new(6, 0), ClockTime::new(14, 0));
        let buckets = m.buckets(2, false);
        // Day 2, hours 6..14
        assert_eq!(buckets, (54..62).collect::<Vec<_>>());
    }

    #[test]
    fn test_buckets_cross_midnight() {
        let n = ShiftDefinition::new("N", "", ClockTime::new(22, 0), ClockTime::new(6, 0));
        let buckets = n.buckets(0, false);
        // Day 0 hours 22,23 then day 1 hours 0..6
        let expected: Vec<usize> = vec![22, 23, 24, 25, 26, 27, 28, 29];
        assert_eq!(buckets, expected);
    }

    #[test]
    fn test_buckets_wrap_week() {
        let n = ShiftDefinition::new("N", "", ClockTime::new(22, 0), ClockTime::new(6, 0));
        let buckets = n.buckets(6, false);
        // Day 6 hours 22,23 wrap into day 0 hours 0..6
        let expected: Vec<usize> = vec![166, 167, 0, 1, 2, 3, 4, 5];
        assert_eq!(buckets, expected);
    }

    #[test]
    fn test_buckets_half_day() {
        let m = ShiftDefinition::new("M", "", ClockTime::new(6, 0), ClockTime::new(14, 0));
        let buckets = m.buckets(0, true);
        // First half of 06:00-14:00 → hours 6..10
        assert_eq!(buckets, vec![6, 7, 8, 9]);
    }

    #[test]
    fn test_buckets_partial_hour() {
        // 06:30-14:15 touches hours 6..15
        let s = ShiftDefinition::new("X", "", ClockTime::new(6, 30), ClockTime::new(14, 15));
        let buckets = s.buckets(0, false);
        assert_eq!(buckets, (6..15).collect::<Vec<_>>());
    }

    #[test]
    fn test_standard_library() {
        let lib = ShiftLibrary::standard();
        assert!(lib.contains("M"));
        assert!(lib.contains("T"));
        assert!(lib.contains("N"));
        assert!(lib.contains("D12"));
        assert!(lib.contains("N12"));
        assert!(!lib.contains("X"));

        assert_eq!(lib.get("N12").unwrap().duration_minutes(), 720);
    }

    #[test]
    fn test_break_override() {
        let s = ShiftDefinition::new("M", "", ClockTime::new(6, 0), ClockTime::new(14, 0))
            .with_break(45);
        assert_eq!(s.break_minutes, Some(45));
    }
}
