//! Promotion Schedules
//!
//! Calendar restrictions on when a promotion may apply.

use std::fmt;

use jiff::civil::{Date, Weekday};
use smallvec::SmallVec;

/// A set of weekdays.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WeekdaySet {
    bits: u8,
}

impl WeekdaySet {
    /// The empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Build a set from the given days.
    pub fn from_days(days: impl IntoIterator<Item = Weekday>) -> Self {
        days.into_iter().fold(Self::empty(), Self::with)
    }

    /// Return a copy of this set that also contains `day`.
    #[must_use]
    pub fn with(self, day: Weekday) -> Self {
        Self {
            bits: self.bits | bit(day),
        }
    }

    /// Whether `day` is in the set.
    pub fn contains(self, day: Weekday) -> bool {
        self.bits & bit(day) != 0
    }

    /// Whether the set has no days.
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Days in the set, Sunday first.
    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        WEEK.into_iter().filter(move |day| self.contains(*day))
    }
}

const WEEK: [Weekday; 7] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

/// Bit for `day`, with Sunday at bit 0.
fn bit(day: Weekday) -> u8 {
    1 << day.to_sunday_zero_offset()
}

impl fmt::Debug for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: SmallVec<[&str; 7]> = self.iter().map(short_name).collect();

        f.write_str(&names.join(", "))
    }
}

fn short_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Sunday => "Sun",
        Weekday::Monday => "Mon",
        Weekday::Tuesday => "Tue",
        Weekday::Wednesday => "Wed",
        Weekday::Thursday => "Thu",
        Weekday::Friday => "Fri",
        Weekday::Saturday => "Sat",
    }
}

/// Inclusive calendar window; either bound may be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    /// First valid date
    pub start: Option<Date>,

    /// Last valid date
    pub end: Option<Date>,
}

impl DateRange {
    /// Create a date range.
    pub const fn new(start: Option<Date>, end: Option<Date>) -> Self {
        Self { start, end }
    }

    /// Whether at least one bound is set.
    pub const fn is_bounded(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    /// Whether `date` falls within the window, bounds included.
    pub fn contains(&self, date: Date) -> bool {
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.start, self.end) {
            (Some(start), Some(end)) if start == end => write!(f, "only {start}"),
            (Some(start), Some(end)) => write!(f, "{start} -> {end}"),
            (Some(start), None) => write!(f, "{start} -> open"),
            (None, Some(end)) => write!(f, "until {end}"),
            (None, None) => f.write_str("always"),
        }
    }
}

/// When a promotion applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TimeScope {
    /// No calendar restriction
    #[default]
    Always,

    /// Only on these weekdays
    Weekdays(WeekdaySet),

    /// Only inside this window
    DateRange(DateRange),

    /// Inside this window, and only on these weekdays
    DateRangeOnWeekdays(DateRange, WeekdaySet),
}

impl TimeScope {
    /// Build a scope from a weekday set and a date window.
    ///
    /// Empty sets and unbounded windows impose no restriction.
    pub fn new(days: WeekdaySet, range: DateRange) -> Self {
        match (days.is_empty(), range.is_bounded()) {
            (true, false) => Self::Always,
            (false, false) => Self::Weekdays(days),
            (true, true) => Self::DateRange(range),
            (false, true) => Self::DateRangeOnWeekdays(range, days),
        }
    }

    /// Whether the scope carries an explicit calendar window.
    pub const fn is_date_bounded(&self) -> bool {
        matches!(self, Self::DateRange(_) | Self::DateRangeOnWeekdays(..))
    }

    /// Whether `date` is inside the scope.
    pub fn contains(&self, date: Date) -> bool {
        match self {
            Self::Always => true,
            Self::Weekdays(days) => days.contains(date.weekday()),
            Self::DateRange(range) => range.contains(date),
            Self::DateRangeOnWeekdays(range, days) => {
                range.contains(date) && days.contains(date.weekday())
            }
        }
    }
}

impl fmt::Display for TimeScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Always => f.write_str("every day"),
            Self::Weekdays(days) => days.fmt(f),
            Self::DateRange(range) => range.fmt(f),
            Self::DateRangeOnWeekdays(range, days) => write!(f, "{range} ({days})"),
        }
    }
}
