//! Clock
//!
//! Source of the reference date used for promotion eligibility.

use jiff::{Zoned, civil::Date};

/// Supplies the current calendar date.
pub trait Clock {
    /// The date to evaluate promotions against.
    fn today(&self) -> Date;
}

/// Reads the system clock in the local time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        Zoned::now().date()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    date: Date,
}

impl FixedClock {
    /// Create a clock pinned to `date`.
    pub const fn new(date: Date) -> Self {
        Self { date }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.date
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> Date {
        (**self).today()
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::{Weekday, date};

    use super::*;

    #[test]
    fn fixed_clock_reports_pinned_date() {
        let clock = FixedClock::new(date(2024, 5, 7));

        assert_eq!(clock.today(), date(2024, 5, 7));
        assert_eq!(clock.today().weekday(), Weekday::Tuesday);
    }

    #[test]
    fn clock_references_delegate() {
        fn read(clock: impl Clock) -> Date {
            clock.today()
        }

        let clock = FixedClock::new(date(2024, 1, 1));
        let by_ref: &dyn Clock = &clock;

        assert_eq!(read(by_ref), date(2024, 1, 1));
        assert_eq!(read(&clock), date(2024, 1, 1));
    }
}
