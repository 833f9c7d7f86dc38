//! Clock Port - Local wall-clock time.

use chrono::{DateTime, FixedOffset};

use crate::domain::foundation::{CalendarDay, TimeOfDay};

/// Provides the current local time.
///
/// "Today" and the time of day are both read from `now()`, so they always
/// agree on which day it is.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;

    fn today(&self) -> CalendarDay {
        CalendarDay::of(&self.now())
    }

    fn time_of_day(&self) -> TimeOfDay {
        TimeOfDay::of(&self.now())
    }
}
