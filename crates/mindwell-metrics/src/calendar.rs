use jiff::civil::Date;
use jiff::tz::TimeZone;
use jiff::{Timestamp, ToSpan};

pub const SECONDS_PER_DAY: i64 = 86_400;

/// The calendar day `ts` falls on in `tz`.
pub fn local_date(ts: Timestamp, tz: &TimeZone) -> Date {
    tz.to_datetime(ts).date()
}

/// Whole calendar days from `earlier` to `later`. Negative when `later`
/// is actually before `earlier`.
pub fn days_between(later: Date, earlier: Date) -> i64 {
    later.duration_since(earlier).as_hours() / 24
}

/// Whole elapsed 24-hour periods between two instants, truncated toward
/// zero. Future instants give a negative count.
pub fn elapsed_days(now: Timestamp, then: Timestamp) -> i64 {
    (now.as_second() - then.as_second()) / SECONDS_PER_DAY
}

pub fn days_before(date: Date, days: i64) -> Date {
    date.saturating_sub(days.days())
}
