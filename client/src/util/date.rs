//! Local calendar date for the report header.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use time::{Date, Month};

/// Build a date from JavaScript-style parts (`month0` is 0-based).
#[must_use]
pub fn calendar_date(year: i32, month0: u32, day: u32) -> Option<Date> {
    let month = Month::try_from(u8::try_from(month0 + 1).ok()?).ok()?;
    Date::from_calendar_date(year, month, u8::try_from(day).ok()?).ok()
}

/// Today in the visitor's local time zone.
#[must_use]
pub fn today() -> Date {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        #[allow(clippy::cast_possible_wrap)]
        let year = now.get_full_year() as i32;
        calendar_date(year, now.get_month(), now.get_date())
            .unwrap_or_else(|| time::OffsetDateTime::UNIX_EPOCH.date())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().date()
    }
}
