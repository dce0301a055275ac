use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

/// Month/day without a year: campaigns are compared on the same calendar
/// position every year, not on an absolute offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

impl MonthDay {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }

    /// Valid in at least one year: 29/02 is, 31/04 and 13/01 are not
    pub fn is_valid(&self) -> bool {
        NaiveDate::from_ymd_opt(2024, self.month, self.day).is_some()
    }

    /// The date in `year`; 29/02 falls back to 28/02 in non-leap years
    pub fn in_year(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
            .or_else(|| NaiveDate::from_ymd_opt(year, self.month, self.day.saturating_sub(1)))
            .unwrap_or_default()
    }
}

/// Same month/day in another year, 29/02 clamped to 28/02
pub fn equivalent_date(date: NaiveDate, target_year: i32) -> NaiveDate {
    MonthDay::of(date).in_year(target_year)
}

pub fn equivalent_range(from: NaiveDate, to: NaiveDate, target_year: i32) -> (NaiveDate, NaiveDate) {
    (
        equivalent_date(from, target_year),
        equivalent_date(to, target_year),
    )
}

/// Every day of `[from, to]`; empty when `from > to`
pub fn days_inclusive(from: NaiveDate, to: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    from.iter_days().take_while(move |d| *d <= to)
}

/// "dd/MM" chart label
pub fn day_label(date: NaiveDate) -> String {
    date.format("%d/%m").to_string()
}
