use chrono::{DateTime, Datelike, Duration, Month, Months, NaiveDate, Utc};

/// A calendar month identified by year and month number (1-12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn from_date(date: NaiveDate) -> Self {
        YearMonth {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the month `n` months before this one.
    pub fn minus_months(self, n: u32) -> Self {
        let index = self.year * 12 + self.month as i32 - 1 - n as i32;
        YearMonth {
            year: index.div_euclid(12),
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    /// Returns the month `n` months after this one.
    pub fn plus_months(self, n: u32) -> Self {
        let index = self.year * 12 + self.month as i32 - 1 + n as i32;
        YearMonth {
            year: index.div_euclid(12),
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    fn chrono_month(self) -> Month {
        u8::try_from(self.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .unwrap_or(Month::January)
    }

    /// English month name, e.g. "March".
    pub fn month_name(self) -> &'static str {
        self.chrono_month().name()
    }

    /// Three-letter English month name, e.g. "Mar".
    pub fn short_month_name(self) -> &'static str {
        &self.month_name()[..3]
    }
}

/// Subtracts calendar months, clamping to the last day of shorter months.
pub fn minus_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN)
}

/// Adds calendar months, clamping to the last day of shorter months.
pub fn plus_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

/// Number of whole months between two dates.
///
/// A month only counts once the day of month has been reached, so
/// 2024-01-31 to 2024-02-29 is zero months.
pub fn whole_months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    let mut months = (end.year() as i64 - start.year() as i64) * 12 + end.month() as i64
        - start.month() as i64;
    if months > 0 && end.day() < start.day() {
        months -= 1;
    } else if months < 0 && end.day() > start.day() {
        months += 1;
    }
    months
}

/// Number of days in the month containing `date`.
pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = date.with_day(1).unwrap_or(date);
    plus_months(first, 1)
        .pred_opt()
        .map(|last| last.day())
        .unwrap_or(28)
}

/// True when `instant` lies in `[now, now + days]`.
pub fn is_within_days(instant: Option<DateTime<Utc>>, now: DateTime<Utc>, days: i64) -> bool {
    match instant {
        Some(at) => at >= now && at <= now + Duration::days(days),
        None => false,
    }
}
