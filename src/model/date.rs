use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Error type for due-date construction
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DateError {
    #[error("invalid date: {year}-{month:02}-{day:02} {hour:02}:{minute:02}")]
    InvalidDate {
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    },
}

const MONTH_NAMES: [&str; 12] = [
    "JANUARY",
    "FEBRUARY",
    "MARCH",
    "APRIL",
    "MAY",
    "JUNE",
    "JULY",
    "AUGUST",
    "SEPTEMBER",
    "OCTOBER",
    "NOVEMBER",
    "DECEMBER",
];

/// A task deadline with minute resolution.
///
/// Field order matters: the derived `Ord` compares year, then month, day,
/// hour, minute. Construction goes through [`DueDate::new`], which rejects
/// out-of-range fields, so every held value names a real calendar instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawDueDate")]
pub struct DueDate {
    year: i32,
    month: u32,
    day: u32,
    /// 0-23
    hour: u32,
    minute: u32,
}

/// Unvalidated mirror used to re-check snapshot input on deserialization.
#[derive(Deserialize)]
struct RawDueDate {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
}

impl TryFrom<RawDueDate> for DueDate {
    type Error = DateError;

    fn try_from(raw: RawDueDate) -> Result<Self, Self::Error> {
        DueDate::new(raw.year, raw.month, raw.day, raw.hour, raw.minute)
    }
}

impl DueDate {
    /// Build a due date, rejecting out-of-range fields.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Result<Self, DateError> {
        if hour > 23 || minute > 59 || NaiveDate::from_ymd_opt(year, month, day).is_none() {
            return Err(DateError::InvalidDate {
                year,
                month,
                day,
                hour,
                minute,
            });
        }
        Ok(DueDate {
            year,
            month,
            day,
            hour,
            minute,
        })
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn day(self) -> u32 {
        self.day
    }

    pub fn hour(self) -> u32 {
        self.hour
    }

    pub fn minute(self) -> u32 {
        self.minute
    }

    /// Convert to a chrono value for day arithmetic.
    pub fn to_naive(self) -> NaiveDateTime {
        // Fields were range-checked at construction.
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .and_then(|d| d.and_hms_opt(self.hour, self.minute, 0))
            .unwrap()
    }

    /// Human-readable form on a 12-hour clock, e.g. `2024 MARCH 15, 3:05 pm`.
    pub fn formatted(self) -> String {
        let (hour, suffix) = match self.hour {
            0 => (12, "am"),
            1..=11 => (self.hour, "am"),
            12 => (12, "pm"),
            _ => (self.hour - 12, "pm"),
        };
        format!(
            "{} {} {}, {}:{:02} {}",
            self.year,
            MONTH_NAMES[self.month as usize - 1],
            self.day,
            hour,
            self.minute,
            suffix
        )
    }
}

impl From<NaiveDateTime> for DueDate {
    /// Truncates to minute resolution.
    fn from(value: NaiveDateTime) -> Self {
        DueDate {
            year: value.year(),
            month: value.month(),
            day: value.day(),
            hour: value.hour(),
            minute: value.minute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DueDate {
        DueDate::new(year, month, day, hour, minute).unwrap()
    }

    #[test]
    fn new_accepts_valid_fields() {
        let d = date(2026, 3, 15, 15, 5);
        assert_eq!(d.year(), 2026);
        assert_eq!(d.month(), 3);
        assert_eq!(d.day(), 15);
        assert_eq!(d.hour(), 15);
        assert_eq!(d.minute(), 5);
    }

    #[test]
    fn new_rejects_out_of_range_fields() {
        assert!(DueDate::new(2026, 3, 15, 24, 0).is_err());
        assert!(DueDate::new(2026, 3, 15, 0, 60).is_err());
        assert!(DueDate::new(2026, 2, 30, 12, 0).is_err());
        assert!(DueDate::new(2026, 13, 1, 12, 0).is_err());
        assert!(DueDate::new(2026, 0, 1, 12, 0).is_err());
    }

    #[test]
    fn new_accepts_leap_day() {
        assert!(DueDate::new(2028, 2, 29, 0, 0).is_ok());
        assert!(DueDate::new(2026, 2, 29, 0, 0).is_err());
    }

    #[test]
    fn ordering_is_field_by_field() {
        assert!(date(2025, 12, 31, 23, 59) < date(2026, 1, 1, 0, 0));
        assert!(date(2026, 3, 15, 9, 30) < date(2026, 3, 15, 9, 31));
        assert!(date(2026, 3, 15, 9, 30) < date(2026, 4, 1, 0, 0));
        assert_eq!(date(2026, 3, 15, 9, 30), date(2026, 3, 15, 9, 30));
    }

    #[test]
    fn formatted_afternoon() {
        assert_eq!(date(2024, 3, 15, 15, 5).formatted(), "2024 MARCH 15, 3:05 pm");
    }

    #[test]
    fn formatted_morning_pads_minutes() {
        assert_eq!(date(2026, 11, 2, 9, 0).formatted(), "2026 NOVEMBER 2, 9:00 am");
    }

    #[test]
    fn formatted_midnight_and_noon() {
        assert_eq!(date(2026, 1, 1, 0, 30).formatted(), "2026 JANUARY 1, 12:30 am");
        assert_eq!(date(2026, 1, 1, 12, 30).formatted(), "2026 JANUARY 1, 12:30 pm");
    }

    #[test]
    fn naive_round_trip_truncates_seconds() {
        let naive = NaiveDate::from_ymd_opt(2026, 7, 4)
            .unwrap()
            .and_hms_opt(18, 45, 33)
            .unwrap();
        let due = DueDate::from(naive);
        assert_eq!(due, date(2026, 7, 4, 18, 45));
        assert_eq!(due.to_naive(), naive.with_second(0).unwrap());
    }

    #[test]
    fn deserialization_revalidates() {
        let ok: Result<DueDate, _> =
            serde_json::from_str(r#"{"year":2026,"month":3,"day":15,"hour":9,"minute":30}"#);
        assert_eq!(ok.unwrap(), date(2026, 3, 15, 9, 30));

        let bad: Result<DueDate, _> =
            serde_json::from_str(r#"{"year":2026,"month":2,"day":30,"hour":9,"minute":30}"#);
        assert!(bad.is_err());
    }
}
