//! FHIR temporal values with partial precision.
//!
//! FHIR allows a `dateTime` to stop at the year, the month or the day, and a
//! time to carry arbitrarily many fractional digits and an optional offset.
//! The types here keep exactly the components that were written, so that
//! formatting a parsed canonical literal reproduces it:
//!
//! ```rust
//! use caduceus_fhir::date_time::{XsDateTime, XsTimeZone};
//!
//! let parsed: XsDateTime = "2014-01-23T00:00:00Z".parse().unwrap();
//! assert_eq!(parsed.zone, Some(XsTimeZone::Utc));
//! assert_eq!(parsed.to_string(), "2014-01-23T00:00:00Z");
//!
//! let partial: XsDateTime = "2015-02".parse().unwrap();
//! assert_eq!(partial.date.day, None);
//! assert_eq!(partial.to_string(), "2015-02");
//! ```

pub mod format;
pub mod parser;

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime as ChronoDateTime, Datelike, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::error::FormatError;

pub use parser::{
    format_date, format_date_time, format_time, format_time_zone, parse_date, parse_date_time,
    parse_instant, parse_time, parse_time_zone,
};

/// Which date components an [`XsDate`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DatePrecision {
    /// `YYYY`
    Year,
    /// `YYYY-MM`
    YearMonth,
    /// `YYYY-MM-DD`
    Day,
}

/// A calendar date truncated to year, month or day.
///
/// `day` is only meaningful when `month` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XsDate {
    pub year: i32,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl XsDate {
    pub fn from_year(year: i32) -> Self {
        Self {
            year,
            month: None,
            day: None,
        }
    }

    pub fn from_year_month(year: i32, month: u32) -> Self {
        Self {
            year,
            month: Some(month),
            day: None,
        }
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month: Some(month),
            day: Some(day),
        }
    }

    pub fn precision(&self) -> DatePrecision {
        match (self.month, self.day) {
            (Some(_), Some(_)) => DatePrecision::Day,
            (Some(_), None) => DatePrecision::YearMonth,
            _ => DatePrecision::Year,
        }
    }

    /// Checks the component ranges and, for full dates, the calendar.
    pub fn validate(&self) -> Result<(), FormatError> {
        if self.day.is_some() && self.month.is_none() {
            return Err(FormatError::DayWithoutMonth);
        }
        // Reparsing the rendering applies the same rules as reading it from JSON.
        parse_date(&format_date(self)).map(|_| ())
    }

    /// The first day covered by this date.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month.unwrap_or(1), self.day.unwrap_or(1))
    }
}

impl From<NaiveDate> for XsDate {
    fn from(date: NaiveDate) -> Self {
        XsDate::from_ymd(date.year(), date.month(), date.day())
    }
}

/// A time of day. Parsed times always carry seconds; a fraction, when set,
/// lies strictly between zero and one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XsTime {
    pub hour: u32,
    pub minute: u32,
    pub second: Option<u32>,
    pub fraction: Option<f64>,
}

impl XsTime {
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second: Some(second),
            fraction: None,
        }
    }

    pub fn with_fraction(mut self, fraction: f64) -> Self {
        self.fraction = Some(fraction);
        self
    }

    pub fn validate(&self) -> Result<(), FormatError> {
        parse_time(&format_time(self)).map(|_| ())
    }

    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        let nanos = (self.fraction.unwrap_or(0.0) * 1_000_000_000.0).round();
        let nanos = (nanos.max(0.0) as u32).min(999_999_999);
        NaiveTime::from_hms_nano_opt(self.hour, self.minute, self.second.unwrap_or(0), nanos)
    }
}

/// A UTC offset. `Z` and `+00:00` are kept apart so both round-trip as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XsTimeZone {
    Utc,
    Offset {
        negative: bool,
        hours: u32,
        minutes: u32,
    },
}

impl XsTimeZone {
    pub fn offset(hours: i32, minutes: u32) -> Self {
        XsTimeZone::Offset {
            negative: hours < 0,
            hours: hours.unsigned_abs(),
            minutes,
        }
    }

    /// Signed offset from UTC in minutes.
    pub fn offset_minutes(&self) -> i32 {
        match self {
            XsTimeZone::Utc => 0,
            XsTimeZone::Offset {
                negative,
                hours,
                minutes,
            } => {
                let magnitude = (*hours as i32) * 60 + (*minutes as i32);
                if *negative { -magnitude } else { magnitude }
            }
        }
    }
}

/// A FHIR `dateTime`: a partial date, optionally followed by a time and zone.
///
/// A time requires a full date and a zone requires a time; [`Self::validate`]
/// enforces this for values built by hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XsDateTime {
    pub date: XsDate,
    pub time: Option<XsTime>,
    pub zone: Option<XsTimeZone>,
}

impl XsDateTime {
    pub fn new(date: XsDate, time: Option<XsTime>, zone: Option<XsTimeZone>) -> Self {
        Self { date, time, zone }
    }

    pub fn validate(&self) -> Result<(), FormatError> {
        if self.zone.is_some() && self.time.is_none() {
            return Err(FormatError::ZoneWithoutTime);
        }
        if self.time.is_some() && self.date.precision() != DatePrecision::Day {
            return Err(FormatError::TimeWithoutFullDate);
        }
        self.date.validate()?;
        if let Some(time) = &self.time {
            time.validate()?;
        }
        if let Some(zone) = &self.zone {
            parse_time_zone(&format_time_zone(zone))?;
        }
        Ok(())
    }

    /// The instant this value starts at, in UTC. Missing components take their
    /// lowest value and a missing zone is read as UTC.
    pub fn to_chrono_utc(&self) -> Option<ChronoDateTime<Utc>> {
        let date = self.date.to_naive_date()?;
        let time = match &self.time {
            Some(time) => time.to_naive_time()?,
            None => NaiveTime::from_hms_opt(0, 0, 0)?,
        };
        let offset = i64::from(self.zone.map_or(0, |zone| zone.offset_minutes()));
        let utc = date.and_time(time) - chrono::Duration::minutes(offset);
        Some(ChronoDateTime::<Utc>::from_naive_utc_and_offset(utc, Utc))
    }
}

impl From<XsDate> for XsDateTime {
    fn from(date: XsDate) -> Self {
        Self {
            date,
            time: None,
            zone: None,
        }
    }
}

/// A FHIR `instant`: a [`XsDateTime`] known to carry a full date, a time and a zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XsInstant(pub(crate) XsDateTime);

impl XsInstant {
    pub fn as_date_time(&self) -> &XsDateTime {
        &self.0
    }

    pub fn to_chrono_utc(&self) -> Option<ChronoDateTime<Utc>> {
        self.0.to_chrono_utc()
    }
}

impl TryFrom<XsDateTime> for XsInstant {
    type Error = FormatError;

    fn try_from(value: XsDateTime) -> Result<Self, Self::Error> {
        parse_instant(&format_date_time(&value))
    }
}

macro_rules! literal_impls {
    ($ty:ty, $parse:path, $format:path, $expecting:literal) => {
        impl FromStr for $ty {
            type Err = FormatError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $parse(s)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&$format(self))
            }
        }

        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(&$format(self))
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                $parse(&s).map_err(|e| {
                    de::Error::custom(format!(concat!("invalid FHIR ", $expecting, " {:?}: {}"), s, e))
                })
            }
        }
    };
}

fn format_instant(instant: &XsInstant) -> String {
    format_date_time(&instant.0)
}

literal_impls!(XsDate, parse_date, format_date, "date");
literal_impls!(XsTime, parse_time, format_time, "time");
literal_impls!(XsTimeZone, parse_time_zone, format_time_zone, "time zone");
literal_impls!(XsDateTime, parse_date_time, format_date_time, "dateTime");
literal_impls!(XsInstant, parse_instant, format_instant, "instant");

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_precision() {
        assert_eq!(XsDate::from_year(2015).precision(), DatePrecision::Year);
        assert_eq!(XsDate::from_year_month(2015, 2).precision(), DatePrecision::YearMonth);
        assert_eq!(XsDate::from_ymd(2015, 2, 22).precision(), DatePrecision::Day);
    }

    #[test]
    fn test_validate_rejects_inconsistent_values() {
        let date = XsDate {
            year: 2015,
            month: None,
            day: Some(3),
        };
        assert_eq!(date.validate(), Err(FormatError::DayWithoutMonth));

        let zone_only = XsDateTime::new(XsDate::from_ymd(2015, 1, 1), None, Some(XsTimeZone::Utc));
        assert_eq!(zone_only.validate(), Err(FormatError::ZoneWithoutTime));

        let time_on_month = XsDateTime::new(
            XsDate::from_year_month(2015, 1),
            Some(XsTime::from_hms(1, 2, 3)),
            None,
        );
        assert_eq!(time_on_month.validate(), Err(FormatError::TimeWithoutFullDate));
    }

    #[test]
    fn test_offset_minutes() {
        assert_eq!(XsTimeZone::offset(-5, 30).offset_minutes(), -330);
        assert_eq!(XsTimeZone::Utc.offset_minutes(), 0);
    }

    #[test]
    fn test_to_chrono_applies_offset() {
        let value: XsDateTime = "2015-01-31T21:32:52+01:00".parse().unwrap();
        let expected = Utc.with_ymd_and_hms(2015, 1, 31, 20, 32, 52).unwrap();
        assert_eq!(value.to_chrono_utc(), Some(expected));
    }

    #[test]
    fn test_partial_date_to_chrono_uses_first_day() {
        let value: XsDateTime = "2015-02".parse().unwrap();
        let expected = Utc.with_ymd_and_hms(2015, 2, 1, 0, 0, 0).unwrap();
        assert_eq!(value.to_chrono_utc(), Some(expected));
    }

    #[test]
    fn test_serde_as_string() {
        let date: XsDate = serde_json::from_str("\"2015-02-22\"").unwrap();
        assert_eq!(date, XsDate::from_ymd(2015, 2, 22));
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"2015-02-22\"");
        assert!(serde_json::from_str::<XsDate>("\"2015-02-30\"").is_err());
    }

    #[test]
    fn test_instant_from_date_time() {
        let complete: XsDateTime = "2015-02-07T13:28:17Z".parse().unwrap();
        assert!(XsInstant::try_from(complete).is_ok());
        let partial = XsDateTime::from(XsDate::from_year(2015));
        assert!(XsInstant::try_from(partial).is_err());
    }
}
