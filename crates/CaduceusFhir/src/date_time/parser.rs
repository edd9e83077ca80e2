//! Grammar-checked parsing and canonical formatting of FHIR temporal literals.
//!
//! Every parser matches the whole input against one anchored pattern before
//! looking at any component, so malformed input never yields a partial value.
//! Composite literals are split by their pattern and each fragment is handed
//! to the parser for that fragment.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::trace;

use super::format::{format_fraction, format_two_digits, format_year};
use super::{XsDate, XsDateTime, XsInstant, XsTime, XsTimeZone};
use crate::error::{FormatError, TemporalKind};

static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<year>-?(?:[0-9]{3}[1-9]|[0-9]{2}[1-9]0|[0-9][1-9]00|[1-9]000))(?:-(?P<month>0[1-9]|1[0-2])(?:-(?P<day>0[1-9]|[12][0-9]|3[01]))?)?$",
    )
    .expect("date regex must compile")
});

static TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<hour>[01][0-9]|2[0-3]):(?P<minute>[0-5][0-9]):(?P<second>[0-5][0-9])(?P<fraction>\.[0-9]+)?$",
    )
    .expect("time regex must compile")
});

static TIME_ZONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:Z|(?P<sign>[+-])(?P<hours>0[0-9]|1[0-3]|14):(?P<minutes>[0-5][0-9]))$")
        .expect("time zone regex must compile")
});

static DATE_TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?:(?P<partial>-?[0-9]{4}(?:-[0-9]{2}(?:-[0-9]{2})?)?)",
        r"|(?P<date>-?[0-9]{4}-[0-9]{2}-[0-9]{2})",
        r"T(?P<time>[0-9]{2}:[0-9]{2}:[0-9]{2}(?:\.[0-9]+)?)",
        r"(?P<zone>Z|[+-][0-9]{2}:[0-9]{2})?)$",
    ))
    .expect("dateTime regex must compile")
});

fn reject(kind: TemporalKind, input: &str) -> FormatError {
    trace!(kind = %kind, input, "Rejected temporal literal");
    FormatError::grammar(kind, input)
}

/// Re-labels a fragment failure with the literal it came from.
fn in_context(error: FormatError, kind: TemporalKind, input: &str) -> FormatError {
    match error {
        FormatError::Grammar { .. } => reject(kind, input),
        FormatError::InvalidCalendarDate { .. } => FormatError::InvalidCalendarDate {
            input: input.to_string(),
        },
        other => other,
    }
}

fn group<T: std::str::FromStr>(
    captures: &Captures<'_>,
    name: &str,
    kind: TemporalKind,
    input: &str,
) -> Result<Option<T>, FormatError> {
    captures
        .name(name)
        .map(|m| m.as_str().parse::<T>().map_err(|_| reject(kind, input)))
        .transpose()
}

/// Parses `YYYY`, `YYYY-MM` or `YYYY-MM-DD`, with an optional leading `-`.
/// Year `0000` does not exist, signed or not.
///
/// A full date must exist in the proleptic Gregorian calendar.
pub fn parse_date(input: &str) -> Result<XsDate, FormatError> {
    let kind = TemporalKind::Date;
    let captures = DATE_PATTERN
        .captures(input)
        .ok_or_else(|| reject(kind, input))?;

    let year = group::<i32>(&captures, "year", kind, input)?.ok_or_else(|| reject(kind, input))?;
    let month = group::<u32>(&captures, "month", kind, input)?;
    let day = group::<u32>(&captures, "day", kind, input)?;
    let date = XsDate { year, month, day };

    if day.is_some() && date.to_naive_date().is_none() {
        trace!(input, "Rejected non-existent calendar date");
        return Err(FormatError::InvalidCalendarDate {
            input: input.to_string(),
        });
    }
    Ok(date)
}

/// Parses `hh:mm:ss` with optional fractional seconds. Zone suffixes are not
/// part of a time literal.
pub fn parse_time(input: &str) -> Result<XsTime, FormatError> {
    let kind = TemporalKind::Time;
    let captures = TIME_PATTERN
        .captures(input)
        .ok_or_else(|| reject(kind, input))?;

    let hour = group::<u32>(&captures, "hour", kind, input)?.ok_or_else(|| reject(kind, input))?;
    let minute =
        group::<u32>(&captures, "minute", kind, input)?.ok_or_else(|| reject(kind, input))?;
    let second = group::<u32>(&captures, "second", kind, input)?;
    let fraction = match captures.name("fraction") {
        Some(m) => {
            let value = format!("0{}", m.as_str())
                .parse::<f64>()
                .map_err(|_| reject(kind, input))?;
            // Digits that round up to a whole second cannot be kept as a fraction.
            if value >= 1.0 {
                return Err(reject(kind, input));
            }
            Some(value).filter(|value| *value > 0.0)
        }
        None => None,
    };

    Ok(XsTime {
        hour,
        minute,
        second,
        fraction,
    })
}

/// Parses `Z`, `+hh:mm` or `-hh:mm`, bounded by fourteen hours either way.
pub fn parse_time_zone(input: &str) -> Result<XsTimeZone, FormatError> {
    let kind = TemporalKind::TimeZone;
    let captures = TIME_ZONE_PATTERN
        .captures(input)
        .ok_or_else(|| reject(kind, input))?;

    let Some(sign) = captures.name("sign") else {
        return Ok(XsTimeZone::Utc);
    };
    let hours = group::<u32>(&captures, "hours", kind, input)?.ok_or_else(|| reject(kind, input))?;
    let minutes =
        group::<u32>(&captures, "minutes", kind, input)?.ok_or_else(|| reject(kind, input))?;
    if hours == 14 && minutes != 0 {
        return Err(reject(kind, input));
    }

    Ok(XsTimeZone::Offset {
        negative: sign.as_str() == "-",
        hours,
        minutes,
    })
}

/// Parses any FHIR `dateTime`: a partial date, or a full date followed by a
/// time and an optional zone.
pub fn parse_date_time(input: &str) -> Result<XsDateTime, FormatError> {
    let kind = TemporalKind::DateTime;
    let captures = DATE_TIME_PATTERN
        .captures(input)
        .ok_or_else(|| reject(kind, input))?;

    if let Some(partial) = captures.name("partial") {
        let date = parse_date(partial.as_str()).map_err(|e| in_context(e, kind, input))?;
        return Ok(XsDateTime::from(date));
    }

    let (Some(date), Some(time)) = (captures.name("date"), captures.name("time")) else {
        return Err(reject(kind, input));
    };
    let date = parse_date(date.as_str()).map_err(|e| in_context(e, kind, input))?;
    let time = parse_time(time.as_str()).map_err(|e| in_context(e, kind, input))?;
    let zone = captures
        .name("zone")
        .map(|zone| parse_time_zone(zone.as_str()))
        .transpose()
        .map_err(|e| in_context(e, kind, input))?;

    Ok(XsDateTime {
        date,
        time: Some(time),
        zone,
    })
}

/// Parses a FHIR `instant`: a `dateTime` that carries a time and a zone.
pub fn parse_instant(input: &str) -> Result<XsInstant, FormatError> {
    let kind = TemporalKind::Instant;
    let date_time = parse_date_time(input).map_err(|e| in_context(e, kind, input))?;
    if date_time.time.is_none() || date_time.zone.is_none() {
        return Err(reject(kind, input));
    }
    Ok(XsInstant(date_time))
}

/// Renders the most specific of `YYYY`, `YYYY-MM` and `YYYY-MM-DD` that the
/// populated fields allow.
pub fn format_date(date: &XsDate) -> String {
    let mut rendered = format_year(date.year);
    if let Some(month) = date.month {
        rendered.push('-');
        rendered.push_str(&format_two_digits(month));
        if let Some(day) = date.day {
            rendered.push('-');
            rendered.push_str(&format_two_digits(day));
        }
    }
    rendered
}

/// Renders `hh:mm:ss[.fff]`; an unset second is written as `00`.
pub fn format_time(time: &XsTime) -> String {
    let mut rendered = format!(
        "{}:{}:{}",
        format_two_digits(time.hour),
        format_two_digits(time.minute),
        format_two_digits(time.second.unwrap_or(0))
    );
    if let Some(digits) = time.fraction.and_then(format_fraction) {
        rendered.push('.');
        rendered.push_str(&digits);
    }
    rendered
}

pub fn format_time_zone(zone: &XsTimeZone) -> String {
    match zone {
        XsTimeZone::Utc => "Z".to_string(),
        XsTimeZone::Offset {
            negative,
            hours,
            minutes,
        } => format!(
            "{}{}:{}",
            if *negative { '-' } else { '+' },
            format_two_digits(*hours),
            format_two_digits(*minutes)
        ),
    }
}

/// Renders a `dateTime`. Without a time only the date is written, whatever
/// the zone holds.
pub fn format_date_time(date_time: &XsDateTime) -> String {
    let mut rendered = format_date(&date_time.date);
    if let Some(time) = &date_time.time {
        rendered.push('T');
        rendered.push_str(&format_time(time));
        if let Some(zone) = &date_time.zone {
            rendered.push_str(&format_time_zone(zone));
        }
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fourteen_hour_bound() {
        assert!(parse_time_zone("+14:00").is_ok());
        assert!(parse_time_zone("-14:00").is_ok());
        assert!(parse_time_zone("+14:30").is_err());
        assert!(parse_time_zone("+15:00").is_err());
    }

    #[test]
    fn test_zero_fraction_is_dropped() {
        let time = parse_time("10:00:00.000").unwrap();
        assert_eq!(time.fraction, None);
        assert_eq!(format_time(&time), "10:00:00");
    }

    #[test]
    fn test_time_requires_full_date() {
        assert!(matches!(
            parse_date_time("2015-01T10:00:00Z"),
            Err(FormatError::Grammar { kind: TemporalKind::DateTime, .. })
        ));
    }

    #[test]
    fn test_calendar_error_keeps_whole_literal() {
        assert_eq!(
            parse_date_time("2017-02-30T10:00:00Z"),
            Err(FormatError::InvalidCalendarDate {
                input: "2017-02-30T10:00:00Z".to_string()
            })
        );
    }

    #[test]
    fn test_instant_needs_zone() {
        assert!(parse_instant("2015-02-07T13:28:17.239+02:00").is_ok());
        assert!(parse_instant("2015-02-07T13:28:17").is_err());
        assert!(parse_instant("2015-02-07").is_err());
    }
}
