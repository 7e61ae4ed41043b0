// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Temporal value types
//!
//! Every type is generic over its numeric representation: [`Integer`]
//! (lossless, the default) or `f64`. Components given as `f64` must hold
//! whole numbers. Constructors validate field ranges; the values are
//! immutable afterwards.
//!
//! `Display` renders ISO-8601 text, e.g. `2024-02-29T12:30:05.000000007+01:00`.

use crate::error::ValueError;
use crate::integer::{Integer, Numeric};
use crate::value::Value;
use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone,
    Timelike,
};
use chrono_tz::Tz;
use serde::Serialize;
use std::fmt;

pub const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// Largest accepted UTC offset in either direction (18 hours)
pub const MAX_OFFSET_SECONDS: i64 = 18 * 3600;

/// Largest year magnitude the server stores
pub const MAX_YEAR: i64 = 999_999_999;

/// Amount of time in months, days, seconds and nanoseconds
///
/// Components are independent and never normalised into each other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Duration<T: Numeric = Integer> {
    months: T,
    days: T,
    seconds: T,
    nanoseconds: T,
}

impl<T: Numeric> Duration<T> {
    pub fn new(months: T, days: T, seconds: T, nanoseconds: T) -> Result<Self, ValueError> {
        whole("months", months)?;
        whole("days", days)?;
        whole("seconds", seconds)?;
        whole("nanoseconds", nanoseconds)?;
        Ok(Self {
            months,
            days,
            seconds,
            nanoseconds,
        })
    }

    pub fn months(&self) -> T {
        self.months
    }

    pub fn days(&self) -> T {
        self.days
    }

    pub fn seconds(&self) -> T {
        self.seconds
    }

    pub fn nanoseconds(&self) -> T {
        self.nanoseconds
    }
}

impl From<chrono::Duration> for Duration<Integer> {
    fn from(delta: chrono::Duration) -> Self {
        let mut seconds = delta.num_seconds();
        let mut nanos = (delta - chrono::Duration::seconds(seconds))
            .num_nanoseconds()
            .unwrap_or(0);
        if nanos < 0 {
            seconds -= 1;
            nanos += NANOS_PER_SECOND;
        }
        Self {
            months: Integer::ZERO,
            days: Integer::ZERO,
            seconds: Integer::from(seconds),
            nanoseconds: Integer::from(nanos),
        }
    }
}

impl<T: Numeric> fmt::Display for Duration<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.seconds.to_integer().as_i64() as i128 * NANOS_PER_SECOND as i128
            + self.nanoseconds.to_integer().as_i64() as i128;
        let sign = if total < 0 { "-" } else { "" };
        let magnitude = total.unsigned_abs();
        let whole_seconds = magnitude / NANOS_PER_SECOND as u128;
        let fraction = magnitude % NANOS_PER_SECOND as u128;

        write!(
            f,
            "P{}M{}DT{}{}",
            self.months.to_integer(),
            self.days.to_integer(),
            sign,
            whole_seconds
        )?;
        if fraction != 0 {
            write!(f, ".{:09}", fraction)?;
        }
        write!(f, "S")
    }
}

/// Time of day without a time zone
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LocalTime<T: Numeric = Integer> {
    hour: T,
    minute: T,
    second: T,
    nanosecond: T,
}

impl<T: Numeric> LocalTime<T> {
    pub fn new(hour: T, minute: T, second: T, nanosecond: T) -> Result<Self, ValueError> {
        in_range("hour", whole("hour", hour)?, 0, 23, "0..=23")?;
        in_range("minute", whole("minute", minute)?, 0, 59, "0..=59")?;
        in_range("second", whole("second", second)?, 0, 59, "0..=59")?;
        in_range(
            "nanosecond",
            whole("nanosecond", nanosecond)?,
            0,
            NANOS_PER_SECOND - 1,
            "0..=999999999",
        )?;
        Ok(Self {
            hour,
            minute,
            second,
            nanosecond,
        })
    }

    pub fn hour(&self) -> T {
        self.hour
    }

    pub fn minute(&self) -> T {
        self.minute
    }

    pub fn second(&self) -> T {
        self.second
    }

    pub fn nanosecond(&self) -> T {
        self.nanosecond
    }

    /// Nanoseconds since midnight
    pub fn nano_of_day(&self) -> i64 {
        ((self.hour.to_integer().as_i64() * 60 + self.minute.to_integer().as_i64()) * 60
            + self.second.to_integer().as_i64())
            * NANOS_PER_SECOND
            + self.nanosecond.to_integer().as_i64()
    }

    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_nano_opt(
            self.hour.to_integer().as_i64() as u32,
            self.minute.to_integer().as_i64() as u32,
            self.second.to_integer().as_i64() as u32,
            self.nanosecond.to_integer().as_i64() as u32,
        )
    }
}

impl From<NaiveTime> for LocalTime<Integer> {
    fn from(time: NaiveTime) -> Self {
        // Leap seconds are represented by chrono as nanosecond >= 1e9
        let nanosecond = (time.nanosecond() as i64).min(NANOS_PER_SECOND - 1);
        Self {
            hour: Integer::from(time.hour()),
            minute: Integer::from(time.minute()),
            second: Integer::from(time.second()),
            nanosecond: Integer::from(nanosecond),
        }
    }
}

impl<T: Numeric> fmt::Display for LocalTime<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hour.to_integer().as_i64(),
            self.minute.to_integer().as_i64(),
            self.second.to_integer().as_i64()
        )?;
        write_nanosecond(f, self.nanosecond.to_integer().as_i64())
    }
}

/// Time of day with a fixed UTC offset
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Time<T: Numeric = Integer> {
    local_time: LocalTime<T>,
    offset_seconds: T,
}

impl<T: Numeric> Time<T> {
    pub fn new(local_time: LocalTime<T>, offset_seconds: T) -> Result<Self, ValueError> {
        check_offset(offset_seconds)?;
        Ok(Self {
            local_time,
            offset_seconds,
        })
    }

    pub fn local_time(&self) -> &LocalTime<T> {
        &self.local_time
    }

    /// Signed offset from UTC
    pub fn offset_seconds(&self) -> T {
        self.offset_seconds
    }
}

impl<T: Numeric> fmt::Display for Time<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.local_time)?;
        write_offset(f, self.offset_seconds.to_integer().as_i64())
    }
}

/// Calendar date in the proleptic Gregorian calendar
///
/// Years range over ±999,999,999. Only years within `chrono`'s range (about
/// ±262,000) convert to `NaiveDate`; [`Date::to_naive_date`] returns `None`
/// for the rest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Date<T: Numeric = Integer> {
    year: T,
    month: T,
    day: T,
}

impl<T: Numeric> Date<T> {
    pub fn new(year: T, month: T, day: T) -> Result<Self, ValueError> {
        let y = whole("year", year)?;
        let m = whole("month", month)?;
        let d = whole("day", day)?;
        in_range("year", y, -MAX_YEAR, MAX_YEAR, "-999999999..=999999999")?;
        if !(1..=12).contains(&m) || d < 1 || d > days_in_month(y, m) {
            return Err(ValueError::InvalidDate {
                year: y,
                month: m,
                day: d,
            });
        }
        Ok(Self { year, month, day })
    }

    pub fn year(&self) -> T {
        self.year
    }

    pub fn month(&self) -> T {
        self.month
    }

    pub fn day(&self) -> T {
        self.day
    }

    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        calendar_date(
            self.year.to_integer().as_i64(),
            self.month.to_integer().as_i64(),
            self.day.to_integer().as_i64(),
        )
    }
}

impl From<NaiveDate> for Date<Integer> {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: Integer::from(date.year()),
            month: Integer::from(date.month()),
            day: Integer::from(date.day()),
        }
    }
}

impl<T: Numeric> fmt::Display for Date<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = self.year.to_integer().as_i64();
        if !(0..=9999).contains(&year) {
            let sign = if year < 0 { '-' } else { '+' };
            write!(f, "{}{:06}", sign, year.unsigned_abs())?;
        } else {
            write!(f, "{:04}", year)?;
        }
        write!(
            f,
            "-{:02}-{:02}",
            self.month.to_integer().as_i64(),
            self.day.to_integer().as_i64()
        )
    }
}

/// Date and time without a time zone
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LocalDateTime<T: Numeric = Integer> {
    local_date: Date<T>,
    local_time: LocalTime<T>,
}

impl<T: Numeric> LocalDateTime<T> {
    pub fn new(local_date: Date<T>, local_time: LocalTime<T>) -> Self {
        Self {
            local_date,
            local_time,
        }
    }

    pub fn local_date(&self) -> &Date<T> {
        &self.local_date
    }

    pub fn local_time(&self) -> &LocalTime<T> {
        &self.local_time
    }

    pub fn to_naive_date_time(&self) -> Option<NaiveDateTime> {
        Some(NaiveDateTime::new(
            self.local_date.to_naive_date()?,
            self.local_time.to_naive_time()?,
        ))
    }
}

impl From<NaiveDateTime> for LocalDateTime<Integer> {
    fn from(value: NaiveDateTime) -> Self {
        Self {
            local_date: value.date().into(),
            local_time: value.time().into(),
        }
    }
}

impl<T: Numeric> fmt::Display for LocalDateTime<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.local_date, self.local_time)
    }
}

/// Date and time with a fixed UTC offset and no named zone
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DateTimeWithZoneOffset<T: Numeric = Integer> {
    local_date_time: LocalDateTime<T>,
    offset_seconds: T,
}

impl<T: Numeric> DateTimeWithZoneOffset<T> {
    pub fn new(local_date_time: LocalDateTime<T>, offset_seconds: T) -> Result<Self, ValueError> {
        check_offset(offset_seconds)?;
        Ok(Self {
            local_date_time,
            offset_seconds,
        })
    }

    pub fn local_date_time(&self) -> &LocalDateTime<T> {
        &self.local_date_time
    }

    pub fn offset_seconds(&self) -> T {
        self.offset_seconds
    }

    pub fn to_chrono(&self) -> Option<DateTime<FixedOffset>> {
        let offset = FixedOffset::east_opt(self.offset_seconds.to_integer().as_i64() as i32)?;
        offset
            .from_local_datetime(&self.local_date_time.to_naive_date_time()?)
            .single()
    }
}

impl From<DateTime<FixedOffset>> for DateTimeWithZoneOffset<Integer> {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self {
            local_date_time: value.naive_local().into(),
            offset_seconds: Integer::from(value.offset().local_minus_utc()),
        }
    }
}

impl<T: Numeric> fmt::Display for DateTimeWithZoneOffset<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.local_date_time)?;
        write_offset(f, self.offset_seconds.to_integer().as_i64())
    }
}

/// Date and time in a named IANA time zone
///
/// The UTC offset is not stored; it follows from the zone rules at this
/// local date time (see [`DateTimeWithZoneId::offset_seconds`]).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateTimeWithZoneId<T: Numeric = Integer> {
    local_date_time: LocalDateTime<T>,
    zone_id: String,
    #[serde(skip)]
    zone: Tz,
}

impl<T: Numeric> DateTimeWithZoneId<T> {
    pub fn new(local_date_time: LocalDateTime<T>, zone_id: impl Into<String>) -> Result<Self, ValueError> {
        let zone_id = zone_id.into();
        let zone: Tz = zone_id
            .parse()
            .map_err(|_| ValueError::UnknownZone(zone_id.clone()))?;
        Ok(Self {
            local_date_time,
            zone_id,
            zone,
        })
    }

    pub fn local_date_time(&self) -> &LocalDateTime<T> {
        &self.local_date_time
    }

    pub fn zone_id(&self) -> &str {
        &self.zone_id
    }

    pub fn zone(&self) -> Tz {
        self.zone
    }

    /// Resolve against the zone rules
    ///
    /// Ambiguous local times (a DST overlap) resolve to the earlier instant;
    /// local times inside a DST gap are an error, as are years chrono
    /// cannot represent.
    pub fn to_chrono(&self) -> Result<DateTime<Tz>, ValueError> {
        let nonexistent = || ValueError::NonexistentLocalTime {
            local: self.local_date_time.to_string(),
            zone: self.zone_id.clone(),
        };
        let naive = self
            .local_date_time
            .to_naive_date_time()
            .ok_or_else(|| ValueError::OutOfRange {
                field: "year",
                value: self.local_date_time.local_date().year().to_integer().as_i64(),
                expected: "a year supported by chrono (about -262143..=262142)",
            })?;
        self.zone
            .from_local_datetime(&naive)
            .earliest()
            .ok_or_else(nonexistent)
    }

    /// UTC offset in effect at this local date time
    pub fn offset_seconds(&self) -> Result<i32, ValueError> {
        Ok(self.to_chrono()?.offset().fix().local_minus_utc())
    }
}

impl From<DateTime<Tz>> for DateTimeWithZoneId<Integer> {
    fn from(value: DateTime<Tz>) -> Self {
        let zone = value.timezone();
        Self {
            local_date_time: value.naive_local().into(),
            zone_id: zone.name().to_string(),
            zone,
        }
    }
}

impl<T: Numeric> fmt::Display for DateTimeWithZoneId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.local_date_time, self.zone_id)
    }
}

pub fn is_duration(value: &Value) -> bool {
    matches!(value, Value::Duration(_))
}

pub fn is_local_time(value: &Value) -> bool {
    matches!(value, Value::LocalTime(_))
}

pub fn is_time(value: &Value) -> bool {
    matches!(value, Value::Time(_))
}

pub fn is_date(value: &Value) -> bool {
    matches!(value, Value::Date(_))
}

pub fn is_local_date_time(value: &Value) -> bool {
    matches!(value, Value::LocalDateTime(_))
}

pub fn is_date_time_with_zone_offset(value: &Value) -> bool {
    matches!(value, Value::DateTimeWithZoneOffset(_))
}

pub fn is_date_time_with_zone_id(value: &Value) -> bool {
    matches!(value, Value::DateTimeWithZoneId(_))
}

fn whole<T: Numeric>(field: &'static str, value: T) -> Result<i64, ValueError> {
    if value.is_integral() {
        Ok(value.to_integer().as_i64())
    } else {
        Err(ValueError::NonIntegral {
            field,
            value: value.to_string(),
        })
    }
}

fn in_range(
    field: &'static str,
    value: i64,
    min: i64,
    max: i64,
    expected: &'static str,
) -> Result<(), ValueError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValueError::OutOfRange {
            field,
            value,
            expected,
        })
    }
}

fn check_offset<T: Numeric>(offset_seconds: T) -> Result<(), ValueError> {
    in_range(
        "offset_seconds",
        whole("offset_seconds", offset_seconds)?,
        -MAX_OFFSET_SECONDS,
        MAX_OFFSET_SECONDS,
        "-64800..=64800",
    )
}

fn days_in_month(year: i64, month: i64) -> i64 {
    match month {
        2 if year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn calendar_date(year: i64, month: i64, day: i64) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(
        i32::try_from(year).ok()?,
        u32::try_from(month).ok()?,
        u32::try_from(day).ok()?,
    )
}

fn write_nanosecond(f: &mut fmt::Formatter<'_>, nanosecond: i64) -> fmt::Result {
    if nanosecond != 0 {
        write!(f, ".{:09}", nanosecond)?;
    }
    Ok(())
}

fn write_offset(f: &mut fmt::Formatter<'_>, offset_seconds: i64) -> fmt::Result {
    if offset_seconds == 0 {
        return write!(f, "Z");
    }
    let sign = if offset_seconds < 0 { '-' } else { '+' };
    let magnitude = offset_seconds.unsigned_abs();
    write!(f, "{}{:02}:{:02}", sign, magnitude / 3600, magnitude % 3600 / 60)?;
    if magnitude % 60 != 0 {
        write!(f, ":{:02}", magnitude % 60)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: i64, m: i64, s: i64, ns: i64) -> LocalTime {
        LocalTime::new(h.into(), m.into(), s.into(), ns.into()).unwrap()
    }

    fn date(y: i64, m: i64, d: i64) -> Date {
        Date::new(y.into(), m.into(), d.into()).unwrap()
    }

    #[test]
    fn test_local_time_bounds() {
        assert!(LocalTime::new(Integer::from(24), 0.into(), 0.into(), 0.into()).is_err());
        assert!(LocalTime::new(Integer::from(0), 60.into(), 0.into(), 0.into()).is_err());
        assert!(LocalTime::new(Integer::from(0), 0.into(), 60.into(), 0.into()).is_err());
        assert!(LocalTime::new(Integer::from(0), 0.into(), 0.into(), NANOS_PER_SECOND.into()).is_err());
        assert!(LocalTime::new(Integer::from(-1), 0.into(), 0.into(), 0.into()).is_err());
        assert_eq!(time(23, 59, 59, 999_999_999).to_string(), "23:59:59.999999999");
    }

    #[test]
    fn test_native_number_components() {
        let t = LocalTime::new(12.0, 30.0, 5.0, 0.0).unwrap();
        assert_eq!(t.hour(), 12.0);
        assert_eq!(t.to_string(), "12:30:05");
        assert!(matches!(
            LocalTime::new(12.5, 0.0, 0.0, 0.0),
            Err(ValueError::NonIntegral { field: "hour", .. })
        ));
        assert!(Duration::new(1.0, f64::NAN, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_calendar_validation() {
        assert!(Date::new(Integer::from(2024), 2.into(), 29.into()).is_ok());
        assert_eq!(
            Date::new(Integer::from(2023), 2.into(), 29.into()),
            Err(ValueError::InvalidDate {
                year: 2023,
                month: 2,
                day: 29
            })
        );
        assert!(Date::new(Integer::from(2023), 13.into(), 1.into()).is_err());
        assert!(Date::new(Integer::from(2023), 0.into(), 1.into()).is_err());
        assert!(Date::new(Integer::from(1900), 2.into(), 29.into()).is_err());
        assert!(Date::new(Integer::from(2000), 2.into(), 29.into()).is_ok());
        assert!(Date::new(Integer::from(-4), 2.into(), 29.into()).is_ok());
    }

    #[test]
    fn test_years_beyond_chrono_range() {
        let far = date(MAX_YEAR, 12, 31);
        assert_eq!(far.to_string(), "+999999999-12-31");
        assert_eq!(far.to_naive_date(), None);
        assert_eq!(date(-MAX_YEAR, 1, 1).to_string(), "-999999999-01-01");
        assert!(Date::new(Integer::from(MAX_YEAR + 1), 1.into(), 1.into()).is_err());
        assert!(Date::new(Integer::from(400_000), 2.into(), 29.into()).is_ok());
        assert!(Date::new(Integer::from(300_100), 2.into(), 29.into()).is_err());

        let zoned = DateTimeWithZoneId::new(LocalDateTime::new(far, time(0, 0, 0, 0)), "UTC").unwrap();
        assert!(matches!(
            zoned.offset_seconds(),
            Err(ValueError::OutOfRange { field: "year", .. })
        ));
    }

    #[test]
    fn test_duration_is_not_normalised() {
        let d = Duration::new(Integer::from(14), 40.into(), 90_000.into(), 2_000_000_000.into()).unwrap();
        assert_eq!(d.months(), Integer::from(14));
        assert_eq!(d.days(), Integer::from(40));
        assert_eq!(d.seconds(), Integer::from(90_000));
        assert_eq!(d.nanoseconds(), Integer::from(2_000_000_000));
    }

    #[test]
    fn test_duration_display() {
        let d = Duration::new(Integer::from(1), 2.into(), 3.into(), 4.into()).unwrap();
        assert_eq!(d.to_string(), "P1M2DT3.000000004S");

        let whole = Duration::new(Integer::ZERO, 0.into(), 60.into(), 0.into()).unwrap();
        assert_eq!(whole.to_string(), "P0M0DT60S");

        let negative = Duration::new(Integer::ZERO, 0.into(), (-1).into(), 500_000_000.into()).unwrap();
        assert_eq!(negative.to_string(), "P0M0DT-0.500000000S");
    }

    #[test]
    fn test_duration_from_chrono() {
        let d: Duration = chrono::Duration::milliseconds(-1500).into();
        assert_eq!(d.seconds(), Integer::from(-2));
        assert_eq!(d.nanoseconds(), Integer::from(500_000_000));
    }

    #[test]
    fn test_offset_rendering() {
        let utc = Time::new(time(10, 0, 0, 0), Integer::ZERO).unwrap();
        assert_eq!(utc.to_string(), "10:00:00Z");

        let east = Time::new(time(10, 0, 0, 0), Integer::from(7200)).unwrap();
        assert_eq!(east.to_string(), "10:00:00+02:00");

        let odd = Time::new(time(10, 0, 0, 0), Integer::from(-(3600 * 5 + 30 * 60 + 15))).unwrap();
        assert_eq!(odd.to_string(), "10:00:00-05:30:15");

        assert!(Time::new(time(10, 0, 0, 0), Integer::from(MAX_OFFSET_SECONDS + 1)).is_err());
    }

    #[test]
    fn test_year_rendering() {
        assert_eq!(date(2024, 3, 9).to_string(), "2024-03-09");
        assert_eq!(date(33, 1, 1).to_string(), "0033-01-01");
        assert_eq!(date(12345, 1, 1).to_string(), "+012345-01-01");
        assert_eq!(date(-44, 3, 15).to_string(), "-000044-03-15");
    }

    #[test]
    fn test_composed_renderings() {
        let ldt = LocalDateTime::new(date(2024, 2, 29), time(12, 30, 5, 7));
        assert_eq!(ldt.to_string(), "2024-02-29T12:30:05.000000007");

        let with_offset = DateTimeWithZoneOffset::new(ldt, Integer::from(3600)).unwrap();
        assert_eq!(with_offset.to_string(), "2024-02-29T12:30:05.000000007+01:00");

        let with_zone = DateTimeWithZoneId::new(ldt, "Europe/Stockholm").unwrap();
        assert_eq!(with_zone.to_string(), "2024-02-29T12:30:05.000000007[Europe/Stockholm]");
    }

    #[test]
    fn test_zone_offset_is_derived() {
        let winter = LocalDateTime::new(date(2024, 1, 15), time(12, 0, 0, 0));
        let summer = LocalDateTime::new(date(2024, 7, 15), time(12, 0, 0, 0));
        let in_winter = DateTimeWithZoneId::new(winter, "Europe/Stockholm").unwrap();
        let in_summer = DateTimeWithZoneId::new(summer, "Europe/Stockholm").unwrap();
        assert_eq!(in_winter.offset_seconds(), Ok(3600));
        assert_eq!(in_summer.offset_seconds(), Ok(7200));
    }

    #[test]
    fn test_dst_overlap_resolves_to_earlier_instant() {
        // Clocks fall back from 03:00 to 02:00 on 2024-10-27 in Stockholm
        let overlap = LocalDateTime::new(date(2024, 10, 27), time(2, 30, 0, 0));
        let in_overlap = DateTimeWithZoneId::new(overlap, "Europe/Stockholm").unwrap();
        assert_eq!(in_overlap.offset_seconds(), Ok(7200));

        let resolved = in_overlap.to_chrono().unwrap();
        assert_eq!(resolved.naive_utc().to_string(), "2024-10-27 00:30:00");
    }

    #[test]
    fn test_dst_gap_and_unknown_zone() {
        // Clocks jump from 02:00 to 03:00 on 2024-03-31 in Stockholm
        let gap = LocalDateTime::new(date(2024, 3, 31), time(2, 30, 0, 0));
        let in_gap = DateTimeWithZoneId::new(gap, "Europe/Stockholm").unwrap();
        assert!(matches!(
            in_gap.offset_seconds(),
            Err(ValueError::NonexistentLocalTime { .. })
        ));

        assert_eq!(
            DateTimeWithZoneId::new(gap, "Mars/Olympus_Mons"),
            Err(ValueError::UnknownZone("Mars/Olympus_Mons".to_string()))
        );
    }

    #[test]
    fn test_chrono_round_trip() {
        let naive = NaiveDate::from_ymd_opt(2020, 5, 17)
            .unwrap()
            .and_hms_nano_opt(8, 15, 30, 123)
            .unwrap();
        let ldt: LocalDateTime = naive.into();
        assert_eq!(ldt.to_naive_date_time(), Some(naive));

        let fixed = FixedOffset::east_opt(-4 * 3600)
            .unwrap()
            .from_local_datetime(&naive)
            .unwrap();
        let with_offset: DateTimeWithZoneOffset = fixed.into();
        assert_eq!(with_offset.offset_seconds(), Integer::from(-4 * 3600));
        assert_eq!(with_offset.to_chrono(), Some(fixed));

        let zoned = chrono_tz::America::New_York.from_local_datetime(&naive).unwrap();
        let with_zone: DateTimeWithZoneId = zoned.into();
        assert_eq!(with_zone.zone_id(), "America/New_York");
        assert_eq!(with_zone.to_chrono(), Ok(zoned));
    }
}
